/*
 *  Copyright (C) 2025  Markus Elias Gerber
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

use static_assertions::const_assert_eq;

/// Number of bits of a logical address used for the offset inside of a page
pub const OFFSET_BITS: u32 = 8;

pub const PAGE_SIZE: usize = 256;
pub const FRAME_SIZE: usize = 256;
pub const PAGE_TABLE_SIZE: usize = 256;
pub const NUM_FRAMES: usize = 256;
pub const TLB_CAPACITY: usize = 16;

/// Size of the physical memory in bytes
pub const MEMORY_SIZE: usize = NUM_FRAMES * FRAME_SIZE;

/// Expected size of a backing store in bytes
pub const BACKING_STORE_SIZE: usize = PAGE_TABLE_SIZE * PAGE_SIZE;

pub(crate) const OFFSET_MASK: i32 = (1 << OFFSET_BITS) - 1;
pub(crate) const PAGE_MASK: i32 = (PAGE_TABLE_SIZE as i32) - 1;

const_assert_eq!(PAGE_SIZE, FRAME_SIZE);
const_assert_eq!(PAGE_SIZE, 1 << OFFSET_BITS);
// page numbers have to fit into a `u8`
const_assert_eq!(PAGE_TABLE_SIZE, u8::MAX as usize + 1);
const_assert_eq!(MEMORY_SIZE, 65536);
const_assert_eq!(BACKING_STORE_SIZE, 65536);
