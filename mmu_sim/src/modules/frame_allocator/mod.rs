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

mod sequential;

pub use sequential::SequentialFrameAllocator;

use crate::FrameNumber;

/// Hands out frames of the physical memory to satisfy page faults
pub trait FrameAllocatorModule {
    /// Creates a new allocator module object.
    ///
    /// **Note**: It first will be initialized before it will be used
    fn new() -> Self;

    /// Initializes the allocator with a pool of frames `[0, frame_count)`
    fn init(&mut self, frame_count: usize);

    /// Takes a frame out of the pool. Returns `None` if the pool is exhausted.
    fn allocate(&mut self) -> Option<FrameNumber>;

    /// Number of frames that can still be allocated
    fn remaining(&self) -> usize;
}
