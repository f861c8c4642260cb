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

use core::ops::Range;

use crate::{FrameNumber, FRAME_SIZE, PAGE_SIZE};

/// Flat byte buffer organized into frames of [`FRAME_SIZE`] bytes.
///
/// Byte `offset` of frame `frame` lives at `frame * FRAME_SIZE + offset`.
pub struct PhysicalMemory {
    data: Box<[u8]>,
}

impl PhysicalMemory {
    /// Creates a zeroed memory with `frame_count` frames
    pub fn new(frame_count: usize) -> Self {
        Self {
            data: vec![0u8; frame_count * FRAME_SIZE].into_boxed_slice(),
        }
    }

    #[inline]
    pub fn frame_count(&self) -> usize {
        self.data.len() / FRAME_SIZE
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// First physical address of `frame`
    #[inline]
    pub const fn frame_base(frame: FrameNumber) -> usize {
        frame * FRAME_SIZE
    }

    #[inline]
    fn frame_range(frame: FrameNumber) -> Range<usize> {
        let base = Self::frame_base(frame);
        base..base + FRAME_SIZE
    }

    /// Copies a whole page into `frame`.
    ///
    /// **Panics** if `frame` is not part of this memory.
    pub fn load_frame(&mut self, frame: FrameNumber, page: &[u8; PAGE_SIZE]) {
        self.data[Self::frame_range(frame)].copy_from_slice(page);
    }

    pub fn frame(&self, frame: FrameNumber) -> Option<&[u8]> {
        self.data.get(Self::frame_range(frame))
    }

    pub fn read(&self, physical_address: usize) -> Option<u8> {
        self.data.get(physical_address).copied()
    }

    /// Reads the byte at `physical_address` as a signed value (`0..=255` maps to `-128..=127`)
    pub fn read_signed(&self, physical_address: usize) -> Option<i8> {
        self.read(physical_address).map(|byte| byte as i8)
    }
}
