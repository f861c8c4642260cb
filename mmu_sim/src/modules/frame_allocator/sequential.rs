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

use log::trace;

use super::FrameAllocatorModule;
use crate::FrameNumber;

/// One-shot allocator: frames are handed out in ascending order starting at
/// frame 0 and are never returned to the pool.
pub struct SequentialFrameAllocator {
    next: FrameNumber,
    frame_count: usize,
}

impl FrameAllocatorModule for SequentialFrameAllocator {
    fn new() -> Self {
        Self {
            next: 0,
            frame_count: 0,
        }
    }

    fn init(&mut self, frame_count: usize) {
        self.next = 0;
        self.frame_count = frame_count;
    }

    fn allocate(&mut self) -> Option<FrameNumber> {
        if self.next >= self.frame_count {
            return None;
        }

        let frame = self.next;
        self.next += 1;
        trace!("Allocate frame {} ({} left)", frame, self.remaining());

        Some(frame)
    }

    fn remaining(&self) -> usize {
        self.frame_count - self.next
    }
}
