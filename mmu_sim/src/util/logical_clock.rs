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

/// Monotonic counter that orders accesses.
///
/// Shared by the TLB (recency stamps for LRU replacement) and the page table
/// (informational last access stamps). It starts at 0 and the first `tick`
/// returns 1, so a stamp of 0 always means "never touched".
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LogicalClock {
    now: u64,
}

impl LogicalClock {
    pub const fn new() -> Self {
        Self { now: 0 }
    }

    /// Advances the clock and returns the new time
    #[inline]
    pub fn tick(&mut self) -> u64 {
        self.now += 1;
        self.now
    }

    #[inline]
    pub fn now(&self) -> u64 {
        self.now
    }
}
