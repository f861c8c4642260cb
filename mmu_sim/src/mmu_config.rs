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

use crate::{MmuError, NUM_FRAMES};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MmuConfig {
    /// Number of frames in the frame pool.
    ///
    /// Has to be in `1..=NUM_FRAMES`. Once every frame holds a page, any further
    /// page fault fails with [`MmuError::FramePoolExhausted`].
    pub frame_count: usize,
}

impl Default for MmuConfig {
    fn default() -> Self {
        Self {
            frame_count: NUM_FRAMES,
        }
    }
}

impl MmuConfig {
    pub fn validate(&self) -> Result<(), MmuError> {
        if self.frame_count == 0 || self.frame_count > NUM_FRAMES {
            return Err(MmuError::InvalidConfig(format!(
                "frame count has to be between 1 and {}, got {}",
                NUM_FRAMES, self.frame_count
            )));
        }

        Ok(())
    }
}
