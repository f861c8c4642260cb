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

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::{FrameNumber, PageNumber};

/// Errors of the translation pipeline.
///
/// None of these are recovered from locally: a failed translation leaves the
/// engine in the state it had before the call.
#[derive(Debug, Error)]
pub enum MmuError {
    #[error("could not open backing store file {}: {source}", path.display())]
    BackingStoreOpen { path: PathBuf, source: io::Error },

    #[error("error reading page {page} from backing store: {source}")]
    BackingStoreRead { page: PageNumber, source: io::Error },

    #[error("frame pool exhausted: all {frame_count} frames are in use, cannot load page {page}")]
    FramePoolExhausted {
        frame_count: usize,
        page: PageNumber,
    },

    #[error("frame {frame} is outside of the physical memory of {frame_count} frames")]
    FrameOutOfRange {
        frame: FrameNumber,
        frame_count: usize,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
