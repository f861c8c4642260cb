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

use std::io;

use super::BackingStoreModule;
use crate::BACKING_STORE_SIZE;

/// Backing store that keeps all of its pages in RAM
pub struct MemoryBackingStore {
    data: Vec<u8>,
}

impl MemoryBackingStore {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// A store of [`BACKING_STORE_SIZE`] zero bytes
    pub fn zeroed() -> Self {
        Self::new(vec![0u8; BACKING_STORE_SIZE])
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl BackingStoreModule for MemoryBackingStore {
    fn read(&mut self, offset: usize, dest: &mut [u8]) -> io::Result<()> {
        let src = offset
            .checked_add(dest.len())
            .and_then(|end| self.data.get(offset..end))
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!(
                        "read of {} bytes at offset {} exceeds store size {}",
                        dest.len(),
                        offset,
                        self.data.len()
                    ),
                )
            })?;

        dest.copy_from_slice(src);
        Ok(())
    }

    fn get_max_size(&self) -> usize {
        self.data.len()
    }
}
