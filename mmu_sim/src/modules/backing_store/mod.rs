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

mod file_storage;
mod memory_storage;

use std::io;

pub use file_storage::FileBackingStore;
pub use memory_storage::MemoryBackingStore;

use crate::{MmuError, PageNumber, PAGE_SIZE};

/// Read-only paged storage from which pages are loaded on a page fault.
pub trait BackingStoreModule {
    /// Reads the region `[offset, offset + dest.len())` into `dest`.
    ///
    /// Reading across [`get_max_size`](Self::get_max_size) fails with
    /// [`io::ErrorKind::UnexpectedEof`]. If this call fails, `dest` might
    /// already contain parts of the region.
    fn read(&mut self, offset: usize, dest: &mut [u8]) -> io::Result<()>;

    /// Returns the size in bytes of this storage
    fn get_max_size(&self) -> usize;

    /// Reads page `page` (`PAGE_SIZE` bytes starting at `page * PAGE_SIZE`) into `dest`
    fn read_page(&mut self, page: PageNumber, dest: &mut [u8; PAGE_SIZE]) -> Result<(), MmuError> {
        self.read(page as usize * PAGE_SIZE, dest)
            .map_err(|source| MmuError::BackingStoreRead { page, source })
    }
}
