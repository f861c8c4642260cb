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

use crate::{FrameNumber, PageNumber, PAGE_TABLE_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTableEntry {
    pub frame: FrameNumber,

    /// Clock value of the last access that went through the page table.
    /// Only kept for inspection, entries are never evicted.
    pub last_access: u64,
}

/// Maps every page number to the frame it was loaded into.
///
/// An entry, once mapped, is never changed or cleared again.
pub struct PageTable {
    entries: [Option<PageTableEntry>; PAGE_TABLE_SIZE],
}

impl PageTable {
    pub fn new() -> Self {
        Self {
            entries: [None; PAGE_TABLE_SIZE],
        }
    }

    #[inline]
    pub fn lookup(&self, page: PageNumber) -> Option<FrameNumber> {
        self.entries[page as usize].map(|entry| entry.frame)
    }

    #[inline]
    pub fn entry(&self, page: PageNumber) -> Option<&PageTableEntry> {
        self.entries[page as usize].as_ref()
    }

    pub fn last_access(&self, page: PageNumber) -> Option<u64> {
        self.entry(page).map(|entry| entry.last_access)
    }

    /// Maps `page` to `frame`.
    ///
    /// Must only be called for unmapped pages. An existing mapping is kept.
    pub(crate) fn map(&mut self, page: PageNumber, frame: FrameNumber, stamp: u64) {
        let slot = &mut self.entries[page as usize];
        debug_assert!(slot.is_none(), "page {} is already mapped", page);

        slot.get_or_insert(PageTableEntry {
            frame,
            last_access: stamp,
        });
    }

    /// Updates the last access stamp of a mapped page
    pub(crate) fn touch(&mut self, page: PageNumber, stamp: u64) {
        if let Some(entry) = self.entries[page as usize].as_mut() {
            entry.last_access = stamp;
        }
    }

    /// Number of mapped pages
    pub fn mapped_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_some()).count()
    }
}

impl Default for PageTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::PageTable;

    #[test]
    fn test_new_table_is_unmapped() {
        let table = PageTable::new();
        for page in 0..=u8::MAX {
            assert_eq!(table.lookup(page), None);
            assert_eq!(table.last_access(page), None);
        }
        assert_eq!(table.mapped_count(), 0);
    }

    #[test]
    fn test_map_and_touch() {
        let mut table = PageTable::new();
        table.map(7, 3, 1);
        table.map(255, 0, 2);

        assert_eq!(table.lookup(7), Some(3));
        assert_eq!(table.lookup(255), Some(0));
        assert_eq!(table.lookup(8), None);
        assert_eq!(table.mapped_count(), 2);

        assert_eq!(table.last_access(7), Some(1));
        table.touch(7, 10);
        assert_eq!(table.last_access(7), Some(10));
        assert_eq!(table.lookup(7), Some(3), "touch must not change the frame");

        // touching an unmapped page does not map it
        table.touch(8, 11);
        assert_eq!(table.lookup(8), None);
    }
}
