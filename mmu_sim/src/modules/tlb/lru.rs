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

use super::TlbModule;
use crate::{util::LogicalClock, FrameNumber, PageNumber};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TlbEntry {
    pub page: PageNumber,
    pub frame: FrameNumber,
}

#[derive(Debug, Clone, Copy, Default)]
struct TlbSlot {
    entry: Option<TlbEntry>,

    /// clock value of the last access, 0 if this slot was never used
    stamp: u64,
}

/// Fully associative TLB with `N` slots and least recently used replacement.
///
/// Lookups and inserts scan all slots. The replaced slot is the one with the
/// smallest stamp, ties go to the lowest index. Empty slots have stamp 0 and
/// are therefore filled first.
pub struct LruTlbModule<const N: usize> {
    slots: [TlbSlot; N],
}

impl<const N: usize> LruTlbModule<N> {
    pub fn entries(&self) -> impl Iterator<Item = &TlbEntry> + '_ {
        self.slots.iter().filter_map(|slot| slot.entry.as_ref())
    }

    fn victim_index(&self) -> usize {
        self.slots
            .iter()
            .enumerate()
            .min_by_key(|(_, slot)| slot.stamp)
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}

impl<const N: usize> TlbModule for LruTlbModule<N> {
    fn new() -> Self {
        Self {
            slots: [TlbSlot::default(); N],
        }
    }

    fn lookup(&mut self, page: PageNumber, clock: &mut LogicalClock) -> Option<FrameNumber> {
        let slot = self
            .slots
            .iter_mut()
            .find(|slot| matches!(slot.entry, Some(entry) if entry.page == page))?;

        slot.stamp = clock.tick();
        slot.entry.map(|entry| entry.frame)
    }

    fn insert(&mut self, page: PageNumber, frame: FrameNumber, clock: &mut LogicalClock) {
        debug_assert!(!self.contains(page), "page {} is already cached", page);

        if N == 0 {
            return;
        }

        let index = self.victim_index();
        let slot = &mut self.slots[index];
        if let Some(old) = slot.entry {
            trace!("TLB: replace page {} in slot {} with page {}", old.page, index, page);
        }

        slot.entry = Some(TlbEntry { page, frame });
        slot.stamp = clock.tick();
    }

    fn contains(&self, page: PageNumber) -> bool {
        self.entries().any(|entry| entry.page == page)
    }

    fn len(&self) -> usize {
        self.entries().count()
    }

    fn capacity(&self) -> usize {
        N
    }
}
