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

use log::debug;

use crate::{
    modules::{
        backing_store::BackingStoreModule, frame_allocator::FrameAllocatorModule, tlb::TlbModule,
    },
    util::LogicalClock,
    FrameNumber, MmuError, PageNumber, PageTable, PhysicalMemory, PAGE_SIZE,
};

/// Everything a page fault has to touch, borrowed from the engine for the
/// duration of one fault
pub(crate) struct PageFaultArguments<'a, S: BackingStoreModule, F: FrameAllocatorModule, T: TlbModule> {
    pub(crate) storage: &'a mut S,

    pub(crate) allocator: &'a mut F,

    pub(crate) memory: &'a mut PhysicalMemory,

    pub(crate) page_table: &'a mut PageTable,

    pub(crate) tlb: &'a mut T,

    pub(crate) clock: &'a mut LogicalClock,
}

pub(crate) struct PageFaultHandler;

impl PageFaultHandler {
    /// Loads the unmapped page `page` into a fresh frame.
    ///
    /// The page is read into a scratch buffer first, so if the backing store or the
    /// frame pool fails, memory, page table and TLB stay untouched.
    pub(crate) fn resolve<S: BackingStoreModule, F: FrameAllocatorModule, T: TlbModule>(
        args: PageFaultArguments<'_, S, F, T>,
        page: PageNumber,
    ) -> Result<FrameNumber, MmuError> {
        debug_assert!(args.page_table.lookup(page).is_none());

        let mut buffer = [0u8; PAGE_SIZE];
        args.storage.read_page(page, &mut buffer)?;

        let frame = args
            .allocator
            .allocate()
            .ok_or(MmuError::FramePoolExhausted {
                frame_count: args.memory.frame_count(),
                page,
            })?;
        if frame >= args.memory.frame_count() {
            return Err(MmuError::FrameOutOfRange {
                frame,
                frame_count: args.memory.frame_count(),
            });
        }
        args.memory.load_frame(frame, &buffer);

        let stamp = args.clock.tick();
        args.page_table.map(page, frame, stamp);
        args.tlb.insert(page, frame, args.clock);

        debug!(
            "Page fault: loaded page {} into frame {} ({} frames left)",
            page,
            frame,
            args.allocator.remaining()
        );

        Ok(frame)
    }
}
