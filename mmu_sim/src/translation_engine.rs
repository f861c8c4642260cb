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

use core::fmt;

use log::{info, trace};

use crate::{
    modules::{
        backing_store::BackingStoreModule,
        frame_allocator::{FrameAllocatorModule, SequentialFrameAllocator},
        tlb::{DefaultTlbModule, TlbModule},
    },
    page_fault_handler::{PageFaultArguments, PageFaultHandler},
    util::LogicalClock,
    FrameNumber, LogicalAddress, MmuConfig, MmuError, PageNumber, PageTable, PhysicalMemory,
    Statistics,
};

/// How a translation found its frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationPath {
    TlbHit,
    /// TLB miss, but the page was already mapped
    PageTableHit,
    /// the page had to be loaded from the backing store
    PageFault,
}

/// Result of translating one logical address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translation {
    pub logical: LogicalAddress,
    pub page_number: PageNumber,
    pub offset: u8,
    pub frame: FrameNumber,
    pub physical_address: usize,
    /// byte at `physical_address`, interpreted as signed
    pub value: i8,
    pub path: TranslationPath,
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Logical address: {} ; Physical address: {} ; Signed Byte Value: {}",
            self.logical, self.physical_address, self.value
        )
    }
}

/// Translates logical into physical addresses: TLB first, then the page table,
/// and on a miss in both a page fault that loads the page from the backing store.
///
/// Holds all state of one translation run. Nothing is shared between engines.
pub struct TranslationEngine<
    S: BackingStoreModule,
    F: FrameAllocatorModule = SequentialFrameAllocator,
    T: TlbModule = DefaultTlbModule,
> {
    storage: S,
    allocator: F,
    tlb: T,
    page_table: PageTable,
    memory: PhysicalMemory,
    clock: LogicalClock,
    statistics: Statistics,
}

impl<S: BackingStoreModule, F: FrameAllocatorModule, T: TlbModule> TranslationEngine<S, F, T> {
    pub fn new(storage: S, config: MmuConfig) -> Result<Self, MmuError> {
        config.validate()?;

        let mut allocator = F::new();
        allocator.init(config.frame_count);

        let tlb = T::new();
        info!(
            "Created translation engine with {} frames and {} TLB entries",
            config.frame_count,
            tlb.capacity()
        );

        Ok(Self {
            storage,
            allocator,
            tlb,
            page_table: PageTable::new(),
            memory: PhysicalMemory::new(config.frame_count),
            clock: LogicalClock::new(),
            statistics: Statistics::default(),
        })
    }

    pub fn translate(&mut self, logical: LogicalAddress) -> Result<Translation, MmuError> {
        let (page_number, offset) = logical.decompose();

        let (frame, path) = if let Some(frame) = self.tlb.lookup(page_number, &mut self.clock) {
            (frame, TranslationPath::TlbHit)
        } else if let Some(frame) = self.page_table.lookup(page_number) {
            // the TLB is updated on every miss, not only on faults
            self.tlb.insert(page_number, frame, &mut self.clock);
            self.page_table.touch(page_number, self.clock.now());
            (frame, TranslationPath::PageTableHit)
        } else {
            let frame = PageFaultHandler::resolve(
                PageFaultArguments {
                    storage: &mut self.storage,
                    allocator: &mut self.allocator,
                    memory: &mut self.memory,
                    page_table: &mut self.page_table,
                    tlb: &mut self.tlb,
                    clock: &mut self.clock,
                },
                page_number,
            )?;
            (frame, TranslationPath::PageFault)
        };

        let physical_address = PhysicalMemory::frame_base(frame) + offset as usize;
        let value = self
            .memory
            .read_signed(physical_address)
            .ok_or(MmuError::FrameOutOfRange {
                frame,
                frame_count: self.memory.frame_count(),
            })?;

        self.statistics.record(path);
        trace!(
            "Translate {} (page {}, offset {}) -> {} via {:?}",
            logical,
            page_number,
            offset,
            physical_address,
            path
        );

        Ok(Translation {
            logical,
            page_number,
            offset,
            frame,
            physical_address,
            value,
            path,
        })
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn page_table(&self) -> &PageTable {
        &self.page_table
    }

    pub fn physical_memory(&self) -> &PhysicalMemory {
        &self.memory
    }

    pub fn tlb(&self) -> &T {
        &self.tlb
    }

    /// Number of frames that were not handed to any page yet
    pub fn free_frames(&self) -> usize {
        self.allocator.remaining()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
