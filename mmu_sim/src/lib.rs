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

mod address;
mod constants;
mod error;
mod mmu_config;
mod page_fault_handler;
mod page_table;
mod physical_memory;
mod statistics;
mod translation_engine;
pub mod util;

#[cfg(test)]
mod test;

pub mod modules;

pub use address::LogicalAddress;
pub use constants::*;
pub use error::MmuError;
pub use mmu_config::MmuConfig;
pub use page_table::{PageTable, PageTableEntry};
pub use physical_memory::PhysicalMemory;
pub use statistics::Statistics;
pub use translation_engine::{Translation, TranslationEngine, TranslationPath};

/// Index of a frame inside of [`PhysicalMemory`]
pub type FrameNumber = usize;

/// Index of a page inside of the backing store and the [`PageTable`]
pub type PageNumber = u8;
