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

use crate::{
    constants::{OFFSET_BITS, OFFSET_MASK, PAGE_MASK},
    PageNumber,
};

/// A logical address as it is read from the input.
///
/// Only bits 0 to 15 take part in the translation: bits 8 to 15 select the page,
/// bits 0 to 7 the byte inside of that page. Higher bits are ignored and
/// no range check is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LogicalAddress {
    raw: i32,
}

impl LogicalAddress {
    #[inline]
    pub const fn new(raw: i32) -> Self {
        Self { raw }
    }

    /// Builds the address of byte `offset` inside of page `page`
    #[inline]
    pub const fn from_parts(page: PageNumber, offset: u8) -> Self {
        Self {
            raw: ((page as i32) << OFFSET_BITS) | offset as i32,
        }
    }

    #[inline]
    pub const fn raw(&self) -> i32 {
        self.raw
    }

    #[inline]
    pub const fn page_number(&self) -> PageNumber {
        ((self.raw >> OFFSET_BITS) & PAGE_MASK) as PageNumber
    }

    #[inline]
    pub const fn offset(&self) -> u8 {
        (self.raw & OFFSET_MASK) as u8
    }

    /// Splits this address into `(page_number, offset)`
    #[inline]
    pub const fn decompose(&self) -> (PageNumber, u8) {
        (self.page_number(), self.offset())
    }
}

impl From<i32> for LogicalAddress {
    fn from(raw: i32) -> Self {
        Self::new(raw)
    }
}

impl From<u16> for LogicalAddress {
    fn from(raw: u16) -> Self {
        Self::new(raw as i32)
    }
}

impl fmt::Display for LogicalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
