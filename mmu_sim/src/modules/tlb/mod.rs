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

mod lru;

pub use lru::{LruTlbModule, TlbEntry};

use crate::{util::LogicalClock, FrameNumber, PageNumber, TLB_CAPACITY};

/// The TLB used by default
pub type DefaultTlbModule = LruTlbModule<TLB_CAPACITY>;

/// Small associative cache of page to frame mappings
pub trait TlbModule {
    fn new() -> Self;

    /// Searches for `page`. On a hit the entry is stamped with a new `clock` value.
    fn lookup(&mut self, page: PageNumber, clock: &mut LogicalClock) -> Option<FrameNumber>;

    /// Stores the mapping `page -> frame`, replacing an entry if the TLB is full.
    ///
    /// Must only be called for pages that are not cached yet.
    fn insert(&mut self, page: PageNumber, frame: FrameNumber, clock: &mut LogicalClock);

    /// Returns `true` if `page` is cached. Does not count as an access.
    fn contains(&self, page: PageNumber) -> bool;

    /// Number of cached mappings
    fn len(&self) -> usize;

    fn capacity(&self) -> usize;
}
