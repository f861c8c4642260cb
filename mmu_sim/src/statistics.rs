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

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::TranslationPath;

/// Running counters of a translation run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Statistics {
    pub translations: u64,
    pub tlb_hits: u64,
    pub page_table_hits: u64,
    pub page_faults: u64,
}

impl Statistics {
    pub(crate) fn record(&mut self, path: TranslationPath) {
        self.translations += 1;
        match path {
            TranslationPath::TlbHit => self.tlb_hits += 1,
            TranslationPath::PageTableHit => self.page_table_hits += 1,
            TranslationPath::PageFault => self.page_faults += 1,
        }
    }

    pub fn tlb_hit_rate(&self) -> f64 {
        Self::rate(self.tlb_hits, self.translations)
    }

    pub fn page_fault_rate(&self) -> f64 {
        Self::rate(self.page_faults, self.translations)
    }

    fn rate(count: u64, total: u64) -> f64 {
        if total == 0 {
            0.0
        } else {
            count as f64 / total as f64
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of page faults: {}", self.page_faults)?;
        writeln!(f, "Number of TLB hits: {}", self.tlb_hits)
    }
}

#[cfg(test)]
mod test {
    use super::Statistics;
    use crate::TranslationPath;

    #[test]
    fn test_record_and_rates() {
        let mut stats = Statistics::default();
        assert_eq!(stats.tlb_hit_rate(), 0.0);
        assert_eq!(stats.page_fault_rate(), 0.0);

        stats.record(TranslationPath::PageFault);
        stats.record(TranslationPath::TlbHit);
        stats.record(TranslationPath::TlbHit);
        stats.record(TranslationPath::PageTableHit);

        assert_eq!(
            stats,
            Statistics {
                translations: 4,
                tlb_hits: 2,
                page_table_hits: 1,
                page_faults: 1,
            }
        );
        assert_eq!(stats.tlb_hit_rate(), 0.5);
        assert_eq!(stats.page_fault_rate(), 0.25);
    }

    #[test]
    fn test_summary_lines() {
        let stats = Statistics {
            translations: 3,
            tlb_hits: 1,
            page_table_hits: 0,
            page_faults: 2,
        };
        assert_eq!(
            stats.to_string(),
            "Number of page faults: 2\nNumber of TLB hits: 1\n"
        );
    }
}
