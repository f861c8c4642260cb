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

use super::{get_test_engine, get_test_engine_with};
use crate::{
    modules::{backing_store::MemoryBackingStore, tlb::TlbModule},
    LogicalAddress, MmuConfig, MmuError, Statistics, TranslationEngine, TranslationPath,
    BACKING_STORE_SIZE, NUM_FRAMES, PAGE_SIZE, TLB_CAPACITY,
};

#[test]
fn test_fault_hit_fault() {
    let mut content = vec![0u8; BACKING_STORE_SIZE];
    content[0] = 65;
    content[256] = 66;
    let mut engine = get_test_engine_with(content, NUM_FRAMES);

    let first = engine.translate(LogicalAddress::new(0)).unwrap();
    assert_eq!(first.path, TranslationPath::PageFault);
    assert_eq!(first.frame, 0);
    assert_eq!(first.physical_address, 0);
    assert_eq!(first.value, 65);

    let second = engine.translate(LogicalAddress::new(0)).unwrap();
    assert_eq!(second.path, TranslationPath::TlbHit);
    assert_eq!(second.physical_address, first.physical_address);
    assert_eq!(second.value, 65);

    let third = engine.translate(LogicalAddress::new(256)).unwrap();
    assert_eq!(third.path, TranslationPath::PageFault);
    assert_eq!(third.frame, 1);
    assert_eq!(third.physical_address, 256);
    assert_eq!(third.value, 66);

    assert_eq!(engine.statistics().page_faults, 2);
    assert_eq!(engine.statistics().tlb_hits, 1);
    assert_eq!(
        engine.statistics().to_string(),
        "Number of page faults: 2\nNumber of TLB hits: 1\n"
    );
}

#[test]
fn test_output_line_format() {
    let mut content = vec![0u8; BACKING_STORE_SIZE];
    // page 66, offset 20 holds 0xF0 which is -16 as signed byte
    content[66 * PAGE_SIZE + 20] = 0xF0;
    let mut engine = get_test_engine_with(content, NUM_FRAMES);

    engine.translate(LogicalAddress::new(1)).unwrap();
    let translation = engine.translate(LogicalAddress::new(16916)).unwrap();

    assert_eq!(translation.page_number, 66);
    assert_eq!(translation.offset, 20);
    assert_eq!(translation.frame, 1);
    assert_eq!(
        translation.to_string(),
        "Logical address: 16916 ; Physical address: 276 ; Signed Byte Value: -16"
    );
}

#[test]
fn test_page_table_hit_updates_tlb() {
    let mut engine = get_test_engine(NUM_FRAMES);

    // fault in one more page than the TLB can hold, page 0 gets evicted from the TLB
    for page in 0..=TLB_CAPACITY as u8 {
        let translation = engine.translate(LogicalAddress::from_parts(page, 0)).unwrap();
        assert_eq!(translation.path, TranslationPath::PageFault);
    }
    assert!(!engine.tlb().contains(0));
    assert_eq!(engine.tlb().len(), TLB_CAPACITY);

    let stamp_before = engine.page_table().last_access(0).unwrap();

    let translation = engine.translate(LogicalAddress::from_parts(0, 5)).unwrap();
    assert_eq!(translation.path, TranslationPath::PageTableHit);
    assert_eq!(translation.frame, 0);
    assert!(engine.tlb().contains(0));
    assert!(engine.page_table().last_access(0).unwrap() > stamp_before);

    // page 1 was the least recently used entry and made room for page 0
    assert!(!engine.tlb().contains(1));

    let translation = engine.translate(LogicalAddress::from_parts(0, 6)).unwrap();
    assert_eq!(translation.path, TranslationPath::TlbHit);

    assert_eq!(
        *engine.statistics(),
        Statistics {
            translations: TLB_CAPACITY as u64 + 3,
            tlb_hits: 1,
            page_table_hits: 1,
            page_faults: TLB_CAPACITY as u64 + 1,
        }
    );
}

#[test]
fn test_failed_read_commits_nothing() {
    // the store ends in the middle of page 2
    let content = vec![7u8; 2 * PAGE_SIZE + 10];
    let mut engine = get_test_engine_with(content, NUM_FRAMES);

    engine.translate(LogicalAddress::from_parts(0, 0)).unwrap();
    let stats_before = *engine.statistics();
    let free_before = engine.free_frames();

    match engine.translate(LogicalAddress::from_parts(2, 0)) {
        Err(MmuError::BackingStoreRead { page, .. }) => assert_eq!(page, 2),
        other => panic!("expected a read error, got {:?}", other),
    }

    assert_eq!(engine.page_table().lookup(2), None);
    assert!(!engine.tlb().contains(2));
    assert_eq!(engine.free_frames(), free_before);
    assert_eq!(*engine.statistics(), stats_before);
    assert!(engine.physical_memory().frame(1).unwrap().iter().all(|b| *b == 0));

    // still usable for pages that exist
    let translation = engine.translate(LogicalAddress::from_parts(1, 3)).unwrap();
    assert_eq!(translation.frame, 1);
    assert_eq!(translation.value, 7);
}

#[test]
fn test_invalid_config_is_rejected() {
    let res = TranslationEngine::<MemoryBackingStore>::new(
        MemoryBackingStore::zeroed(),
        MmuConfig { frame_count: 0 },
    );
    assert!(matches!(res, Err(MmuError::InvalidConfig(_))));
}
