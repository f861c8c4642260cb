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

use crate::{
    modules::backing_store::{test::gen_store_content, MemoryBackingStore},
    MmuConfig, TranslationEngine,
};

mod scenarios;

pub(crate) fn get_test_engine(frame_count: usize) -> TranslationEngine<MemoryBackingStore> {
    get_test_engine_with(gen_store_content(), frame_count)
}

pub(crate) fn get_test_engine_with(
    content: Vec<u8>,
    frame_count: usize,
) -> TranslationEngine<MemoryBackingStore> {
    let _ = env_logger::builder().is_test(true).try_init();

    TranslationEngine::new(MemoryBackingStore::new(content), MmuConfig { frame_count }).unwrap()
}
