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

use std::{
    fs::File,
    io::{self, Read, Seek, SeekFrom},
    path::{Path, PathBuf},
};

use log::warn;

use super::BackingStoreModule;
use crate::{MmuError, BACKING_STORE_SIZE};

/// Backing store that reads pages from a flat binary file
pub struct FileBackingStore {
    /// underlying file, opened read only
    file: File,

    /// path of file, kept for diagnostics
    file_path: PathBuf,

    /// cached file size, so no `metadata` call necessary
    file_size: usize,
}

impl FileBackingStore {
    /// Opens the backing store file at `path` for reading
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, MmuError> {
        let file_path = path.as_ref().to_path_buf();
        let open_err = |source| MmuError::BackingStoreOpen {
            path: file_path.clone(),
            source,
        };

        let file = File::open(&file_path).map_err(open_err)?;
        let file_size = file.metadata().map_err(open_err)?.len() as usize;

        if file_size != BACKING_STORE_SIZE {
            warn!(
                "Backing store {} has {} bytes, expected {}",
                file_path.display(),
                file_size,
                BACKING_STORE_SIZE
            );
        }

        Ok(Self {
            file,
            file_path,
            file_size,
        })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl BackingStoreModule for FileBackingStore {
    fn read(&mut self, offset: usize, dest: &mut [u8]) -> io::Result<()> {
        self.file.seek(SeekFrom::Start(offset as u64))?;
        self.file.read_exact(dest)
    }

    fn get_max_size(&self) -> usize {
        self.file_size
    }
}

#[cfg(test)]
mod test {
    use std::{fs, io::ErrorKind, path::PathBuf};

    use super::FileBackingStore;
    use crate::modules::backing_store::test::{
        gen_store_content, test_backing_store_pages, test_backing_store_short_read,
    };
    use crate::{MmuError, PAGE_SIZE};

    fn write_test_file(test_name: &str, content: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}.tmp", test_name));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_file_backing_store_pages() {
        let path = write_test_file("test_file_backing_store_pages", &gen_store_content());

        let store = FileBackingStore::open(&path).unwrap();
        assert_eq!(store.path(), path.as_path());
        test_backing_store_pages(store);

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_file_backing_store_short_read() {
        let mut content = gen_store_content();
        content.truncate(3 * PAGE_SIZE + 1);
        let path = write_test_file("test_file_backing_store_short_read", &content);

        test_backing_store_short_read(FileBackingStore::open(&path).unwrap(), 3);

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_file_backing_store_missing_file() {
        let path = std::env::temp_dir().join("test_file_backing_store_missing_file.does_not_exist");
        let _ = fs::remove_file(&path);

        match FileBackingStore::open(&path) {
            Err(MmuError::BackingStoreOpen { path: err_path, source }) => {
                assert_eq!(err_path, path);
                assert_eq!(source.kind(), ErrorKind::NotFound);
            }
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("opening a missing file should fail"),
        }
    }
}
