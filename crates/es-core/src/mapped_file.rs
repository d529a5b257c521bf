use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use memmap2::Mmap;

/// A memory-mapped input file providing zero-copy byte slices.
///
/// The recorded length comes from file metadata at open time. Empty
/// files are not mapped at all, since mapping zero bytes fails on most
/// platforms; they still open successfully and yield empty slices.
pub struct MappedFile {
    mmap: Option<Mmap>,
    len: u64,
}

impl MappedFile {
    /// Open and memory-map a file for scanning.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open {}", path.display()))?;

        let metadata = file
            .metadata()
            .with_context(|| format!("failed to read metadata for {}", path.display()))?;

        let len = metadata.len();

        let mmap = if len == 0 {
            None
        } else {
            // SAFETY: the mapping lives as long as this struct and the
            // file must not be truncated externally while mapped.
            let mmap = unsafe { Mmap::map(&file) }
                .with_context(|| format!("failed to mmap {}", path.display()))?;
            Some(mmap)
        };

        Ok(Self { mmap, len })
    }

    /// Total file size in bytes, as recorded at open time.
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Returns true if the file is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get a byte slice starting at `offset` with at most `len` bytes.
    ///
    /// The slice is clamped to the file end, so a request past EOF comes
    /// back shorter than asked or empty. It is also clamped to the live
    /// mapping: if the file shrank between stat and map, callers see the
    /// shortfall instead of a panic.
    pub fn slice_at(&self, offset: u64, len: u64) -> &[u8] {
        let mapped: &[u8] = match &self.mmap {
            Some(m) => m,
            None => return &[],
        };

        let start = offset.min(self.len) as usize;
        let end = offset.saturating_add(len).min(self.len) as usize;

        let start = start.min(mapped.len());
        let end = end.min(mapped.len());

        &mapped[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_fixture(data: &[u8]) -> NamedTempFile {
        let mut f = NamedTempFile::new().expect("failed to create temp file");
        f.write_all(data).expect("failed to write fixture");
        f.flush().expect("failed to flush");
        f
    }

    #[test]
    fn open_and_read_small_file() {
        let data = b"Hello, entroscope!";
        let f = create_fixture(data);

        let mf = MappedFile::open(f.path()).unwrap();
        assert_eq!(mf.len(), data.len() as u64);
        assert_eq!(mf.slice_at(0, data.len() as u64), data);
    }

    #[test]
    fn slice_at_offset() {
        let data = b"ABCDEFGHIJKLMNOP";
        let f = create_fixture(data);
        let mf = MappedFile::open(f.path()).unwrap();

        assert_eq!(mf.slice_at(4, 4), b"EFGH");
    }

    #[test]
    fn slice_past_eof_is_truncated() {
        let data = b"short";
        let f = create_fixture(data);
        let mf = MappedFile::open(f.path()).unwrap();

        assert_eq!(mf.slice_at(3, 100), b"rt");
    }

    #[test]
    fn slice_completely_out_of_bounds() {
        let data = b"data";
        let f = create_fixture(data);
        let mf = MappedFile::open(f.path()).unwrap();

        assert!(mf.slice_at(100, 10).is_empty());
    }

    #[test]
    fn empty_file_opens_without_mapping() {
        let f = create_fixture(b"");
        let mf = MappedFile::open(f.path()).unwrap();

        assert_eq!(mf.len(), 0);
        assert!(mf.is_empty());
        assert!(mf.slice_at(0, 1024).is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = match MappedFile::open(Path::new("/no/such/entroscope-input")) {
            Ok(_) => panic!("open must fail for a missing path"),
            Err(err) => err,
        };
        assert!(format!("{err:#}").contains("failed to open"));
    }

    #[test]
    fn block_sized_slices_tile_the_file() {
        // 2500 bytes at block size 1024: two full slices and a 452-byte tail.
        let data: Vec<u8> = (0..2500u32).map(|i| (i % 256) as u8).collect();
        let f = create_fixture(&data);
        let mf = MappedFile::open(f.path()).unwrap();

        assert_eq!(mf.slice_at(0, 1024), &data[0..1024]);
        assert_eq!(mf.slice_at(1024, 1024), &data[1024..2048]);
        assert_eq!(mf.slice_at(2048, 1024), &data[2048..2500]);
        assert_eq!(mf.slice_at(2048, 1024).len(), 452);
    }
}
