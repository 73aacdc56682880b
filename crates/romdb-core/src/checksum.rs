//! CRC-32 (IEEE polynomial) of a file's contents, used as the catalog key.
//!
//! Checksums are computed once per record during migration, so this reads
//! the file in chunks rather than loading ROMs wholesale.

use anyhow::{Context, Result};
use crc32fast::Hasher;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const BUF_SIZE: usize = 64 * 1024;

/// Compute CRC-32 of a file's full byte contents.
/// Reads in chunks to keep memory use bounded.
pub fn crc32_path(path: &Path) -> Result<u32> {
    let mut f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut hasher = Hasher::new();
    let mut buf = [0u8; BUF_SIZE];
    loop {
        let n = f
            .read(&mut buf)
            .with_context(|| format!("read {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hasher.finalize())
}

/// Key form stored in the catalog: lowercase hex, no prefix, no zero padding.
pub fn to_key(crc: u32) -> String {
    format!("{crc:x}")
}

/// Fixed-width display form for user-facing output.
pub fn to_display(crc: u32) -> String {
    format!("{crc:08x}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn crc32_path_empty_file() {
        let f = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(crc32_path(f.path()).unwrap(), 0);
    }

    #[test]
    fn crc32_path_known_content() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"123456789").unwrap();
        f.flush().unwrap();
        assert_eq!(crc32_path(f.path()).unwrap(), 0xcbf43926);
    }

    #[test]
    fn crc32_path_spans_chunks() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(&[0xab; 70_000]).unwrap();
        f.flush().unwrap();
        assert_eq!(crc32_path(f.path()).unwrap(), 0x8e23a8da);
    }

    #[test]
    fn crc32_path_missing_file() {
        assert!(crc32_path(Path::new("/nonexistent/file.ch8")).is_err());
    }

    #[test]
    fn key_form_is_unpadded() {
        assert_eq!(to_key(0xcbf43926), "cbf43926");
        assert_eq!(to_key(0xbeef), "beef");
        assert_eq!(to_key(0), "0");
    }

    #[test]
    fn display_form_is_padded() {
        assert_eq!(to_display(0xbeef), "0000beef");
    }
}
