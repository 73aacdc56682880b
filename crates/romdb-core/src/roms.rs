//! ROM file lookup: one binary per record, `<name>.<ext>` under a fixed dir.

use crate::checksum;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Locates the ROM binaries that back catalog records.
#[derive(Debug, Clone)]
pub struct RomStore {
    dir: PathBuf,
    extension: String,
}

impl RomStore {
    pub fn new(dir: &Path, extension: &str) -> Self {
        Self {
            dir: dir.to_path_buf(),
            extension: extension.to_string(),
        }
    }

    /// Path of the ROM backing `name`.
    pub fn rom_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", name, self.extension))
    }

    pub fn exists(&self, name: &str) -> bool {
        self.rom_path(name).is_file()
    }

    /// CRC-32 of the ROM backing `name`. A missing or unreadable ROM is an
    /// error; the caller decides whether that aborts the run.
    pub fn crc32(&self, name: &str) -> Result<u32> {
        checksum::crc32_path(&self.rom_path(name))
            .with_context(|| format!("checksum rom for {name:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rom_path_appends_extension() {
        let store = RomStore::new(Path::new("roms"), "ch8");
        assert_eq!(store.rom_path("PONG"), PathBuf::from("roms/PONG.ch8"));
    }

    #[test]
    fn missing_rom_does_not_exist() {
        let store = RomStore::new(Path::new("/nonexistent"), "ch8");
        assert!(!store.exists("PONG"));
        assert!(store.crc32("PONG").is_err());
    }
}
