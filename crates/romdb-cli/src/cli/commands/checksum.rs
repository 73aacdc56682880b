//! `romdb checksum` – CRC-32 of a single file.

use anyhow::Result;
use romdb_core::checksum;
use std::path::Path;

/// Compute and print the CRC-32 of the given file.
pub fn run_checksum(path: &Path) -> Result<()> {
    let crc = checksum::crc32_path(path)?;
    println!("{}  {}", checksum::to_display(crc), path.display());
    Ok(())
}
