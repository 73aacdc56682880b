//! `romdb status` – preview the input catalog before migrating.

use anyhow::Result;
use romdb_core::catalog;
use romdb_core::roms::RomStore;
use std::path::Path;

/// Report per record whether a checksum is already stored and whether the
/// backing ROM exists. This never fails on missing ROMs; it is the report
/// an administrator runs before `migrate`.
pub fn run_status(database: &Path, roms_dir: &Path, rom_extension: &str) -> Result<()> {
    let store = RomStore::new(roms_dir, rom_extension);
    let input = catalog::load(database)?;

    if input.is_empty() {
        println!("Catalog {} is empty.", database.display());
        return Ok(());
    }

    let mut need_checksum = 0usize;
    let mut need_rom = 0usize;
    println!("{:<24} {:<10} {}", "NAME", "CRC32", "ROM");
    for (name, record) in &input {
        let crc = record.crc32.as_deref().unwrap_or("-");
        let present = store.exists(name);
        if record.crc32.is_none() {
            need_checksum += 1;
            if !present {
                need_rom += 1;
            }
        }
        println!(
            "{:<24} {:<10} {}",
            name,
            crc,
            if present { "present" } else { "missing" }
        );
    }
    println!(
        "{} records, {} need a checksum, {} of those have no rom file",
        input.len(),
        need_checksum,
        need_rom
    );
    Ok(())
}
