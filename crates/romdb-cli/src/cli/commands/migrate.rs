//! `romdb migrate` – the full re-key pass.

use anyhow::Result;
use romdb_core::roms::RomStore;
use romdb_core::{catalog, rekey};
use std::path::Path;

/// Load the name-keyed catalog, compute missing checksums, re-key by
/// checksum, and write the new catalog. Any failure aborts before the
/// output file is touched.
pub fn run_migrate(
    database: &Path,
    output: &Path,
    roms_dir: &Path,
    rom_extension: &str,
) -> Result<()> {
    let store = RomStore::new(roms_dir, rom_extension);
    let input = catalog::load(database)?;
    let total = input.len();
    tracing::info!(records = total, "loaded {}", database.display());

    let filled = rekey::fill_checksums(input, &store, |name, crc| {
        println!("{name} : {crc:#x}");
    })?;
    let rekeyed = rekey::rekey(filled)?;

    let dropped = total - rekeyed.len();
    if dropped > 0 {
        tracing::warn!(dropped, "checksum collisions dropped records");
    }

    catalog::save(output, &rekeyed)?;
    println!("wrote {} records to {}", rekeyed.len(), output.display());
    Ok(())
}
