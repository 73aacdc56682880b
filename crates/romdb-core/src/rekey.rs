//! The migration pass: fill in missing checksums, then re-key the catalog
//! by checksum.
//!
//! Both steps consume their input and produce a fresh catalog; nothing is
//! mutated in place and no output exists until the whole pass has succeeded.

use crate::catalog::{Catalog, Record};
use crate::checksum;
use crate::roms::RomStore;
use anyhow::Result;
use thiserror::Error;

/// Contract violation inside the pass: `rekey` only accepts catalogs in
/// which every record carries a checksum (i.e. after `fill_checksums`).
#[derive(Debug, Error)]
pub enum RekeyError {
    #[error("record {name:?} has no crc32 checksum")]
    MissingChecksum { name: String },
}

/// Compute checksums for records that lack one, reporting each newly
/// computed value through `progress`. Records that already carry a checksum
/// pass through untouched, with no file access.
///
/// A record without a checksum whose ROM is missing or unreadable aborts
/// the pass.
pub fn fill_checksums(
    catalog: Catalog,
    store: &RomStore,
    mut progress: impl FnMut(&str, u32),
) -> Result<Catalog> {
    catalog
        .into_iter()
        .map(|(name, record)| {
            let record = if record.crc32.is_none() {
                let crc = store.crc32(&name)?;
                tracing::debug!(name = %name, crc32 = %checksum::to_key(crc), "computed checksum");
                progress(&name, crc);
                Record {
                    crc32: Some(checksum::to_key(crc)),
                    ..record
                }
            } else {
                record
            };
            Ok((name, record))
        })
        .collect()
}

/// Re-key by checksum. Each input record is split into its checksum (the
/// new key) and the remaining fields (the new record); no output record
/// carries a `crc32` field.
///
/// Two names sharing a checksum collapse to one entry, later insertion
/// wins. The overwrite is logged, not rejected.
pub fn rekey(catalog: Catalog) -> Result<Catalog, RekeyError> {
    let mut rekeyed = Catalog::new();
    for (name, record) in catalog {
        let Record { crc32, fields } = record;
        let key = crc32.ok_or_else(|| RekeyError::MissingChecksum { name: name.clone() })?;
        let replaced = rekeyed.insert(key.clone(), Record { crc32: None, fields });
        if replaced.is_some() {
            tracing::warn!(crc32 = %key, name = %name, "duplicate checksum, earlier record dropped");
        }
    }
    Ok(rekeyed)
}
