use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/romdb/config.toml`.
///
/// Defaults reproduce the tool's canonical relative paths, so a bare
/// `romdb migrate` run in the catalog directory needs no configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RomdbConfig {
    /// Input catalog keyed by program name.
    pub database_path: PathBuf,
    /// Output catalog keyed by checksum.
    pub output_path: PathBuf,
    /// Directory holding one ROM binary per record.
    pub roms_dir: PathBuf,
    /// ROM filename extension, without the dot.
    pub rom_extension: String,
}

impl Default for RomdbConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("programs.json"),
            output_path: PathBuf::from("programs_new.json"),
            roms_dir: PathBuf::from("roms"),
            rom_extension: "ch8".to_string(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("romdb")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RomdbConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RomdbConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: RomdbConfig = toml::from_str(&data)?;
    Ok(cfg)
}
