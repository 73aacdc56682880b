//! CLI for the romdb catalog migration tool.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use romdb_core::config;
use std::path::PathBuf;

use commands::{run_checksum, run_migrate, run_status};

/// Top-level CLI for the romdb catalog migration tool.
#[derive(Debug, Parser)]
#[command(name = "romdb")]
#[command(about = "romdb: re-key a CHIP-8 program catalog by CRC-32", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Compute missing checksums and write the checksum-keyed catalog.
    Migrate {
        /// Input catalog keyed by program name (defaults to config).
        #[arg(long)]
        database: Option<PathBuf>,

        /// Output catalog keyed by checksum (defaults to config).
        #[arg(long)]
        output: Option<PathBuf>,

        /// Directory holding one ROM per record (defaults to config).
        #[arg(long)]
        roms_dir: Option<PathBuf>,
    },

    /// Show which records still need a checksum and which ROMs are missing.
    Status {
        /// Input catalog keyed by program name (defaults to config).
        #[arg(long)]
        database: Option<PathBuf>,

        /// Directory holding one ROM per record (defaults to config).
        #[arg(long)]
        roms_dir: Option<PathBuf>,
    },

    /// Compute CRC-32 of a single file.
    Checksum {
        /// Path to the file.
        path: PathBuf,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Migrate {
                database,
                output,
                roms_dir,
            } => run_migrate(
                &database.unwrap_or(cfg.database_path),
                &output.unwrap_or(cfg.output_path),
                &roms_dir.unwrap_or(cfg.roms_dir),
                &cfg.rom_extension,
            )?,
            CliCommand::Status { database, roms_dir } => run_status(
                &database.unwrap_or(cfg.database_path),
                &roms_dir.unwrap_or(cfg.roms_dir),
                &cfg.rom_extension,
            )?,
            CliCommand::Checksum { path } => run_checksum(&path)?,
        }

        Ok(())
    }
}
