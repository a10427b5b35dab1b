//! CLI for devsum.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use devsum_core::checksum::ChecksumLayout;
use devsum_core::compare::FilePair;
use devsum_core::config::{self, DevsumConfig};
use devsum_core::exec::AdbTarget;
use std::path::PathBuf;

use commands::{run_changed, run_device, run_host};

/// Top-level CLI for devsum.
#[derive(Debug, Parser)]
#[command(name = "devsum")]
#[command(about = "devsum: compare file checksums between the build host and a device", long_about = None)]
pub struct Cli {
    /// Build output directory holding md5sum_bin_host and md5sum_dist (overrides config and DEVSUM_OUT_DIR).
    #[arg(long, global = true, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print checksums of host files.
    Host {
        /// Host paths to checksum.
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Print checksums of files on the device, deploying the checksum binary if needed.
    Device {
        /// Device paths to checksum.
        #[arg(required = true)]
        paths: Vec<String>,

        /// Device serial (overrides the [adb] section of config.toml).
        #[arg(long, short = 's')]
        serial: Option<String>,
    },

    /// List HOST:DEVICE pairs whose device copy is missing or out of date.
    Changed {
        /// Pairs in HOST:DEVICE form.
        #[arg(required = true, value_name = "HOST:DEVICE")]
        pairs: Vec<FilePair>,

        /// Device serial (overrides the [adb] section of config.toml).
        #[arg(long, short = 's')]
        serial: Option<String>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        if let Some(out_dir) = cli.out_dir {
            cfg.out_dir = Some(out_dir);
        }
        tracing::debug!("loaded config: {:?}", cfg);
        let layout = ChecksumLayout::from_config(&cfg);

        match cli.command {
            CliCommand::Host { paths } => run_host(&layout, paths)?,
            CliCommand::Device { paths, serial } => {
                run_device(&layout, &adb_target(&cfg, serial), paths)?
            }
            CliCommand::Changed { pairs, serial } => {
                run_changed(&layout, &adb_target(&cfg, serial), &pairs)?
            }
        }

        Ok(())
    }
}

fn adb_target(cfg: &DevsumConfig, serial: Option<String>) -> AdbTarget {
    let mut adb = cfg.adb.clone();
    if serial.is_some() {
        adb.serial = serial;
    }
    AdbTarget::from_config(&adb)
}

#[cfg(test)]
mod tests;
