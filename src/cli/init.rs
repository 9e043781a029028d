//! Init command implementation.
//!
//! Writes a `recolour.yaml` with the default strengths.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::{Config, CONFIG_FILENAME};
use crate::error::{RecolourError, Result};
use crate::output::{display_path, Printer};

/// Write a default recolour.yaml
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write into (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing recolour.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let config_path = args.path.join(CONFIG_FILENAME);

    if config_path.exists() && !args.force {
        return Err(RecolourError::Precondition {
            message: format!("{} already exists", CONFIG_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let mut yaml = String::new();
    yaml.push_str("# How random each channel is, from 0 (unchanged) to 10\n");
    yaml.push_str(&Config::default().to_yaml()?);
    yaml.push_str("\n# Uncomment for reproducible results\n");
    yaml.push_str("# seed: 42\n");

    fs::write(&config_path, &yaml).map_err(|e| RecolourError::Io {
        path: config_path.clone(),
        message: format!("Failed to write config: {}", e),
    })?;

    printer.status("Created", &display_path(&config_path));

    Ok(())
}
