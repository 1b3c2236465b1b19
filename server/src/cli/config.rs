// server/src/cli/config.rs

use anyhow::{anyhow, Result};
use log::debug;
use std::path::PathBuf;

use lib::config::{default_config_file, load_clinic_config, ClinicConfig};

use crate::cli::commands::CliArgs;

/// Where the config is read from when `--config` / `CLINIC_CONFIG` is absent.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(default_config_file)
}

/// Loads the clinic configuration and applies command-line overrides.
///
/// An explicit path must exist; the default path may be missing, in which
/// case built-in defaults are used.
pub fn load_cli_config(args: &CliArgs) -> Result<ClinicConfig> {
    let mut config = match (&args.config, default_config_path()) {
        (Some(path), _) => load_clinic_config(path, true),
        (None, Some(path)) => load_clinic_config(&path, false),
        (None, None) => Ok(ClinicConfig::default()),
    }
    .map_err(|e| anyhow!("{}", e))?;

    apply_overrides(&mut config, args);
    debug!("Effective configuration: {:?}", config);
    Ok(config)
}

pub fn apply_overrides(config: &mut ClinicConfig, args: &CliArgs) {
    if let Some(order) = args.order {
        config.listing_order = order;
    }
    if let Some(format) = args.format {
        config.listing_format = format;
    }
    if args.no_color {
        config.color = false;
    }
    if args.no_banner {
        config.show_banner = false;
    }
}
