// lib/src/config/mod.rs

pub mod config_defaults;
pub mod config_structs;

use std::path::Path;

use log::{debug, info};

use models::errors::{ClinicError, ClinicResult};

pub use config_defaults::{default_config_file, DEFAULT_CLINIC_NAME};
pub use config_structs::ClinicConfig;

impl ClinicConfig {
    pub fn from_toml_str(content: &str) -> ClinicResult<Self> {
        toml::from_str(content).map_err(|e| ClinicError::ConfigurationError(e.to_string()))
    }
}

/// Loads the configuration at `path`.
///
/// With `required == false` a missing file yields the defaults; any other
/// read or parse failure is a `ConfigurationError`.
pub fn load_clinic_config(path: &Path, required: bool) -> ClinicResult<ClinicConfig> {
    if !path.exists() {
        if required {
            return Err(ClinicError::ConfigurationError(format!(
                "Config file {} does not exist",
                path.display()
            )));
        }
        debug!("No config file at {}, using defaults", path.display());
        return Ok(ClinicConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ClinicError::ConfigurationError(format!("Failed to read config file {}: {}", path.display(), e))
    })?;
    let config: ClinicConfig = toml::from_str(&content).map_err(|e| {
        ClinicError::ConfigurationError(format!("Failed to parse config file {}: {}", path.display(), e))
    })?;
    info!("Loaded config from {}", path.display());
    Ok(config)
}
