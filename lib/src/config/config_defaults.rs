// lib/src/config/config_defaults.rs

use std::path::PathBuf;

pub const DEFAULT_CLINIC_NAME: &str = "Ruhengeri Hospital";
pub const CONFIG_DIRECTORY_NAME: &str = "clinic";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub fn default_clinic_name() -> String {
    DEFAULT_CLINIC_NAME.to_string()
}

pub fn default_color() -> bool {
    true
}

pub fn default_show_banner() -> bool {
    true
}

/// `<config_root>/clinic/config.toml`
pub fn default_config_file(config_root: PathBuf) -> PathBuf {
    config_root.join(CONFIG_DIRECTORY_NAME).join(CONFIG_FILE_NAME)
}
