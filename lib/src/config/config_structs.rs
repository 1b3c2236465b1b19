// lib/src/config/config_structs.rs

use serde::{Deserialize, Serialize};

use crate::config::config_defaults::*;
use crate::listing::ListingFormat;
use crate::storage_engine::ListingOrder;

/// Settings read from `config.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClinicConfig {
    /// Shown in the banner and the farewell message.
    pub clinic_name: String,
    pub listing_order: ListingOrder,
    pub listing_format: ListingFormat,
    pub color: bool,
    pub show_banner: bool,
}

impl Default for ClinicConfig {
    fn default() -> Self {
        ClinicConfig {
            clinic_name: default_clinic_name(),
            listing_order: ListingOrder::default(),
            listing_format: ListingFormat::default(),
            color: default_color(),
            show_banner: default_show_banner(),
        }
    }
}
