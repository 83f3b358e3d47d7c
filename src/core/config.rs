//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Listen address and bundle paths come from cargo-leptos (`LEPTOS_*`).

use crate::core::settings::SiteSettings;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Page variant served when the URL does not ask for one
    /// Example: pinky-direct
    pub default_variant: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            default_variant: std::env::var("LANDING_VARIANT")
                .ok()
                .filter(|v| !v.trim().is_empty()),
        }
    }

    /// Check if a default variant is configured
    pub fn has_default_variant(&self) -> bool {
        self.default_variant.is_some()
    }

    /// Settings handed to every render
    pub fn site_settings(&self) -> SiteSettings {
        match &self.default_variant {
            Some(key) => SiteSettings {
                default_variant: key.trim().to_string(),
            },
            None => SiteSettings::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
