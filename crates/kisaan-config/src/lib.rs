//! # kisaan-config
//!
//! Layered configuration loading for the Kisaan client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`KISAAN_*` prefix, `__` as separator)
//! 2. Project-level `.kisaan/config.toml`
//! 3. User-level `~/.config/kisaan/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `KISAAN_API__BASE_URL` -> `api.base_url` and
//! `KISAAN_GENERAL__LANGUAGE` -> `general.language`.
//!
//! # Usage
//!
//! ```no_run
//! use kisaan_config::KisaanConfig;
//!
//! let config = KisaanConfig::load_with_dotenv().expect("config");
//! println!("API: {}", config.api.normalized_base_url());
//! ```

mod api;
mod error;
mod general;

pub use api::{ApiConfig, DEFAULT_BASE_URL};
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use kisaan_core::enums::Language;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct KisaanConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl KisaanConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction or validation fails. An unknown
    /// `general.language` is reported as [`ConfigError::InvalidValue`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let mut figment = figment.clone();
        // Accepts the same spellings as `--lang` (`urdu`, `EN`, ...).
        if let Ok(raw) = figment.extract_inner::<String>("general.language") {
            let language = raw.parse::<Language>().map_err(|err| ConfigError::InvalidValue {
                field: "general.language".to_string(),
                reason: err.to_string(),
            })?;
            figment = figment.merge(Serialized::default("general.language", language));
        }

        let config: Self = figment.extract()?;
        config.api.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".kisaan/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("KISAAN_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("kisaan").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = KisaanConfig::default();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.general.language, Language::Ur);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config = KisaanConfig::load().expect("should extract defaults");
            assert_eq!(config.general.home_alert_limit, 3);
            assert!(config.api.timeout_secs.is_none());
            Ok(())
        });
    }
}
