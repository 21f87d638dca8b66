//! # tur-config
//!
//! Layered configuration loading for the Turismo client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TURISMO_*` prefix, `__` as separator)
//! 2. Project-level `.turismo/config.toml`
//! 3. User-level `~/.config/turismo/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `TURISMO_API__BASE_URL` -> `api.base_url`,
//! `TURISMO_AUTH__EXPIRY_BUFFER_SECS` -> `auth.expiry_buffer_secs`, etc.
//!
//! ```no_run
//! use tur_config::TurismoConfig;
//!
//! let config = TurismoConfig::load_with_dotenv().expect("config");
//! if !config.api.is_configured() {
//!     eprintln!("TURISMO_API__BASE_URL is not set");
//! }
//! ```

mod api;
mod auth;
mod error;
mod general;

pub use api::ApiConfig;
pub use auth::AuthConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TurismoConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl TurismoConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is out of range.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".turismo/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("TURISMO_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("turismo").join("config.toml"))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.auth.expiry_buffer_secs < 0 {
            return Err(ConfigError::InvalidValue {
                field: "auth.expiry_buffer_secs".into(),
                reason: "must not be negative".into(),
            });
        }
        Ok(())
    }
}
