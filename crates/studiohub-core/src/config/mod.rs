//! Application configuration schemas.
//!
//! Configuration is deserialized via the `config` crate from optional TOML
//! files and `STUDIOHUB__`-prefixed environment variables. Each sub-module
//! represents a logical configuration section.

pub mod logging;
pub mod tree;

use serde::{Deserialize, Serialize};
use validator::Validate;

pub use self::logging::LoggingConfig;
pub use self::tree::TreeConfig;

use crate::error::AppError;
use crate::result::AppResult;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// Asset tree engine settings.
    #[serde(default)]
    #[validate(nested)]
    pub tree: TreeConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files and the environment.
    ///
    /// Merges `config/default` with an environment-specific overlay
    /// `config/{env}` and environment variables such as
    /// `STUDIOHUB__TREE__MAX_DEPTH`. Every source is optional; missing
    /// values fall back to their defaults. The merged result is validated
    /// before it is returned.
    pub fn load(env: &str) -> AppResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("STUDIOHUB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let app: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        app.validate()?;
        Ok(app)
    }

    /// Parse configuration from a TOML string. Used by tests and embedders
    /// that keep configuration alongside the project document.
    pub fn from_toml_str(source: &str) -> AppResult<Self> {
        let app: Self = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        app.validate()?;
        Ok(app)
    }
}
