//! Configuration file loading for churn-predict
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./churn.toml` or `./.churn.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/churn-predict/config.toml`
//! 4. Fallback: `~/.config/churn-predict/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_ENDPOINT, FileConfig, FileEncodingConfig, FileEndpointConfig,
    FileOutputConfig, FileOutputFormat, FileRiskConfig,
};
pub use loader::ConfigLoader;
