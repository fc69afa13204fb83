//! Form file loader
//!
//! A form file is a flat JSON object or TOML table keyed by form field id:
//!
//! ```toml
//! senior-citizen = "No"
//! tenure = 5
//! monthly-charges = 70.5
//! internet-service = "Fiber optic"
//! ```
//!
//! The format is chosen by extension (`.json` or `.toml`); anything else is
//! tried as JSON first, then TOML.

use churn_domain::FormSnapshot;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum FormLoadError {
    #[error("Could not read form file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse form file {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Syntax of a form file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFormat {
    Json,
    Toml,
}

impl FormFormat {
    /// Format implied by a path's extension, if any
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Some(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Reads form snapshots from disk
pub struct FormLoader;

impl FormLoader {
    pub fn load(path: &Path) -> Result<FormSnapshot, FormLoadError> {
        let content = fs::read_to_string(path).map_err(|source| FormLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded form file {} ({} bytes)", path.display(), content.len());

        Self::parse(&content, FormFormat::from_path(path)).map_err(|message| {
            FormLoadError::Parse {
                path: path.to_path_buf(),
                message,
            }
        })
    }

    /// Parse form content; with no format given, JSON then TOML is tried
    pub fn parse(content: &str, format: Option<FormFormat>) -> Result<FormSnapshot, String> {
        match format {
            Some(FormFormat::Json) => serde_json::from_str(content).map_err(|e| e.to_string()),
            Some(FormFormat::Toml) => toml::from_str(content).map_err(|e| e.to_string()),
            None => serde_json::from_str(content).or_else(|json_err| {
                toml::from_str(content).map_err(|toml_err| {
                    format!("not JSON ({}) nor TOML ({})", json_err, toml_err)
                })
            }),
        }
    }
}
