//! Presentation layer for churn-predict
//!
//! This crate contains CLI definitions, output formatters,
//! and the terminal display surface.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::{ConsoleFormatter, ConsoleSurface};
