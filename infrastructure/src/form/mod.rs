//! Form file loading

pub mod loader;

pub use loader::{FormFormat, FormLoadError, FormLoader};
