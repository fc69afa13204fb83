//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for prediction results
///
/// This is a domain concept representing how the output should be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Coloured message framed by a coloured border (default)
    Text,
    /// JSON record of the final state
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Text
    }
}
