use serde::{Deserialize, Serialize};

use crate::types::OutputFormat;

/// Conversion options shared by the CLI and embedding applications
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertParams {
    pub format: OutputFormat,
    /// Keep converting the remaining inputs after one fails
    pub continue_on_error: bool,
}

impl Default for ConvertParams {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            continue_on_error: false,
        }
    }
}
