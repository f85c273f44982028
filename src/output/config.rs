//! Output configuration types

use std::path::PathBuf;

/// Default name of the generated document.
pub const DEFAULT_OUTPUT_FILE: &str = "Navigation.md";

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Where the fenced document is written.
    pub output_file: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: false,
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}
