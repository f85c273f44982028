//! Tree document rendering and display
//!
//! - `config` - Output configuration types
//! - `document` - Fenced document formatter (file or console)
//! - `json` - JSON output

mod config;
mod document;
mod json;

pub use config::{DEFAULT_OUTPUT_FILE, OutputConfig};
pub use document::{DocumentFormatter, FENCE};
pub use json::print_json;
