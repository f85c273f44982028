//! Shared utility functions for tree walking

use std::path::Path;

/// Glyph drawn before the last child of a directory.
pub const LAST_BRANCH: &str = "└─";
/// Glyph drawn before every other child.
pub const MID_BRANCH: &str = "├─";

/// Pick the branch glyph for a child.
pub fn branch_symbol(is_last: bool) -> &'static str {
    if is_last { LAST_BRANCH } else { MID_BRANCH }
}

/// Calculate the prefix for a child's own children.
pub fn child_prefix(current_prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}    ", current_prefix)
    } else {
        format!("{}│   ", current_prefix)
    }
}

/// Get the name of a path, defaulting to "." for root.
pub fn get_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| ".".to_string())
}
