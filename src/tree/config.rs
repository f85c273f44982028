//! Configuration types for tree walkers

/// Names excluded when the caller supplies none.
pub const DEFAULT_EXCLUDES: &[&str] = &["desktop.ini", "node_modules", ".git", "dist"];

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Entry names and path fragments to leave out of the tree.
    pub exclude: Vec<String>,
}

impl WalkerConfig {
    /// Build a config from an optional exclusion list, falling back to
    /// [`DEFAULT_EXCLUDES`] when none is given.
    pub fn with_excludes(exclude: Option<&[String]>) -> Self {
        match exclude {
            Some(names) => Self {
                exclude: names.to_vec(),
            },
            None => Self::default(),
        }
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            exclude: DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect(),
        }
    }
}
