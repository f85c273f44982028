//! Exclusion filtering for tree walking
//!
//! Two separate checks share one set of strings. Listing drops entries whose
//! name equals a member. Recursion skips any directory whose full path
//! contains a member anywhere, including components above the start path.

use std::path::Path;

/// Ordered set of excluded names and path fragments.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet(Vec<String>);

impl ExclusionSet {
    pub fn new(members: Vec<String>) -> Self {
        Self(members)
    }

    pub fn members(&self) -> &[String] {
        &self.0
    }

    /// Check if an entry name exactly equals a member.
    pub fn excludes_name(&self, name: &str) -> bool {
        self.0.iter().any(|member| member == name)
    }

    /// Check if the full path string contains any member as a substring.
    pub fn excludes_path(&self, path: &Path) -> bool {
        let path = path.to_string_lossy();
        self.0.iter().any(|member| path.contains(member.as_str()))
    }
}
