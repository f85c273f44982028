//! Display line types produced by tree walking

use serde::Serialize;

/// Kind of a listed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Dir,
    File,
}

/// One rendered entry of the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayLine {
    pub name: String,
    pub kind: EntryKind,
    pub icon: &'static str,
    /// Nesting level, 0 for children of the start directory.
    pub depth: usize,
    pub is_last: bool,
    /// Continuation prefix inherited from ancestors.
    pub prefix: String,
}

impl DisplayLine {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    /// Branch glyph for this entry's position among its siblings.
    pub fn symbol(&self) -> &'static str {
        super::utils::branch_symbol(self.is_last)
    }

    /// Everything before the name: prefix, branch glyph and icon.
    pub fn lead(&self) -> String {
        format!("{}{} {} ", self.prefix, self.symbol(), self.icon)
    }

    /// Full plain-text line.
    pub fn render(&self) -> String {
        format!("{}{}", self.lead(), self.name)
    }
}
