//! TreeWalker - depth-first, unsorted directory traversal

use std::fs;
use std::io;
use std::path::Path;

use crate::icons::{FOLDER_ICON, classify};

use super::config::WalkerConfig;
use super::filter::ExclusionSet;
use super::line::{DisplayLine, EntryKind};
use super::utils::{child_prefix, get_name};

/// Tree walker that collects display lines in listing order.
///
/// Entries are never sorted: they appear in whatever order the platform's
/// directory listing yields them. Any I/O error aborts the walk.
pub struct TreeWalker {
    exclude: ExclusionSet,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self {
            exclude: ExclusionSet::new(config.exclude),
        }
    }

    /// Walk from the start directory.
    pub fn walk_root(&self, root: &Path) -> io::Result<Vec<DisplayLine>> {
        self.walk(root, 0, "")
    }

    /// Produce the lines for `dir`'s children and, recursively, theirs.
    pub fn walk(&self, dir: &Path, depth: usize, prefix: &str) -> io::Result<Vec<DisplayLine>> {
        if self.exclude.excludes_path(dir) {
            return Ok(Vec::new());
        }

        let entries = self.read_and_filter_entries(dir)?;
        let total = entries.len();
        let mut lines = Vec::new();

        for (idx, entry) in entries.into_iter().enumerate() {
            let is_last = idx + 1 == total;
            let path = entry.path();
            let name = get_name(&path);

            if path.is_dir() {
                lines.push(DisplayLine {
                    name,
                    kind: EntryKind::Dir,
                    icon: FOLDER_ICON,
                    depth,
                    is_last,
                    prefix: prefix.to_string(),
                });
                let nested = child_prefix(prefix, is_last);
                lines.extend(self.walk(&path, depth + 1, &nested)?);
            } else {
                lines.push(DisplayLine {
                    icon: classify(&name),
                    name,
                    kind: EntryKind::File,
                    depth,
                    is_last,
                    prefix: prefix.to_string(),
                });
            }
        }

        Ok(lines)
    }

    /// Read directory entries, dropping names in the exclusion set.
    fn read_and_filter_entries(&self, dir: &Path) -> io::Result<Vec<fs::DirEntry>> {
        let mut kept = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if !self.exclude.excludes_name(&entry.file_name().to_string_lossy()) {
                kept.push(entry);
            }
        }
        Ok(kept)
    }
}
