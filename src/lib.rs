//! treemark - render a directory tree with file icons into a Markdown code block

pub mod icons;
pub mod output;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

use std::io;
use std::path::{Path, PathBuf};

pub use icons::classify;
pub use output::{DEFAULT_OUTPUT_FILE, DocumentFormatter, OutputConfig, print_json};
pub use tree::{DisplayLine, EntryKind, ExclusionSet, TreeWalker, WalkerConfig};

/// Walk `start_path` and write the fenced tree document.
///
/// `exclude` replaces the default exclusions when given; `output_file`
/// defaults to `Navigation.md` in the working directory. The file is only
/// written after the whole tree has been read, so a failed walk leaves no
/// document behind. Returns the path that was written.
pub fn save_tree_structure(
    start_path: &Path,
    exclude: Option<&[String]>,
    output_file: Option<&Path>,
) -> io::Result<PathBuf> {
    let walker = TreeWalker::new(WalkerConfig::with_excludes(exclude));
    let lines = walker.walk_root(start_path)?;

    let output_file = output_file
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE));
    let formatter = DocumentFormatter::new(OutputConfig {
        use_color: false,
        output_file: output_file.clone(),
    });
    formatter.save(&lines)?;
    Ok(output_file)
}
