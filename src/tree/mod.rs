//! Directory tree walking logic
//!
//! `TreeWalker` lists each directory once, in platform order, and returns one
//! `DisplayLine` per surviving entry. Directories are followed immediately by
//! their own lines (pre-order).

mod config;
mod filter;
mod line;
mod utils;
mod walker;

// Re-export public types
pub use config::{DEFAULT_EXCLUDES, WalkerConfig};
pub use filter::ExclusionSet;
pub use line::{DisplayLine, EntryKind};
pub use utils::{LAST_BRANCH, MID_BRANCH, branch_symbol, child_prefix};
pub use walker::TreeWalker;
