//! JSON output formatting

use std::io;

use crate::tree::DisplayLine;

/// Print display lines as a pretty-printed JSON array to stdout.
pub fn print_json(lines: &[DisplayLine]) -> io::Result<()> {
    let json = serde_json::to_string_pretty(lines).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
