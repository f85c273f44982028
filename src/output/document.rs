//! Fenced document output
//!
//! The document is the rendered tree wrapped in a pair of triple-backtick
//! lines. It is written in one call, replacing any existing file.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::DisplayLine;

use super::config::OutputConfig;

/// Fence line opening and closing the document.
pub const FENCE: &str = "```";

/// Formatter for the fenced tree document.
pub struct DocumentFormatter {
    config: OutputConfig,
}

impl DocumentFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Render the whole document. There is no newline after the closing fence.
    pub fn format(&self, lines: &[DisplayLine]) -> String {
        let body: Vec<String> = lines.iter().map(DisplayLine::render).collect();
        format!("{FENCE}\n{}\n{FENCE}", body.join("\n"))
    }

    /// Write the document to the configured output file, truncating it.
    pub fn save(&self, lines: &[DisplayLine]) -> io::Result<()> {
        fs::write(&self.config.output_file, self.format(lines))
    }

    /// Print the document to stdout, coloring directory names when enabled.
    pub fn print(&self, lines: &[DisplayLine]) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write_colored(&mut stdout, lines)
    }

    /// Write the document to a color-capable writer.
    pub fn write_colored<W: WriteColor>(&self, out: &mut W, lines: &[DisplayLine]) -> io::Result<()> {
        writeln!(out, "{FENCE}")?;
        for (idx, line) in lines.iter().enumerate() {
            if idx > 0 {
                writeln!(out)?;
            }
            write!(out, "{}", line.lead())?;
            if line.is_dir() {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
                write!(out, "{}", line.name)?;
                out.reset()?;
            } else {
                write!(out, "{}", line.name)?;
            }
        }
        writeln!(out)?;
        writeln!(out, "{FENCE}")?;
        Ok(())
    }

    pub fn output_file(&self) -> &Path {
        &self.config.output_file
    }
}
