//! CLI entry point for treemark

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use treemark::{DocumentFormatter, OutputConfig, TreeWalker, WalkerConfig, print_json};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "treemark")]
#[command(about = "Save a directory tree with file icons as a Markdown code block")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Exclude entries named NAME, and directories whose path contains NAME
    /// (can be used multiple times; replaces the default list)
    #[arg(short = 'e', long = "exclude", value_name = "NAME")]
    exclude: Vec<String>,

    /// File to write the tree to
    #[arg(short = 'o', long = "output", default_value = treemark::DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Print the fenced tree to stdout instead of writing a file
    #[arg(long = "print", conflicts_with = "json")]
    print: bool,

    /// Print the entries as JSON to stdout instead of writing a file
    #[arg(long = "json")]
    json: bool,

    /// Control color output for --print: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = Args::parse();

    let walker_config = if args.exclude.is_empty() {
        WalkerConfig::default()
    } else {
        WalkerConfig::with_excludes(Some(args.exclude.as_slice()))
    };

    let root = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.path)
    };

    let walker = TreeWalker::new(walker_config);
    let lines = match walker.walk_root(&root) {
        Ok(lines) => lines,
        Err(e) => {
            eprintln!("treemark: cannot read '{}': {}", args.path.display(), e);
            process::exit(1);
        }
    };

    let formatter = DocumentFormatter::new(OutputConfig {
        use_color: args.print && should_use_color(args.color),
        output_file: args.output.clone(),
    });

    let result = if args.json {
        print_json(&lines)
    } else if args.print {
        formatter.print(&lines)
    } else {
        formatter.save(&lines).map(|()| {
            println!(
                "Folder structure has been saved to {}",
                formatter.output_file().display()
            );
        })
    };

    if let Err(e) = result {
        eprintln!("treemark: error writing output: {}", e);
        process::exit(1);
    }
}
