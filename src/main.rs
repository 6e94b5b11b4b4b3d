//! tagdown - Command-Line Entry Point
//!
//! Converts a Markdown file to HTML with the tag substitutions from the
//! user's configuration, writing the result to a file or stdout.

use clap::Parser;
use log::info;
use std::path::PathBuf;

use tagdown::config::load_config_or_defaults;
use tagdown::{EditorSession, Result};

/// Convert Markdown to HTML with user-configurable tag substitutions.
#[derive(Debug, Parser)]
#[command(name = "tagdown", version, about)]
struct Cli {
    /// Markdown file to convert
    input: PathBuf,

    /// Write HTML to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file (default: the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // An explicit --config surfaces load errors; the default location falls
    // back to built-in defaults with a logged warning, creating the file
    // populated with defaults on first run.
    let mut session = match cli.config {
        Some(path) => EditorSession::with_config_path(path)?,
        None => EditorSession::new(load_config_or_defaults()),
    };

    session.open_markdown(&cli.input)?;

    match cli.output {
        Some(path) => {
            session.save_html(&path)?;
            info!("Wrote {}", path.display());
        }
        None => {
            println!("{}", session.preview());
        }
    }

    Ok(())
}
