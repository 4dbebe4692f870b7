// src/main.rs
// docscan - report classes and functions in a Python source tree

use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use docscan::Scanner;

#[derive(Parser)]
#[command(name = "docscan")]
#[command(about = "Extract class and function documentation from a Python source tree")]
#[command(version)]
struct Cli {
    /// Root directory to scan
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging goes to stderr; stdout carries only the report.
    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Scanner::new(cli.root).run()
}
