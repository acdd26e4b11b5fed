//! CLI application that saves job postings from the clipboard.

mod clipboard;
mod commands;
mod env;

use std::path::PathBuf;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{config, save};

/// Save the job posting on your clipboard to a named, timestamped file
#[derive(Parser)]
#[command(name = "jobclip")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Load settings from this env file instead of searching for .env
    #[arg(long, value_name = "PATH")]
    env_file: Option<PathBuf>,

    /// Read the posting from a file instead of the clipboard
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Print the resolved configuration and exit
    #[arg(long)]
    show_config: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    // Prompts go to stdout, logs to stderr
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let env_file = env::load_env_file(cli.env_file.as_deref())?;

    if cli.show_config {
        return config::run(env_file.as_deref());
    }

    save::run(cli.input.as_deref())
}
