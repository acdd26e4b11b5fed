//! Save command - read the posting, confirm its fields and write it out.

use std::io;
use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use chrono::Local;
use console::style;
use tracing::{debug, info};

use jobclip_core::{process_submission, Config, Outcome, Prompter};

use crate::clipboard::{FileSource, SystemClipboard, TextSource};

pub fn run(input: Option<&Path>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Configuration problems stop us before anything is read or asked
    let config = Config::from_env().context("Invalid configuration")?;
    info!("Saving postings to {}", config.save_folder.display());

    let source: Box<dyn TextSource> = match input {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(SystemClipboard),
    };
    let text = source.read_text()?;
    info!("Read {} characters from {}", text.chars().count(), source.describe());

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let now = Local::now().naive_local();

    match process_submission(&config, &text, &mut prompter, now)? {
        Outcome::Saved(path) => {
            println!(
                "{} Job description saved to: {}",
                style("✓").green(),
                path.display()
            );
        }
        Outcome::Aborted => {
            println!("{} Aborted, nothing was saved.", style("ℹ").blue());
        }
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}
