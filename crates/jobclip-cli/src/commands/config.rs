//! Config command - show the resolved configuration.

use std::path::Path;

use anyhow::Context;
use console::style;

use jobclip_core::Config;

use crate::env::default_env_path;

pub fn run(env_file: Option<&Path>) -> anyhow::Result<()> {
    match env_file {
        Some(path) => println!("Env file: {}", path.display()),
        None => {
            println!(
                "{} No env file found, reading the process environment.",
                style("ℹ").blue()
            );
            println!("Create {} to configure jobclip.", default_env_path().display());
        }
    }

    let config = Config::from_env().context("Invalid configuration")?;

    println!("{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}
