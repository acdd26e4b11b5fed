//! Env-file discovery and loading.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

/// Per-user env file: `<config dir>/jobclip/.env`.
pub fn default_env_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("jobclip")
        .join(".env")
}

/// Load settings into the process environment.
///
/// Uses `explicit` when given, otherwise the first `.env` found from the
/// current directory upwards, otherwise [`default_env_path`]. Variables
/// already set in the environment win. Returns the file that was loaded.
pub fn load_env_file(explicit: Option<&Path>) -> anyhow::Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        dotenvy::from_path(path)
            .with_context(|| format!("Failed to load env file {}", path.display()))?;
        debug!("Loaded settings from {}", path.display());
        return Ok(Some(path.to_path_buf()));
    }

    match dotenvy::dotenv() {
        Ok(path) => {
            debug!("Loaded settings from {}", path.display());
            return Ok(Some(path));
        }
        Err(e) if e.not_found() => {}
        Err(e) => return Err(e).context("Failed to load .env"),
    }

    let fallback = default_env_path();
    if fallback.is_file() {
        dotenvy::from_path(&fallback)
            .with_context(|| format!("Failed to load env file {}", fallback.display()))?;
        debug!("Loaded settings from {}", fallback.display());
        return Ok(Some(fallback));
    }

    debug!("No env file found, using the process environment only");
    Ok(None)
}
