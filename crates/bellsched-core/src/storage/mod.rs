//! On-disk state owned by callers of the core: the user's configuration.

mod config;

pub use config::{Config, DisplayConfig};

use std::path::PathBuf;

/// Returns `~/.config/bellsched[-dev]/` based on BELLSCHED_ENV.
///
/// Set BELLSCHED_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> crate::Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("BELLSCHED_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("bellsched-dev")
    } else {
        base_dir.join("bellsched")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
