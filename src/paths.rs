//! Filesystem locations used by paps-serve
//!
//! ```text
//! ~/.paps-serve/
//! └── config.toml               # API base URL, request timeout
//! ```
//!
//! The config file location can be overridden with `--config` or the
//! `PAPS_SERVE_CONFIG` environment variable.

use std::path::PathBuf;

/// Environment variable naming an alternate config file
pub const CONFIG_ENV: &str = "PAPS_SERVE_CONFIG";

/// Environment variable overriding the configured base URL
pub const API_URL_ENV: &str = "PAPS_API_URL";

/// User-level directory name
const CONFIG_DIR: &str = ".paps-serve";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Get the user-level config directory.
///
/// Returns `~/.paps-serve/`.
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(CONFIG_DIR)
}

/// Get the default config file path.
///
/// Returns `~/.paps-serve/config.toml`.
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}
