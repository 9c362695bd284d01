//! XDG-style path utilities for configuration and log directories.
//!
//! Paths follow the XDG Base Directory conventions on every platform
//! instead of the OS-specific locations.

use std::path::PathBuf;

const APP_DIR: &str = "esgen";

/// Returns the configuration directory for esgen.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/esgen` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/esgen` otherwise
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
pub fn config_dir() -> PathBuf {
    xdg_dir("XDG_CONFIG_HOME", &[".config"])
}

/// Returns the state directory for esgen, where the log file lives.
///
/// Resolution order:
/// 1. `$XDG_STATE_HOME/esgen` if `XDG_STATE_HOME` is set
/// 2. `~/.local/state/esgen` otherwise
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
pub fn state_dir() -> PathBuf {
    xdg_dir("XDG_STATE_HOME", &[".local", "state"])
}

fn xdg_dir(env_var: &str, fallback: &[&str]) -> PathBuf {
    std::env::var(env_var)
        .ok()
        .filter(|dir| !dir.is_empty())
        .map_or_else(
            || {
                fallback
                    .iter()
                    .fold(home_dir(), |path, part| path.join(part))
                    .join(APP_DIR)
            },
            |xdg| PathBuf::from(xdg).join(APP_DIR),
        )
}

/// Returns the user's home directory.
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
#[allow(clippy::expect_used)]
fn home_dir() -> PathBuf {
    dirs::home_dir().expect("Failed to determine home directory")
}
