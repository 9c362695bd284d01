//! Subcommand implementations.

use anyhow::Result;

use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};

/// Chat mode command handler.
pub mod chat;

/// Configuration display and editing handlers.
pub mod configure;

/// Route resolution handlers.
pub mod routes;

/// Loads the config file and applies CLI overrides.
pub fn load_resolved_config(options: &ResolveOptions) -> Result<ResolvedConfig> {
    let manager = ConfigManager::new();
    let file_config = manager.load_or_default()?;
    resolve_config(options, &file_config)
}
