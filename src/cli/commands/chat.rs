use anyhow::{Context, Result};

use super::load_resolved_config;
use crate::chat::ChatRepl;
use crate::client::BackendClient;
use crate::config::ResolveOptions;

pub async fn run_chat(options: &ResolveOptions) -> Result<()> {
    let config = load_resolved_config(options)?;
    tracing::info!(
        chat = %config.endpoints.chat,
        reset = %config.endpoints.reset,
        timeout = ?config.timeout,
        "starting chat session"
    );

    let client = BackendClient::new(config.endpoints, config.timeout)
        .context("Failed to set up the backend client")?;
    let mut repl = ChatRepl::new(client);
    repl.run().await
}
