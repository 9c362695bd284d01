//! Route listing and `open` command handlers.

use anyhow::{Result, bail};
use thiserror::Error;

use super::chat::run_chat;
use super::load_resolved_config;
use crate::config::ResolveOptions;
use crate::router::{ROUTE_TABLE, Route};
use crate::status;
use crate::ui::Style;

/// Prints the route table.
pub fn print_routes() {
    println!("{}", Style::header("Routes"));
    for (pattern, description) in ROUTE_TABLE {
        println!(
            "  {}  {}",
            Style::value(format!("{pattern:<24}")),
            Style::secondary(description)
        );
    }
}

/// A path with no view behind it.
#[derive(Debug, Error)]
#[error("No view at '{path}'\n\nRun 'esgen routes' to list the available paths.")]
pub struct UnknownRoute {
    pub path: String,
}

/// Result of opening a path.
#[derive(Debug, PartialEq, Eq)]
pub enum OpenTarget {
    /// The chat view, which this client runs itself.
    Chat,
    /// A view served by the web front end.
    External { view: &'static str, url: String },
}

/// Resolves a path to what `esgen open` should do with it.
pub fn resolve_open(path: &str, options: &ResolveOptions) -> Result<OpenTarget> {
    let route = Route::resolve(path);
    match route {
        Route::Chat => Ok(OpenTarget::Chat),
        Route::NotFound { path } => bail!(UnknownRoute { path }),
        other => {
            let config = load_resolved_config(options)?;
            let url = config.endpoints.page_url(&other.path())?;
            Ok(OpenTarget::External {
                view: other.name(),
                url: url.to_string(),
            })
        }
    }
}

pub async fn run_open(path: &str, options: &ResolveOptions) -> Result<()> {
    match resolve_open(path, options)? {
        OpenTarget::Chat => run_chat(options).await,
        OpenTarget::External { view, url } => {
            status!(
                "The {} view is served by the web front end.",
                Style::value(view)
            );
            println!("{url}");
            Ok(())
        }
    }
}
