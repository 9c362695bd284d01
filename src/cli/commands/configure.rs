//! Configuration display and editing.

use anyhow::Result;
use inquire::{CustomType, Text};

use crate::client::{
    DEFAULT_BASE_URL, DEFAULT_CHAT_PATH, DEFAULT_CHECK_SESSION_PATH, DEFAULT_RESET_PATH, Endpoints,
};
use crate::config::{ConfigFile, ConfigManager, EsgenConfig, ResolveOptions, resolve_config};
use crate::log;
use crate::ui::{Style, handle_prompt_cancellation};

/// Prints the resolved configuration and where it came from.
pub fn show_config(options: &ResolveOptions) -> Result<()> {
    let manager = ConfigManager::new();
    let file_config = manager.load_or_default()?;
    let resolved = resolve_config(options, &file_config)?;

    println!("{}", Style::header("Configuration"));
    print_row("base url", resolved.endpoints.base.as_str());
    print_row("chat", resolved.endpoints.chat.as_str());
    print_row("reset", resolved.endpoints.reset.as_str());
    print_row("session", resolved.endpoints.check_session.as_str());
    let timeout = resolved
        .timeout
        .map_or_else(|| "none".to_string(), |t| format!("{}s", t.as_secs()));
    print_row("timeout", &timeout);
    println!();

    let file_state = if manager.exists() { "" } else { " (not created)" };
    println!(
        "  {}  {}{}",
        Style::label("config file"),
        Style::secondary(manager.config_path().display().to_string()),
        Style::secondary(file_state)
    );
    println!(
        "  {}     {}",
        Style::label("log file"),
        Style::secondary(log::log_path().display().to_string())
    );

    Ok(())
}

fn print_row(label: &str, value: &str) {
    println!(
        "  {}  {}",
        Style::label(format!("{label:<9}")),
        Style::value(value)
    );
}

/// Writes a default config file.
pub fn init_config() -> Result<()> {
    let manager = ConfigManager::new();
    manager.init_default()?;
    println!(
        "{} Configuration written to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );
    Ok(())
}

/// Runs the interactive configure command.
pub fn run_configure() -> Result<()> {
    handle_prompt_cancellation(run_configure_inner)
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new();
    let current = manager.load_or_default()?.esgen;

    let base_url = prompt_url(
        "Backend base URL:",
        current.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
    )?;
    let chat_path = prompt_target(
        "Chat path or URL:",
        current.chat_path.as_deref().unwrap_or(DEFAULT_CHAT_PATH),
    )?;
    let reset_path = prompt_target(
        "Reset path or URL:",
        current.reset_path.as_deref().unwrap_or(DEFAULT_RESET_PATH),
    )?;

    let timeout_secs = CustomType::<u64>::new("Request timeout in seconds (0 = none):")
        .with_default(current.timeout_secs.unwrap_or(0))
        .with_error_message("Please enter a whole number of seconds")
        .prompt()
        .map(|secs| Some(secs).filter(|s| *s > 0))?;

    let config = ConfigFile {
        esgen: EsgenConfig {
            base_url: Some(base_url),
            chat_path: Some(chat_path),
            reset_path: Some(reset_path),
            check_session_path: current
                .check_session_path
                .or_else(|| Some(DEFAULT_CHECK_SESSION_PATH.to_string())),
            timeout_secs,
        },
    };

    // Validate before writing anything.
    resolve_config(&ResolveOptions::default(), &config)?;
    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn prompt_url(message: &str, default: &str) -> Result<String> {
    let value = Text::new(message)
        .with_default(default)
        .with_validator(|input: &str| {
            Ok::<_, inquire::CustomUserError>(
                match Endpoints::resolve(
                    input,
                    DEFAULT_CHAT_PATH,
                    DEFAULT_RESET_PATH,
                    DEFAULT_CHECK_SESSION_PATH,
                ) {
                    Ok(_) => inquire::validator::Validation::Valid,
                    Err(e) => inquire::validator::Validation::Invalid(e.to_string().into()),
                },
            )
        })
        .prompt()?;
    Ok(value.trim().to_string())
}

fn prompt_target(message: &str, default: &str) -> Result<String> {
    let value = Text::new(message)
        .with_default(default)
        .with_help_message("A path such as /chat, or a full URL")
        .prompt()?;
    Ok(value.trim().to_string())
}
