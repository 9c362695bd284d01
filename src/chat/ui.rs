//! Chat mode UI components.

use super::message::{Message, Role};
use super::phase::CompanyInfo;
use super::render::{Line, render};
use crate::client::{Endpoints, SessionStatus};
use crate::output;
use crate::ui::{Style, terminal_safe};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(endpoints: &Endpoints) {
    if output::is_quiet() {
        return;
    }
    println!(
        "{} {} - ESRS Reporting Assistant",
        Style::header("esgen"),
        Style::version(format!("v{VERSION}"))
    );
    println!("{}", Style::secondary(endpoints.base.as_str()));
    println!();
}

pub fn print_goodbye() {
    if !output::is_quiet() {
        println!("{}", Style::success("Goodbye!"));
    }
}

/// Prints bot messages. User messages are already on screen as typed.
pub fn print_messages(messages: &[Message]) {
    for message in messages.iter().filter(|m| m.role == Role::Bot) {
        print_bot_message(message);
    }
}

fn print_bot_message(message: &Message) {
    for line in render(&message.content) {
        match line {
            Line::Heading(text) => println!("{}", Style::header(text)),
            Line::Bullet(text) => println!("  {} {text}", Style::bullet("•")),
            Line::Text(text) => println!("{text}"),
            Line::Blank => println!(),
        }
    }
    println!();
}

pub fn print_company_info(info: &CompanyInfo, endpoints: &Endpoints) {
    println!("{}", Style::header("Session"));
    println!(
        "  {}  {}",
        Style::label("NACE sector     "),
        Style::value(&info.nace_sector)
    );
    println!(
        "  {}  {}",
        Style::label("ESRS standards  "),
        Style::value(&info.esrs_sector)
    );
    println!(
        "  {}  {}",
        Style::label("chat endpoint   "),
        Style::secondary(endpoints.chat.as_str())
    );
    println!(
        "  {}  {}",
        Style::label("reset endpoint  "),
        Style::secondary(endpoints.reset.as_str())
    );
    println!();
}

pub fn print_server_status(status: &SessionStatus) {
    println!("{}", Style::header("Server session"));
    match server_status_rows(status) {
        Some(rows) => {
            for (label, value) in rows {
                println!("  {}  {}", Style::label(label), Style::value(value));
            }
        }
        None => println!("  {}", Style::secondary("No company description yet")),
    }
    println!();
}

/// Label/value rows for a classified server session.
fn server_status_rows(status: &SessionStatus) -> Option<[(&'static str, String); 2]> {
    if !status.initialized {
        return None;
    }
    let sector = |value: Option<&str>| terminal_safe(value.unwrap_or("-"));
    Some([
        ("NACE sector   ", sector(status.nace_sector.as_deref())),
        ("ESRS standards", sector(status.esrs_sector.as_deref())),
    ])
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    for (cmd, desc) in super::command::SLASH_COMMANDS {
        println!(
            "  {}  {}",
            Style::command(format!("{cmd:<8}")),
            Style::secondary(desc)
        );
    }
    println!();
    println!(
        "{}",
        Style::hint("End a line with \\ to continue the message on a new line.")
    );
    println!();
}

pub fn print_success(message: &str) {
    println!("{} {message}", Style::success("✓"));
    println!();
}

/// Error messages may carry server text, so they are cleaned before printing.
pub fn print_error(message: &str) {
    eprintln!("{} {}", Style::error("Error:"), terminal_safe(message));
    eprintln!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unclassified_server_session_has_no_rows() {
        assert!(server_status_rows(&SessionStatus::default()).is_none());
    }

    #[test]
    fn test_server_status_rows_are_terminal_safe() {
        let status = SessionStatus {
            initialized: true,
            nace_sector: Some("C24\u{1b}]0;pwned\u{7}".to_string()),
            esrs_sector: None,
        };

        let rows = server_status_rows(&status);

        assert_eq!(
            rows.map(|[nace, esrs]| (nace.1, esrs.1)),
            Some(("C24]0;pwned".to_string(), "-".to_string()))
        );
    }
}
