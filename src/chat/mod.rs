//! Interactive chat with the reporting assistant.
//!
//! [`ChatSession`] holds the conversation state and talks to the backend;
//! [`ChatRepl`] drives it from the terminal with slash commands.

/// Slash command parsing and autocomplete.
pub mod command;
/// Draft buffer and line-break handling.
pub mod input;
mod message;
mod phase;
/// Sanitizing renderer for server content.
pub mod render;
mod repl;
mod session;
mod ui;

pub use message::{APOLOGY_MESSAGE, Message, Role, WELCOME_MESSAGE};
pub use phase::{
    CompanyContext, CompanyInfo, ESRS_PLACEHOLDER, NACE_PLACEHOLDER, SessionPhase,
    build_chat_form,
};
pub use repl::ChatRepl;
pub use session::{
    ChatSession, FOLLOW_UP_PLACEHOLDER, INITIAL_PLACEHOLDER, PendingSend, ResetError, SendError,
    SendOutcome,
};
