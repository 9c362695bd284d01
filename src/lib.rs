//! # esgen - ESGenerator terminal client
//!
//! `esgen` talks to the ESGenerator backend, an assistant that classifies a
//! company into its NACE sector, determines the ESRS standards that apply,
//! and answers reporting questions about them.
//!
//! ## Features
//!
//! - **Guided session**: the first message describes the company; the reply
//!   fixes the NACE sector and ESRS standards for the rest of the session
//! - **Context round-tripping**: the classification and conversation history
//!   are echoed to the server with every follow-up question
//! - **Safe rendering**: server markup is sanitized before it reaches the terminal
//! - **Configurable endpoints**: chat and reset targets may live on different origins
//!
//! ## Quick Start
//!
//! ```bash
//! # Chat with a local backend
//! esgen
//!
//! # Point at another server
//! esgen --base-url https://esg.example.com chat
//!
//! # Where does a front-end path lead?
//! esgen open /reset-password/abc123
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/esgen/config.toml`:
//!
//! ```toml
//! [esgen]
//! base_url = "http://localhost:5000"
//! chat_path = "/chat"
//! reset_path = "/reset"
//! timeout_secs = 60
//! ```

/// Interactive chat mode and the session controller.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// HTTP client for the backend API.
pub mod client;

/// Configuration file management.
pub mod config;

/// File-based diagnostic logging.
pub mod log;

/// Global output configuration (quiet mode, colors).
pub mod output;

/// XDG-style path utilities for configuration and logs.
pub mod paths;

/// Path-to-view routing.
pub mod router;

/// Terminal UI components (spinner, colors).
pub mod ui;
