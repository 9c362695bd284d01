//! Path-to-view routing.
//!
//! Every path maps to exactly one view. There are no guards or redirects;
//! paths outside the table resolve to [`Route::NotFound`].

use std::fmt;

/// The views reachable from a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Chat,
    Editor,
    Login,
    Register,
    ForgotPassword,
    ResetPassword { token: String },
    NotFound { path: String },
}

/// Route patterns with a short description, in display order.
pub const ROUTE_TABLE: &[(&str, &str)] = &[
    ("/", "Chat with the reporting assistant"),
    ("/editor", "Report editor"),
    ("/login", "Sign in"),
    ("/register", "Create an account"),
    ("/forgot-password", "Request a password reset"),
    ("/reset-password/:token", "Set a new password"),
];

impl Route {
    /// Resolves a path to its view.
    ///
    /// Query strings, fragments, and a single trailing slash are ignored.
    /// The empty path is the chat view.
    pub fn resolve(path: &str) -> Self {
        let trimmed = strip_query(path);
        let normalized = match trimmed {
            "" | "/" => "/",
            p => p.strip_suffix('/').unwrap_or(p),
        };

        match normalized {
            "/" => Self::Chat,
            "/editor" => Self::Editor,
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/forgot-password" => Self::ForgotPassword,
            other => other
                .strip_prefix("/reset-password/")
                .filter(|token| is_token(token))
                .map_or_else(
                    || Self::NotFound {
                        path: path.to_string(),
                    },
                    |token| Self::ResetPassword {
                        token: token.to_string(),
                    },
                ),
        }
    }

    /// Canonical path for this view.
    pub fn path(&self) -> String {
        match self {
            Self::Chat => "/".to_string(),
            Self::Editor => "/editor".to_string(),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::ForgotPassword => "/forgot-password".to_string(),
            Self::ResetPassword { token } => format!("/reset-password/{token}"),
            Self::NotFound { path } => path.clone(),
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::Editor => "editor",
            Self::Login => "login",
            Self::Register => "register",
            Self::ForgotPassword => "forgot-password",
            Self::ResetPassword { .. } => "reset-password",
            Self::NotFound { .. } => "not-found",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single path segment that URL resolution keeps as-is.
fn is_token(token: &str) -> bool {
    if token.is_empty() || token.contains('/') {
        return false;
    }
    // `.` and `..` (also percent-encoded) are removed when the URL is built
    let decoded = token.to_ascii_lowercase().replace("%2e", ".");
    !matches!(decoded.as_str(), "." | "..")
}

fn strip_query(path: &str) -> &str {
    path.find(['?', '#']).map_or(path, |idx| &path[..idx])
}
