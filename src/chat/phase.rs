use serde_json::Value;

use crate::client::{ChatForm, ContextFields};
use crate::ui::terminal_safe;

pub const NACE_PLACEHOLDER: &str = "Not classified yet";
pub const ESRS_PLACEHOLDER: &str = "Not determined yet";

/// Company classification captured from the server's first reply.
///
/// The client never interprets these values; they are sent back verbatim
/// with every later message.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyContext {
    pub company_desc: String,
    pub nace_sector: String,
    pub esrs_sector: String,
    pub conversation_history: Value,
}

/// Whether the session has been classified yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionPhase {
    #[default]
    Uninitialized,
    Initialized(CompanyContext),
}

impl SessionPhase {
    pub const fn is_initialized(&self) -> bool {
        matches!(self, Self::Initialized(_))
    }

    pub const fn context(&self) -> Option<&CompanyContext> {
        match self {
            Self::Uninitialized => None,
            Self::Initialized(ctx) => Some(ctx),
        }
    }

    pub fn company_info(&self) -> CompanyInfo {
        match self {
            Self::Uninitialized => CompanyInfo::default(),
            Self::Initialized(ctx) => CompanyInfo {
                initialized: true,
                nace_sector: terminal_safe(&ctx.nace_sector),
                esrs_sector: terminal_safe(&ctx.esrs_sector),
            },
        }
    }
}

/// Display view of the classification state, safe to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyInfo {
    pub initialized: bool,
    pub nace_sector: String,
    pub esrs_sector: String,
}

impl Default for CompanyInfo {
    fn default() -> Self {
        Self {
            initialized: false,
            nace_sector: NACE_PLACEHOLDER.to_string(),
            esrs_sector: ESRS_PLACEHOLDER.to_string(),
        }
    }
}

/// Builds the `/chat` form for a message in the given phase.
///
/// Before classification only the message is sent. Afterwards the company
/// context and the JSON-encoded history ride along on every request.
pub fn build_chat_form(message: &str, phase: &SessionPhase) -> ChatForm {
    let context = match phase {
        SessionPhase::Uninitialized => None,
        SessionPhase::Initialized(ctx) => Some(ContextFields {
            company_desc: ctx.company_desc.clone(),
            nace_sector: ctx.nace_sector.clone(),
            esrs_sector: ctx.esrs_sector.clone(),
            conversation_history: ctx.conversation_history.to_string(),
        }),
    };

    ChatForm {
        message: message.to_string(),
        context,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn initialized() -> SessionPhase {
        SessionPhase::Initialized(CompanyContext {
            company_desc: "We manufacture steel pipes".to_string(),
            nace_sector: "24.20".to_string(),
            esrs_sector: "Manufacturing".to_string(),
            conversation_history: json!(["Company description: steel pipes", "Q: hi"]),
        })
    }

    #[test]
    fn test_uninitialized_company_info_uses_placeholders() {
        let info = SessionPhase::Uninitialized.company_info();
        assert!(!info.initialized);
        assert_eq!(info.nace_sector, "Not classified yet");
        assert_eq!(info.esrs_sector, "Not determined yet");
    }

    #[test]
    fn test_initialized_company_info() {
        let info = initialized().company_info();
        assert!(info.initialized);
        assert_eq!(info.nace_sector, "24.20");
        assert_eq!(info.esrs_sector, "Manufacturing");
    }

    #[test]
    fn test_company_info_strips_terminal_controls() {
        let phase = SessionPhase::Initialized(CompanyContext {
            company_desc: String::new(),
            nace_sector: "C24\u{1b}[2J\u{1b}]0;pwned\u{7}".to_string(),
            esrs_sector: "\u{9b}31mManufacturing".to_string(),
            conversation_history: json!([]),
        });

        let info = phase.company_info();
        assert_eq!(info.nace_sector, "C24[2J]0;pwned");
        assert_eq!(info.esrs_sector, "31mManufacturing");

        // The raw values still go back to the server untouched.
        let form = build_chat_form("next", &phase);
        let context = form.context.unwrap();
        assert!(context.nace_sector.contains('\u{1b}'));
    }

    #[test]
    fn test_form_before_classification_carries_only_message() {
        let form = build_chat_form("  raw input ", &SessionPhase::Uninitialized);
        assert_eq!(form.message, "  raw input ");
        assert!(form.context.is_none());
    }

    #[test]
    fn test_form_after_classification_echoes_context() {
        let form = build_chat_form("Which standards apply?", &initialized());
        let Some(ctx) = form.context else {
            panic!("expected context fields");
        };

        assert_eq!(ctx.company_desc, "We manufacture steel pipes");
        assert_eq!(ctx.nace_sector, "24.20");
        assert_eq!(ctx.esrs_sector, "Manufacturing");
        assert_eq!(
            ctx.conversation_history,
            r#"["Company description: steel pipes","Q: hi"]"#
        );
    }
}
