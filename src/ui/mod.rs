//! Terminal presentation shared by the chat loop and the config commands.
//!
//! Anything the backend sends is untrusted. Before it is printed it goes
//! through [`terminal_safe`], which removes the control characters a
//! terminal would interpret (ESC, CSI, OSC terminators, bell).

use anyhow::Result;
use inquire::InquireError;

mod spinner;
mod style;

pub use spinner::Spinner;
pub use style::Style;

/// Drops control characters from server text, keeping newlines and tabs.
pub fn terminal_safe(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || matches!(c, '\n' | '\t'))
        .collect()
}

/// True when the user left a prompt with Esc or Ctrl+C.
pub const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Runs an interactive flow such as `esgen configure`.
///
/// Leaving any of its prompts ends the flow quietly: nothing is saved and
/// the command still succeeds.
pub fn handle_prompt_cancellation<F>(flow: F) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    flow().or_else(|err| {
        if err
            .downcast_ref::<InquireError>()
            .is_some_and(is_prompt_cancelled)
        {
            println!();
            Ok(())
        } else {
            Err(err)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_safe_strips_escape_sequences() {
        let hostile = "C24\u{1b}[2J\u{1b}]0;pwned\u{7} Steel";
        assert_eq!(terminal_safe(hostile), "C24[2J]0;pwned Steel");
    }

    #[test]
    fn test_terminal_safe_strips_c1_controls() {
        // U+009B is the single-byte CSI
        assert_eq!(terminal_safe("a\u{9b}31mb\u{7f}"), "a31mb");
    }

    #[test]
    fn test_terminal_safe_keeps_layout_and_unicode() {
        assert_eq!(
            terminal_safe("E1 Klimawandel\n\tS1 Belegschaft €"),
            "E1 Klimawandel\n\tS1 Belegschaft €"
        );
    }

    #[test]
    fn test_cancelled_configure_flow_succeeds() {
        let mut saved = false;
        let result = handle_prompt_cancellation(|| {
            Err::<(), _>(InquireError::OperationInterrupted)?;
            saved = true;
            Ok(())
        });
        assert!(result.is_ok());
        assert!(!saved);
    }

    #[test]
    fn test_failed_flow_keeps_its_error() {
        let result = handle_prompt_cancellation(|| {
            Err(anyhow::anyhow!("Failed to write config file"))
        });
        let Err(err) = result else {
            panic!("expected an error");
        };
        assert!(err.to_string().contains("Failed to write config file"));
    }

    #[test]
    fn test_only_escape_and_interrupt_count_as_cancel() {
        assert!(is_prompt_cancelled(&InquireError::OperationCanceled));
        assert!(is_prompt_cancelled(&InquireError::OperationInterrupted));
        assert!(!is_prompt_cancelled(&InquireError::NotTTY));
    }
}
