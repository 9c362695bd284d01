use inquire::autocompletion::{Autocomplete, Replacement};

// Available slash commands: (command, description)
pub const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/help", "Show available commands"),
    ("/info", "Show company classification and endpoints"),
    ("/reset", "Start a new conversation"),
    ("/status", "Ask the server about the current session"),
    ("/quit", "Exit chat mode"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Help,
    Info,
    Reset,
    Status,
    Quit,
    Unknown(String),
}

/// One line entered at the prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    /// Text to add to the draft. `continued` means the line ended with the
    /// line-break modifier and more lines follow.
    Text { text: String, continued: bool },
    Command(SlashCommand),
    Empty,
}

/// Parses a prompt line.
///
/// A trailing backslash is the terminal's stand-in for Shift+Enter: it is
/// removed and the line is marked as continued. Text is kept verbatim so the
/// draft carries exactly what was typed. Slash commands are only
/// recognized on the first line of a draft; later lines are message text.
pub fn parse_input(line: &str, composing: bool) -> Input {
    if line.trim().is_empty() {
        return Input::Empty;
    }

    if !composing && let Some(cmd) = line.trim().strip_prefix('/') {
        return Input::Command(parse_slash_command(cmd));
    }

    line.strip_suffix('\\').map_or_else(
        || Input::Text {
            text: line.to_string(),
            continued: false,
        },
        |text| Input::Text {
            text: text.to_string(),
            continued: true,
        },
    )
}

fn parse_slash_command(cmd: &str) -> SlashCommand {
    let parts: Vec<&str> = cmd.split_whitespace().collect();

    match parts.first().copied() {
        Some("help" | "h" | "?") => SlashCommand::Help,
        Some("info") => SlashCommand::Info,
        Some("reset" | "new") => SlashCommand::Reset,
        Some("status") => SlashCommand::Status,
        Some("quit" | "exit" | "q") => SlashCommand::Quit,
        _ => SlashCommand::Unknown(parts.join(" ")),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_input("", false), Input::Empty);
        assert_eq!(parse_input("   ", false), Input::Empty);
    }

    #[test]
    fn test_parse_text_input_is_verbatim() {
        assert_eq!(
            parse_input("  We make pipes ", false),
            Input::Text {
                text: "  We make pipes ".to_string(),
                continued: false
            }
        );
    }

    #[test]
    fn test_parse_continued_line() {
        assert_eq!(
            parse_input("first line\\", false),
            Input::Text {
                text: "first line".to_string(),
                continued: true
            }
        );
    }

    #[test]
    fn test_parse_lone_backslash_continues_with_empty_line() {
        assert_eq!(
            parse_input("\\", false),
            Input::Text {
                text: String::new(),
                continued: true
            }
        );
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_input("/help", false), Input::Command(SlashCommand::Help));
        assert_eq!(parse_input("/info", false), Input::Command(SlashCommand::Info));
        assert_eq!(parse_input("/reset", false), Input::Command(SlashCommand::Reset));
        assert_eq!(parse_input("/new", false), Input::Command(SlashCommand::Reset));
        assert_eq!(parse_input(" /status ", false), Input::Command(SlashCommand::Status));
    }

    #[test]
    fn test_parse_quit_commands() {
        for line in ["/quit", "/exit", "/q"] {
            assert_eq!(parse_input(line, false), Input::Command(SlashCommand::Quit));
        }
    }

    #[test]
    fn test_slash_line_inside_draft_is_text() {
        assert_eq!(
            parse_input("/usr/share is where our data lives\\", true),
            Input::Text {
                text: "/usr/share is where our data lives".to_string(),
                continued: true
            }
        );
        assert_eq!(
            parse_input("/quit", true),
            Input::Text {
                text: "/quit".to_string(),
                continued: false
            }
        );
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            parse_input("/unknown arg", false),
            Input::Command(SlashCommand::Unknown("unknown arg".to_string()))
        );
    }

    #[test]
    fn test_completer_no_suggestions_for_regular_text() {
        let mut completer = SlashCommandCompleter;
        let suggestions = completer.get_suggestions("hello").unwrap();
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_completer_suggestions_for_slash() {
        let mut completer = SlashCommandCompleter;
        let suggestions = completer.get_suggestions("/").unwrap();
        assert_eq!(suggestions.len(), SLASH_COMMANDS.len());
    }

    #[test]
    fn test_completer_suggestions_filter_by_prefix() {
        let mut completer = SlashCommandCompleter;

        let suggestions = completer.get_suggestions("/r").unwrap();
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].starts_with("/reset"));

        let suggestions = completer.get_suggestions("/q").unwrap();
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].starts_with("/quit"));
    }

    #[test]
    fn test_completer_completion() {
        let mut completer = SlashCommandCompleter;
        let suggestion = "/status  Ask the server about the current session".to_string();
        let completion = completer.get_completion("/s", Some(suggestion)).unwrap();
        assert_eq!(completion, Some("/status".to_string()));
    }

    #[test]
    fn test_completer_completion_none() {
        let mut completer = SlashCommandCompleter;
        let completion = completer.get_completion("/x", None).unwrap();
        assert!(completion.is_none());
    }
}
