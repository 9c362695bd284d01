use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::input::{EnterAction, on_enter};
use super::session::ChatSession;
use super::ui;
use crate::client::BackendClient;
use crate::ui::{Spinner, is_prompt_cancelled};

/// Interactive chat loop on top of a [`ChatSession`].
pub struct ChatRepl {
    session: ChatSession,
    client: BackendClient,
}

impl ChatRepl {
    pub fn new(client: BackendClient) -> Self {
        Self {
            session: ChatSession::new(),
            client,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header(self.client.endpoints());
        ui::print_messages(self.session.take_unseen());

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let continue_style = Styled::new("…").with_fg(Color::Grey);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let composing = !self.session.input().value().is_empty();
            let config = if composing {
                render_config
                    .with_prompt_prefix(continue_style)
                    .with_answered_prompt_prefix(continue_style)
            } else {
                render_config
            };
            let help = self.help_message();

            let input = Text::new("")
                .with_placeholder(self.session.placeholder())
                .with_render_config(config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message(&help)
                .prompt();

            match input {
                Ok(line) => match parse_input(&line, composing) {
                    Input::Empty => self.submit().await,
                    Input::Text { text, continued } => {
                        self.session.input_mut().push_str(&text);
                        match on_enter(continued) {
                            EnterAction::InsertNewline => self.session.input_mut().insert_newline(),
                            EnterAction::Submit => self.submit().await,
                        }
                    }
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd).await {
                            break;
                        }
                    }
                },
                Err(e) if is_prompt_cancelled(&e) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    fn help_message(&self) -> String {
        let height = self.session.input().height();
        match height.visible {
            1 => "Enter to send, end a line with \\ for a new line, /help for commands".to_string(),
            lines if height.scrollable => {
                format!("Draft: {lines}+ lines (scrolling), Enter to send")
            }
            lines => format!("Draft: {lines} lines, Enter to send"),
        }
    }

    async fn submit(&mut self) {
        if self.session.input().is_blank() {
            return;
        }

        let spinner = Spinner::new("Thinking...");
        let result = self.session.send(&self.client).await;
        spinner.stop();

        if let Err(e) = result {
            ui::print_error(&e.to_string());
            return;
        }
        ui::print_messages(self.session.take_unseen());
    }

    async fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Help => ui::print_help(),
            SlashCommand::Info => {
                ui::print_company_info(&self.session.company_info(), self.client.endpoints());
            }
            SlashCommand::Reset => match self.session.reset(&self.client).await {
                Ok(()) => {
                    ui::print_success("Started a new conversation");
                    ui::print_messages(self.session.take_unseen());
                }
                Err(e) => ui::print_error(&e.to_string()),
            },
            SlashCommand::Status => match self.client.check_session().await {
                Ok(status) => ui::print_server_status(&status),
                Err(e) => ui::print_error(&e.to_string()),
            },
            SlashCommand::Quit => return false,
            SlashCommand::Unknown(cmd) => ui::print_error(&format!("Unknown command: /{cmd}")),
        }
        true
    }
}
