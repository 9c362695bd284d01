use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::output;

const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const TICK: Duration = Duration::from_millis(80);

/// Shown while a backend request is outstanding.
///
/// Answers can take a while, so the elapsed time is displayed next to the
/// message. Cleared when stopped or dropped; never drawn in quiet mode.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    pub fn new(message: &str) -> Self {
        let bar = if output::is_quiet() {
            ProgressBar::hidden()
        } else {
            ProgressBar::new_spinner()
        };

        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_strings(FRAMES)
            .template("{spinner} {msg} {elapsed:.dim}")
        {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        if !bar.is_hidden() {
            bar.enable_steady_tick(TICK);
        }

        Self { bar }
    }

    pub fn stop(self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}
