//! Draft buffer for the message being composed.

/// Height cap of the draft, in line units. Past this the draft scrolls.
pub const MAX_INPUT_HEIGHT: usize = 150;

/// What pressing Enter does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnterAction {
    Submit,
    InsertNewline,
}

/// Enter submits; Enter with the modifier held inserts a line break.
pub const fn on_enter(modifier_held: bool) -> EnterAction {
    if modifier_held {
        EnterAction::InsertNewline
    } else {
        EnterAction::Submit
    }
}

/// Auto-grow height of the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftHeight {
    /// Visible height, capped at [`MAX_INPUT_HEIGHT`].
    pub visible: usize,
    /// Whether the content overflows the cap.
    pub scrollable: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    value: String,
}

impl InputBuffer {
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the draft verbatim.
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn insert_newline(&mut self) {
        self.value.push('\n');
    }

    pub fn push_str(&mut self, text: &str) {
        self.value.push_str(text);
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.value)
    }

    pub fn line_count(&self) -> usize {
        self.value.split('\n').count()
    }

    pub fn height(&self) -> DraftHeight {
        let lines = self.line_count();
        DraftHeight {
            visible: lines.min(MAX_INPUT_HEIGHT),
            scrollable: lines > MAX_INPUT_HEIGHT,
        }
    }
}
