/// Greeting shown at the start of every session.
pub const WELCOME_MESSAGE: &str = "<h2>Welcome to ESGenerator</h2>\n\
<p>Please provide a detailed description of your company's activities, products, services, and sector to help me determine the applicable ESRS reporting standards.</p>";

/// Bot reply used when a message could not be answered.
pub const APOLOGY_MESSAGE: &str =
    "I'm sorry, there was an error processing your request. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

/// One entry of the conversation log.
///
/// `content` holds the markup exactly as received; it is sanitized at
/// render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub is_welcome: bool,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            is_welcome: false,
        }
    }

    pub fn bot(content: impl Into<String>) -> Self {
        Self {
            role: Role::Bot,
            content: content.into(),
            is_welcome: false,
        }
    }

    pub fn welcome() -> Self {
        Self {
            role: Role::Bot,
            content: WELCOME_MESSAGE.to_string(),
            is_welcome: true,
        }
    }
}
