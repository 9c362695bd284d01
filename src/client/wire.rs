use serde::Deserialize;
use serde_json::Value;

/// Form fields for `POST /chat`.
///
/// `context` is present once the session has been classified; the server
/// expects those fields echoed back verbatim on every later request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatForm {
    pub message: String,
    pub context: Option<ContextFields>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextFields {
    pub company_desc: String,
    pub nace_sector: String,
    pub esrs_sector: String,
    /// JSON-encoded conversation history.
    pub conversation_history: String,
}

impl ChatForm {
    /// Field name/value pairs in the order they are sent.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("message", self.message.clone())];
        if let Some(ctx) = &self.context {
            fields.push(("company_desc", ctx.company_desc.clone()));
            fields.push(("nace_sector", ctx.nace_sector.clone()));
            fields.push(("esrs_sector", ctx.esrs_sector.clone()));
            fields.push(("conversation_history", ctx.conversation_history.clone()));
        }
        fields
    }

    pub fn to_multipart(&self) -> reqwest::multipart::Form {
        self.fields()
            .into_iter()
            .fold(reqwest::multipart::Form::new(), |form, (name, value)| {
                form.text(name, value)
            })
    }
}

/// Response body of `POST /chat`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub is_first_message: bool,
    #[serde(default)]
    pub nace_sector: Option<String>,
    #[serde(default)]
    pub esrs_sector: Option<String>,
    #[serde(default)]
    pub company_desc: Option<String>,
    #[serde(default)]
    pub conversation_history: Option<Value>,
    pub answer: String,
}

/// Response body of `POST /reset`.
#[derive(Debug, Clone, Deserialize)]
pub struct ResetReply {
    pub status: String,
}

impl ResetReply {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Response body of `GET /check_session`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionStatus {
    #[serde(default)]
    pub initialized: bool,
    #[serde(default)]
    pub nace_sector: Option<String>,
    #[serde(default)]
    pub esrs_sector: Option<String>,
}
