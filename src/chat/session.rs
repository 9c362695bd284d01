use serde_json::Value;
use thiserror::Error;

use super::input::InputBuffer;
use super::message::{APOLOGY_MESSAGE, Message};
use super::phase::{CompanyContext, CompanyInfo, SessionPhase, build_chat_form};
use crate::client::{BackendClient, ChatForm, ChatReply, ClientError};
use crate::ui::terminal_safe;

pub const INITIAL_PLACEHOLDER: &str = "Enter your company description...";
pub const FOLLOW_UP_PLACEHOLDER: &str = "Ask your question here...";

/// Why a send was not started. The session is left untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SendError {
    #[error("Nothing to send")]
    EmptyInput,
    #[error("Still waiting for the previous answer")]
    Busy,
}

#[derive(Debug, Error)]
pub enum ResetError {
    #[error("Could not reset the conversation: {0}")]
    Client(#[from] ClientError),
    #[error("Server refused to reset the conversation (status: {0})")]
    Rejected(String),
}

/// How a completed request was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// The server's answer was appended.
    Answered,
    /// The request failed and the apology was appended.
    Failed,
    /// The request was superseded (e.g. by a reset) and was discarded.
    Stale,
}

/// A request started by [`ChatSession::begin_send`].
#[derive(Debug)]
pub struct PendingSend {
    seq: u64,
    form: ChatForm,
}

impl PendingSend {
    pub const fn seq(&self) -> u64 {
        self.seq
    }

    pub const fn form(&self) -> &ChatForm {
        &self.form
    }
}

/// Client-side state of one conversation with the backend.
///
/// Sending is split into [`begin_send`](Self::begin_send) and
/// [`complete_send`](Self::complete_send). Only one request may be in
/// flight; each carries a sequence number and a completion that no longer
/// matches the outstanding request is dropped.
#[derive(Debug)]
pub struct ChatSession {
    messages: Vec<Message>,
    input: InputBuffer,
    loading: bool,
    phase: SessionPhase,
    placeholder: &'static str,
    rendered: usize,
    next_seq: u64,
    in_flight: Option<u64>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: vec![Message::welcome()],
            input: InputBuffer::default(),
            loading: false,
            phase: SessionPhase::Uninitialized,
            placeholder: INITIAL_PLACEHOLDER,
            rendered: 0,
            next_seq: 0,
            in_flight: None,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub const fn input(&self) -> &InputBuffer {
        &self.input
    }

    pub const fn input_mut(&mut self) -> &mut InputBuffer {
        &mut self.input
    }

    /// Replaces the draft verbatim.
    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input.set(value);
    }

    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    pub const fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn company_info(&self) -> CompanyInfo {
        self.phase.company_info()
    }

    pub const fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    /// Messages appended since the last call, oldest first.
    ///
    /// The cursor always ends at the newest message, so callers rendering
    /// this slice stay scrolled to the bottom of the log.
    pub fn take_unseen(&mut self) -> &[Message] {
        let start = self.rendered.min(self.messages.len());
        self.rendered = self.messages.len();
        &self.messages[start..]
    }

    /// Starts sending the current draft.
    ///
    /// Appends the raw draft as a user message, clears the draft, marks the
    /// session as loading and returns the request to issue.
    pub fn begin_send(&mut self) -> Result<PendingSend, SendError> {
        if self.in_flight.is_some() {
            return Err(SendError::Busy);
        }
        if self.input.is_blank() {
            return Err(SendError::EmptyInput);
        }

        let message = self.input.take();
        let form = build_chat_form(&message, &self.phase);
        self.messages.push(Message::user(message));
        self.loading = true;

        let seq = self.next_seq;
        self.next_seq += 1;
        self.in_flight = Some(seq);

        tracing::debug!(seq, initialized = self.phase.is_initialized(), "send started");
        Ok(PendingSend { seq, form })
    }

    /// Applies the result of a request started by `begin_send`.
    pub fn complete_send(
        &mut self,
        pending: PendingSend,
        result: Result<ChatReply, ClientError>,
    ) -> SendOutcome {
        if self.in_flight != Some(pending.seq) {
            tracing::info!(seq = pending.seq, "discarding stale reply");
            return SendOutcome::Stale;
        }
        self.in_flight = None;

        let applied = result
            .map_err(|e| e.to_string())
            .and_then(|reply| self.apply_reply(reply));

        let outcome = match applied {
            Ok(answer) => {
                self.messages.push(Message::bot(answer));
                SendOutcome::Answered
            }
            Err(reason) => {
                tracing::warn!(seq = pending.seq, %reason, "chat request failed");
                self.messages.push(Message::bot(APOLOGY_MESSAGE));
                SendOutcome::Failed
            }
        };

        self.loading = false;
        outcome
    }

    /// Sends the current draft and waits for the answer.
    pub async fn send(&mut self, client: &BackendClient) -> Result<SendOutcome, SendError> {
        let pending = self.begin_send()?;
        let result = client.chat(pending.form()).await;
        Ok(self.complete_send(pending, result))
    }

    /// Asks the server to drop its session and starts over locally.
    ///
    /// On any failure the local state is left exactly as it was.
    pub async fn reset(&mut self, client: &BackendClient) -> Result<(), ResetError> {
        let reply = client.reset().await.inspect_err(|e| {
            tracing::warn!(error = %e, "reset request failed");
        })?;

        if !reply.is_success() {
            let status = terminal_safe(&reply.status);
            tracing::warn!(%status, "reset rejected by server");
            return Err(ResetError::Rejected(status));
        }

        self.apply_reset();
        Ok(())
    }

    /// Returns the session to its initial state.
    ///
    /// Any request still in flight becomes stale.
    pub fn apply_reset(&mut self) {
        self.messages = vec![Message::welcome()];
        self.input.clear();
        self.loading = false;
        self.phase = SessionPhase::Uninitialized;
        self.placeholder = INITIAL_PLACEHOLDER;
        self.rendered = 0;
        self.in_flight = None;
        tracing::info!("session reset");
    }

    fn apply_reply(&mut self, reply: ChatReply) -> Result<String, String> {
        if reply.is_first_message {
            let (Some(nace_sector), Some(esrs_sector)) = (reply.nace_sector, reply.esrs_sector)
            else {
                return Err("first reply is missing sector fields".to_string());
            };

            tracing::info!(%nace_sector, %esrs_sector, "company classified");
            self.phase = SessionPhase::Initialized(CompanyContext {
                company_desc: reply.company_desc.unwrap_or_default(),
                nace_sector,
                esrs_sector,
                conversation_history: reply
                    .conversation_history
                    .unwrap_or_else(|| Value::Array(Vec::new())),
            });
            self.placeholder = FOLLOW_UP_PLACEHOLDER;
        } else if let (Some(history), SessionPhase::Initialized(ctx)) =
            (reply.conversation_history, &mut self.phase)
        {
            ctx.conversation_history = history;
        }

        Ok(reply.answer)
    }
}
