mod backend;
mod endpoints;
mod wire;

pub use backend::{BackendClient, ClientError};
pub use endpoints::{
    DEFAULT_BASE_URL, DEFAULT_CHAT_PATH, DEFAULT_CHECK_SESSION_PATH, DEFAULT_RESET_PATH,
    EndpointError, Endpoints,
};
pub use wire::{ChatForm, ChatReply, ContextFields, ResetReply, SessionStatus};
