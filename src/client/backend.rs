use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use url::Url;

use super::endpoints::Endpoints;
use super::wire::{ChatForm, ChatReply, ResetReply, SessionStatus};
use crate::ui::terminal_safe;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
    #[error("Failed to connect to {url}: {source}")]
    Transport {
        url: Url,
        #[source]
        source: reqwest::Error,
    },
    #[error("Request to {url} failed with status {status}: {body}")]
    Status {
        url: Url,
        status: StatusCode,
        body: String,
    },
    #[error("Invalid response from {url}: {source}")]
    Decode {
        url: Url,
        #[source]
        source: serde_json::Error,
    },
}

/// HTTP client for the ESGenerator backend.
///
/// The backend keeps its session server-side behind a cookie, so the
/// underlying client carries a cookie store for its whole lifetime.
pub struct BackendClient {
    client: Client,
    endpoints: Endpoints,
}

impl BackendClient {
    pub fn new(endpoints: Endpoints, timeout: Option<Duration>) -> Result<Self, ClientError> {
        let mut builder = Client::builder().cookie_store(true);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ClientError::Build)?;

        Ok(Self { client, endpoints })
    }

    pub const fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub async fn chat(&self, form: &ChatForm) -> Result<ChatReply, ClientError> {
        let url = &self.endpoints.chat;
        tracing::debug!(
            url = %url,
            with_context = form.context.is_some(),
            "sending chat message"
        );

        let response = self
            .client
            .post(url.clone())
            .multipart(form.to_multipart())
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                url: url.clone(),
                source,
            })?;

        decode(url, response).await
    }

    pub async fn reset(&self) -> Result<ResetReply, ClientError> {
        let url = &self.endpoints.reset;
        tracing::debug!(url = %url, "resetting session");

        let response = self
            .client
            .post(url.clone())
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                url: url.clone(),
                source,
            })?;

        decode(url, response).await
    }

    pub async fn check_session(&self) -> Result<SessionStatus, ClientError> {
        let url = &self.endpoints.check_session;

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                url: url.clone(),
                source,
            })?;

        decode(url, response).await
    }
}

async fn decode<T: DeserializeOwned>(url: &Url, response: Response) -> Result<T, ClientError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|source| ClientError::Transport {
            url: url.clone(),
            source,
        })?;

    if !status.is_success() {
        // The body ends up in the error message shown to the user.
        return Err(ClientError::Status {
            url: url.clone(),
            status,
            body: terminal_safe(body.trim()),
        });
    }

    serde_json::from_str(&body).map_err(|source| ClientError::Decode {
        url: url.clone(),
        source,
    })
}
