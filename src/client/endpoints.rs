use thiserror::Error;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_CHAT_PATH: &str = "/chat";
pub const DEFAULT_RESET_PATH: &str = "/reset";
pub const DEFAULT_CHECK_SESSION_PATH: &str = "/check_session";

#[derive(Debug, Error)]
pub enum EndpointError {
    #[error("Invalid URL '{value}': {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Unsupported URL scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),
}

/// Absolute backend URLs.
///
/// Each target is joined onto the base URL the way a browser resolves a
/// link: `/chat` is origin-relative, `chat` is relative to the base path,
/// and an absolute URL replaces the base entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub base: Url,
    pub chat: Url,
    pub reset: Url,
    pub check_session: Url,
}

impl Endpoints {
    pub fn resolve(
        base_url: &str,
        chat_path: &str,
        reset_path: &str,
        check_session_path: &str,
    ) -> Result<Self, EndpointError> {
        let base = Url::parse(base_url).map_err(|source| EndpointError::InvalidUrl {
            value: base_url.to_string(),
            source,
        })?;
        check_scheme(&base)?;

        Ok(Self {
            chat: join(&base, chat_path)?,
            reset: join(&base, reset_path)?,
            check_session: join(&base, check_session_path)?,
            base,
        })
    }

    /// Absolute URL of a front-end page under the base URL.
    pub fn page_url(&self, path: &str) -> Result<Url, EndpointError> {
        join(&self.base, path)
    }
}

impl Default for Endpoints {
    #[allow(clippy::expect_used)]
    fn default() -> Self {
        // The defaults are compile-time constants
        Self::resolve(
            DEFAULT_BASE_URL,
            DEFAULT_CHAT_PATH,
            DEFAULT_RESET_PATH,
            DEFAULT_CHECK_SESSION_PATH,
        )
        .expect("default endpoints are valid")
    }
}

fn join(base: &Url, target: &str) -> Result<Url, EndpointError> {
    let url = base.join(target).map_err(|source| EndpointError::InvalidUrl {
        value: target.to_string(),
        source,
    })?;
    check_scheme(&url)?;
    Ok(url)
}

fn check_scheme(url: &Url) -> Result<(), EndpointError> {
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(EndpointError::UnsupportedScheme(other.to_string())),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.chat.as_str(), "http://localhost:5000/chat");
        assert_eq!(endpoints.reset.as_str(), "http://localhost:5000/reset");
        assert_eq!(
            endpoints.check_session.as_str(),
            "http://localhost:5000/check_session"
        );
    }

    #[test]
    fn test_origin_relative_paths_drop_base_path() {
        let endpoints =
            Endpoints::resolve("https://esg.example.com/app/", "/chat", "reset", "/check").unwrap();
        assert_eq!(endpoints.chat.as_str(), "https://esg.example.com/chat");
        assert_eq!(endpoints.reset.as_str(), "https://esg.example.com/app/reset");
    }

    #[test]
    fn test_absolute_target_replaces_base() {
        let endpoints = Endpoints::resolve(
            "http://localhost:5173",
            "http://localhost:5000/chat",
            "/reset",
            "/check_session",
        )
        .unwrap();
        assert_eq!(endpoints.chat.as_str(), "http://localhost:5000/chat");
        assert_eq!(endpoints.reset.as_str(), "http://localhost:5173/reset");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = Endpoints::resolve("not a url", "/chat", "/reset", "/c").unwrap_err();
        assert!(matches!(err, EndpointError::InvalidUrl { .. }));
    }

    #[test]
    fn test_unsupported_scheme() {
        let err = Endpoints::resolve("ftp://example.com", "/chat", "/reset", "/c").unwrap_err();
        assert!(err.to_string().contains("ftp"));
    }

    #[test]
    fn test_page_url() {
        let endpoints = Endpoints::default();
        let url = endpoints.page_url("/reset-password/abc").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/reset-password/abc");
    }
}
