//! Browser fetch client.

use http::StatusCode;
use widget_core::{SessionId, WidgetError};

/// Error type for fetch operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Request error: {0}")]
    Request(String),

    #[error("Fetch unsupported on this target: {0}")]
    Unsupported(String),
}

impl From<FetchError> for WidgetError {
    fn from(err: FetchError) -> Self {
        WidgetError::FetchFailure(err.to_string())
    }
}

/// Classify a response status. Anything outside 2xx is a fetch error.
pub fn check_status(url: &str, status: u16) -> Result<(), FetchError> {
    match StatusCode::from_u16(status) {
        Ok(code) if code.is_success() => Ok(()),
        _ => Err(FetchError::Http {
            status,
            url: url.to_string(),
        }),
    }
}

/// Fetch client for the widget's single outbound request.
///
/// No retry and no timeout: the request either resolves or the page is
/// abandoned.
#[derive(Debug, Clone)]
pub struct FetchClient {
    session_id: SessionId,
}

impl FetchClient {
    /// Create a new fetch client.
    pub fn new(session_id: SessionId) -> Self {
        Self { session_id }
    }

    /// GET `url` and return the body of a successful response.
    #[cfg(target_arch = "wasm32")]
    pub async fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let resp = gloo::net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        check_status(url, resp.status())?;

        resp.binary()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))
    }

    /// GET `url` and return the body of a successful response.
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        Err(FetchError::Unsupported(url.to_string()))
    }

    /// Get the session ID.
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_statuses_pass() {
        assert!(check_status("/p.json", 200).is_ok());
        assert!(check_status("/p.json", 204).is_ok());
    }

    #[test]
    fn test_error_statuses_fail() {
        assert_eq!(
            check_status("/p.json", 404),
            Err(FetchError::Http {
                status: 404,
                url: "/p.json".to_string()
            })
        );
        assert!(check_status("/p.json", 500).is_err());
        assert!(check_status("/p.json", 304).is_err());
    }

    #[test]
    fn test_invalid_status_code_fails() {
        assert!(check_status("/p.json", 42).is_err());
    }

    #[test]
    fn test_converts_to_fetch_failure() {
        let err: WidgetError = FetchError::Http {
            status: 503,
            url: "/p.json".into(),
        }
        .into();
        assert_eq!(
            err,
            WidgetError::FetchFailure("HTTP error: 503 for /p.json".into())
        );
    }

    #[test]
    fn test_native_get_is_unsupported() {
        let client = FetchClient::new(SessionId::from_string("s"));
        let result = futures::executor::block_on(client.get("/p.json"));
        assert_eq!(result, Err(FetchError::Unsupported("/p.json".into())));
    }
}
