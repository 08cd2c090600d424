//! Product sources.

use std::cell::Cell;

use async_trait::async_trait;

use crate::client::{FetchClient, FetchError};

/// Supplies the raw product document.
///
/// Browser futures are not `Send`, hence `?Send`.
#[async_trait(?Send)]
pub trait ProductSource {
    /// Fetch the product document body.
    async fn fetch_product(&self) -> Result<Vec<u8>, FetchError>;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}

/// Product source backed by a single HTTP GET.
#[derive(Debug, Clone)]
pub struct HttpProductSource {
    url: String,
    client: FetchClient,
}

impl HttpProductSource {
    /// Create a source for `url`.
    pub fn new(url: impl Into<String>, client: FetchClient) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }
}

#[async_trait(?Send)]
impl ProductSource for HttpProductSource {
    async fn fetch_product(&self) -> Result<Vec<u8>, FetchError> {
        self.client.get(&self.url).await
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Product source that answers with a fixed response.
#[derive(Debug)]
pub struct StaticProductSource {
    response: Result<Vec<u8>, FetchError>,
    calls: Cell<usize>,
}

impl StaticProductSource {
    /// Always answer with `body`.
    pub fn from_body(body: impl Into<Vec<u8>>) -> Self {
        Self {
            response: Ok(body.into()),
            calls: Cell::new(0),
        }
    }

    /// Always fail with `error`.
    pub fn failing(error: FetchError) -> Self {
        Self {
            response: Err(error),
            calls: Cell::new(0),
        }
    }

    /// Number of fetches served so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

#[async_trait(?Send)]
impl ProductSource for StaticProductSource {
    async fn fetch_product(&self) -> Result<Vec<u8>, FetchError> {
        self.calls.set(self.calls.get() + 1);
        self.response.clone()
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_static_source_counts_calls() {
        let source = StaticProductSource::from_body("{}");
        assert_eq!(block_on(source.fetch_product()).unwrap(), b"{}".to_vec());
        assert_eq!(source.calls(), 1);
    }

    #[test]
    fn test_static_source_failure() {
        let source = StaticProductSource::failing(FetchError::Request("offline".into()));
        assert_eq!(
            block_on(source.fetch_product()),
            Err(FetchError::Request("offline".into()))
        );
    }

    #[test]
    fn test_http_source_describes_url() {
        let source = HttpProductSource::new(
            "/products/1.json",
            FetchClient::new(widget_core::SessionId::from_string("s")),
        );
        assert_eq!(source.describe(), "/products/1.json");
    }
}
