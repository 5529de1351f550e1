use async_trait::async_trait;
use url::Url;

pub const HTTP_STATUS_OK: u16 = 200;

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: HTTP_STATUS_OK,
            body: body.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Request was cancelled")]
    Cancelled,
    #[error("Request timed out")]
    Timeout,
    #[error("Request failed: {0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Outbound HTTP used by the search engine.
///
/// Dropping the returned future cancels the request.
#[async_trait]
pub trait HttpTransport {
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError>;
}
