use async_trait::async_trait;
use http::{Request, Response};

#[derive(thiserror::Error, Debug)]
pub enum HttpClientError {
    /// The connection failed before any response was received.
    #[error("HTTP Transport error: `{0}`")]
    TransportError(String),
    /// No response arrived within the configured timeout.
    #[error("request timed out: `{0}`")]
    Timeout(String),
    /// A response arrived but could not be read.
    #[error("invalid http response: `{0}`")]
    InvalidResponse(String),
}

/// An asynchronous trait that defines the internal methods for HTTP clients.
///
/// Non-2xx responses are returned as `Ok`; only failures where no response
/// could be obtained are errors.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Sends a request. The method and url are defined inside the Request.
    async fn send(&self, req: Request<Vec<u8>>) -> Result<Response<Vec<u8>>, HttpClientError>;
}
