use http::{Response, StatusCode};
use hyper::ext::ReasonPhrase;
use thiserror::Error;

use crate::http_client::HttpClientError;

const DEFAULT_ERROR_MESSAGE: &str = "An error occurred";
const ERR_BAD_REQUEST: &str = "ERR_BAD_REQUEST";
const ERR_BAD_RESPONSE: &str = "ERR_BAD_RESPONSE";

/// The identity service was reached and answered with a non-2xx status.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub status: Option<u16>,
    pub code: Option<String>,
}

impl ApiError {
    /// Builds the error from the status and the status text the server sent.
    ///
    /// A missing `reason` means the server sent the canonical text of `status`.
    pub fn new(status: StatusCode, reason: Option<&ReasonPhrase>) -> Self {
        let code = match status.as_u16() {
            400..=499 => Some(ERR_BAD_REQUEST.to_string()),
            500..=599 => Some(ERR_BAD_RESPONSE.to_string()),
            _ => None,
        };
        let message = match reason {
            Some(reason) => String::from_utf8_lossy(reason.as_bytes()).into_owned(),
            None => status.canonical_reason().unwrap_or_default().to_string(),
        };
        Self {
            message: if message.is_empty() {
                DEFAULT_ERROR_MESSAGE.to_string()
            } else {
                message
            },
            status: Some(status.as_u16()),
            code,
        }
    }
}

impl From<StatusCode> for ApiError {
    fn from(status: StatusCode) -> Self {
        Self::new(status, None)
    }
}

impl<B> From<&Response<B>> for ApiError {
    fn from(response: &Response<B>) -> Self {
        Self::new(response.status(), response.extensions().get::<ReasonPhrase>())
    }
}

#[derive(Debug, Error)]
pub enum IdentityClientError {
    #[error("identity service error: `{0}`")]
    Api(#[from] ApiError),
    /// No response was obtained. The transport failure is kept as it was raised.
    #[error(transparent)]
    Transport(#[from] HttpClientError),
    #[error("error decoding the response payload: `{0}`")]
    Decode(String),
    #[error("error encoding the request: `{0}`")]
    Encode(String),
}

#[cfg(test)]
mod tests {
    use http::{Response, StatusCode};
    use hyper::ext::ReasonPhrase;
    use rstest::rstest;

    use super::ApiError;

    #[rstest]
    #[case(StatusCode::NOT_FOUND, "Not Found", Some("ERR_BAD_REQUEST"))]
    #[case(StatusCode::BAD_REQUEST, "Bad Request", Some("ERR_BAD_REQUEST"))]
    #[case(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some("ERR_BAD_RESPONSE"))]
    #[case(StatusCode::from_u16(599).unwrap(), "An error occurred", Some("ERR_BAD_RESPONSE"))]
    #[case(StatusCode::from_u16(799).unwrap(), "An error occurred", None)]
    #[case(StatusCode::MOVED_PERMANENTLY, "Moved Permanently", None)]
    fn api_error_from_status(
        #[case] status: StatusCode,
        #[case] message: &str,
        #[case] code: Option<&str>,
    ) {
        let error = ApiError::from(status);

        assert_eq!(error.message, message);
        assert_eq!(error.status, Some(status.as_u16()));
        assert_eq!(error.code.as_deref(), code);
        assert_eq!(error.to_string(), message);
    }

    #[rstest]
    #[case(Some(b"Identity Missing".as_slice()), "Identity Missing")]
    #[case(Some(b"".as_slice()), "An error occurred")]
    #[case(None, "Not Found")]
    fn api_error_uses_status_text_sent_by_server(
        #[case] reason: Option<&'static [u8]>,
        #[case] message: &str,
    ) {
        let mut builder = Response::builder().status(StatusCode::NOT_FOUND);
        if let Some(reason) = reason {
            builder = builder.extension(ReasonPhrase::from_static(reason));
        }
        let response = builder.body(Vec::<u8>::new()).unwrap();

        let error = ApiError::from(&response);

        assert_eq!(error.message, message);
        assert_eq!(error.status, Some(404));
        assert_eq!(error.code.as_deref(), Some("ERR_BAD_REQUEST"));
    }
}
