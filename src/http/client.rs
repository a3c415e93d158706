use crate::http::config::HttpConfig;
use crate::http_client::{HttpClient as SnowstormHttpClient, HttpClientError};
use async_trait::async_trait;
use http::{Request, Response};
use hyper::ext::ReasonPhrase;
use reqwest::{Client, Response as ReqwestResponse};
use tracing::trace;

/// reqwest backed implementation of the [`SnowstormHttpClient`] trait.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Builds a reqwest client according to the provided configuration.
    pub fn new(config: &HttpConfig) -> Result<Self, HttpBuildError> {
        let builder = Client::builder()
            .use_rustls_tls()
            .tls_built_in_native_certs(true)
            .timeout(config.timeout)
            .connect_timeout(config.conn_timeout);

        let client = builder
            .build()
            .map_err(|err| HttpBuildError::ClientBuilder(err.to_string()))?;

        Ok(Self { client })
    }

    async fn send(
        &self,
        request: Request<Vec<u8>>,
    ) -> Result<Response<Vec<u8>>, HttpResponseError> {
        let (parts, body) = request.into_parts();
        let req = self
            .client
            .request(parts.method, parts.uri.to_string().as_str())
            .headers(parts.headers)
            .body(body);

        let res = req.send().await.map_err(|err| {
            if err.is_timeout() {
                HttpResponseError::Timeout(err.to_string())
            } else {
                HttpResponseError::TransportError(err.to_string())
            }
        })?;

        try_build_response(res).await
    }
}

async fn try_build_response(
    res: ReqwestResponse,
) -> Result<Response<Vec<u8>>, HttpResponseError> {
    let status = res.status();
    let version = res.version();
    let headers = res.headers().clone();

    // Only present when the server sent a non-canonical status text.
    let reason = res.extensions().get::<ReasonPhrase>().cloned();

    let body: Vec<u8> = res
        .bytes()
        .await
        .map_err(|err| {
            if err.is_timeout() {
                HttpResponseError::Timeout(err.to_string())
            } else {
                HttpResponseError::ReadingResponse(err.to_string())
            }
        })?
        .into();
    trace!(%status, body_len = body.len(), "response received");

    let mut response_builder = http::Response::builder().status(status).version(version);
    if let Some(response_headers) = response_builder.headers_mut() {
        *response_headers = headers;
    }

    let response_builder = if let Some(reason) = reason {
        response_builder.extension(reason)
    } else {
        response_builder
    };

    let response = response_builder
        .body(body)
        .map_err(|err| HttpResponseError::BuildingResponse(err.to_string()))?;

    Ok(response)
}

#[async_trait]
impl SnowstormHttpClient for HttpClient {
    async fn send(&self, req: Request<Vec<u8>>) -> Result<Response<Vec<u8>>, HttpClientError> {
        let response = self.send(req).await?;

        Ok(response)
    }
}

impl From<HttpResponseError> for HttpClientError {
    fn from(err: HttpResponseError) -> Self {
        match err {
            HttpResponseError::TransportError(msg) => HttpClientError::TransportError(msg),
            HttpResponseError::Timeout(msg) => HttpClientError::Timeout(msg),
            HttpResponseError::BuildingResponse(msg) | HttpResponseError::ReadingResponse(msg) => {
                HttpClientError::InvalidResponse(msg)
            }
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum HttpBuildError {
    #[error("could not build the http client: {0}")]
    ClientBuilder(String),
}

#[derive(thiserror::Error, Debug)]
enum HttpResponseError {
    #[error("could not read response body: {0}")]
    ReadingResponse(String),
    #[error("could not build response: {0}")]
    BuildingResponse(String),
    #[error("http transport error: `{0}`")]
    TransportError(String),
    #[error("timed out: `{0}`")]
    Timeout(String),
}
