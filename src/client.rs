use http::header::CONTENT_TYPE;
use http::{Method, Request, Response};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::http::client::{HttpBuildError, HttpClient as ReqwestHttpClient};
use crate::http::config::HttpConfig;
use crate::http_client::HttpClient;
use crate::identity::request::{GetIdentityAddressesRequest, GetIdentityNamesRequest};
use crate::identity::{
    BatchIdentityAddresses, BatchIdentityNames, ChainId, IdentityAddress, IdentityMetadata,
    IdentityName,
};

pub use error::{ApiError, IdentityClientError};

mod error;

const PUBLIC_IDENTITY_SEGMENT: &str = "public-identity";

/// Client of the Snowstorm identity service.
///
/// Each operation issues exactly one request. Failures are never retried and
/// nothing is kept between calls.
#[derive(Debug, Clone)]
pub struct IdentityClient<C> {
    http_client: C,
    config: ClientConfig,
}

impl IdentityClient<ReqwestHttpClient> {
    /// Prepares a client backed by reqwest. No connection is opened here.
    pub fn new(config: ClientConfig) -> Result<Self, HttpBuildError> {
        let http_client = ReqwestHttpClient::new(&HttpConfig::from(&config))?;
        Ok(Self::with_http_client(config, http_client))
    }

    pub fn try_default() -> Result<Self, HttpBuildError> {
        Self::new(ClientConfig::default())
    }
}

impl<C> IdentityClient<C> {
    pub fn with_http_client(config: ClientConfig, http_client: C) -> Self {
        Self {
            http_client,
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn endpoint(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<Url, IdentityClientError> {
        let mut url = self.config.base_url().clone();
        url.path_segments_mut()
            .map_err(|_| {
                IdentityClientError::Encode(format!(
                    "base url `{}` cannot be a base",
                    self.config.base_url()
                ))
            })?
            .pop_if_empty()
            .push(PUBLIC_IDENTITY_SEGMENT)
            .extend(segments);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }
}

impl<C> IdentityClient<C>
where
    C: HttpClient,
{
    /// Reverse lookup of the identity name owning `address` on `caip2_id`.
    pub async fn get_identity_name(
        &self,
        address: &str,
        caip2_id: &ChainId,
    ) -> Result<IdentityName, IdentityClientError> {
        let url = self.endpoint(
            &["name"],
            &[("address", address), ("caip2Id", caip2_id.as_str())],
        )?;
        self.execute(Method::GET, url, Vec::new()).await
    }

    /// Forward lookup of the address `name` resolves to on `caip2_id`.
    pub async fn get_identity_address(
        &self,
        name: &str,
        caip2_id: &ChainId,
    ) -> Result<IdentityAddress, IdentityClientError> {
        let url = self.endpoint(
            &["address"],
            &[("name", name), ("caip2Id", caip2_id.as_str())],
        )?;
        self.execute(Method::GET, url, Vec::new()).await
    }

    /// Text records attached to `name`. Not scoped to a chain.
    ///
    /// `name` is sent as a single path segment: characters such as `/`, `%`,
    /// `?` or `#` are percent-encoded instead of changing the request path.
    pub async fn get_identity_metadata(
        &self,
        name: &str,
    ) -> Result<IdentityMetadata, IdentityClientError> {
        let url = self.endpoint(&["metadata", name], &[])?;
        self.execute(Method::GET, url, Vec::new()).await
    }

    /// Batch reverse lookup, keyed by address.
    pub async fn get_identity_names(
        &self,
        params: &GetIdentityNamesRequest,
    ) -> Result<BatchIdentityNames, IdentityClientError> {
        let url = self.endpoint(&["names"], &[])?;
        self.execute(Method::POST, url, encode(params)?).await
    }

    /// Batch forward lookup, in the order of the requested names.
    pub async fn get_identity_addresses(
        &self,
        params: &GetIdentityAddressesRequest,
    ) -> Result<BatchIdentityAddresses, IdentityClientError> {
        let url = self.endpoint(&["addresses"], &[])?;
        self.execute(Method::POST, url, encode(params)?).await
    }

    async fn execute<T>(
        &self,
        method: Method,
        url: Url,
        body: Vec<u8>,
    ) -> Result<T, IdentityClientError>
    where
        T: DeserializeOwned,
    {
        debug!(%method, %url, "sending identity service request");
        let request = build_request(method, &url, body)?;

        let response = self.http_client.send(request).await.inspect_err(|err| {
            debug!(%url, error = %err, "no response from identity service");
        })?;
        let response = normalize_response(response)?;

        serde_json::from_slice(response.body()).map_err(|e| {
            IdentityClientError::Decode(format!(
                "{e}. Response body: {}",
                String::from_utf8_lossy(response.body())
            ))
        })
    }
}

fn build_request(
    method: Method,
    url: &Url,
    body: Vec<u8>,
) -> Result<Request<Vec<u8>>, IdentityClientError> {
    http::Request::builder()
        .uri(url.as_str())
        .method(method)
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .map_err(|e| IdentityClientError::Encode(format!("Failed to build request: {e}")))
}

fn encode<T: serde::Serialize>(params: &T) -> Result<Vec<u8>, IdentityClientError> {
    serde_json::to_vec(params)
        .map_err(|e| IdentityClientError::Encode(format!("Failed to encode JSON: {e}")))
}

/// Turns every non-2xx response into an [`ApiError`]; successful ones pass unchanged.
fn normalize_response(response: Response<Vec<u8>>) -> Result<Response<Vec<u8>>, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    debug!(%status, "identity service answered with an unsuccessful status");
    Err(ApiError::from(&response))
}
