use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::client::{IdentityClient, IdentityClientError};
use crate::http_client::HttpClient;
use crate::identity::ChainId;
use crate::identity::request::{GetIdentityAddressesRequest, GetIdentityNamesRequest};
use crate::parameters::Commands;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error(transparent)]
    Client(#[from] IdentityClientError),
    #[error("rendering output: `{0}`")]
    Output(String),
}

/// Runs one command line operation against the identity service.
pub struct ResolveCommand<C>
where
    C: HttpClient,
{
    client: IdentityClient<C>,
}

impl<C> ResolveCommand<C>
where
    C: HttpClient,
{
    pub fn new(client: IdentityClient<C>) -> Self {
        Self { client }
    }

    pub async fn execute(&self, command: Commands) -> Result<Value, ResolveError> {
        match command {
            Commands::Name { address, caip2_id } => to_output(
                self.client
                    .get_identity_name(&address, &ChainId::from(caip2_id))
                    .await?,
            ),
            Commands::Address { name, caip2_id } => to_output(
                self.client
                    .get_identity_address(&name, &ChainId::from(caip2_id))
                    .await?,
            ),
            Commands::Metadata { name } => {
                to_output(self.client.get_identity_metadata(&name).await?)
            }
            Commands::Names {
                addresses,
                caip2_id,
            } => {
                let request = GetIdentityNamesRequest {
                    addresses,
                    caip2_id: caip2_id.map(ChainId::from),
                };
                to_output(self.client.get_identity_names(&request).await?)
            }
            Commands::Addresses { names, caip2_id } => {
                let request = GetIdentityAddressesRequest::new(names, ChainId::from(caip2_id));
                to_output(self.client.get_identity_addresses(&request).await?)
            }
        }
    }
}

fn to_output<T: Serialize>(result: T) -> Result<Value, ResolveError> {
    serde_json::to_value(result).map_err(|e| ResolveError::Output(e.to_string()))
}
