use serde::{Deserialize, Serialize};

use super::{Address, ChainId};

/// Body of the batch reverse lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetIdentityNamesRequest {
    pub addresses: Vec<Address>,
    /// Left out of the body when unset; the service then looks on every chain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caip2_id: Option<ChainId>,
}

impl GetIdentityNamesRequest {
    pub fn new(addresses: Vec<Address>) -> Self {
        Self {
            addresses,
            caip2_id: None,
        }
    }

    pub fn with_chain_id(self, caip2_id: ChainId) -> Self {
        Self {
            caip2_id: Some(caip2_id),
            ..self
        }
    }
}

/// Body of the batch forward lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetIdentityAddressesRequest {
    pub names: Vec<String>,
    pub caip2_id: ChainId,
}

impl GetIdentityAddressesRequest {
    pub fn new(names: Vec<String>, caip2_id: ChainId) -> Self {
        Self { names, caip2_id }
    }
}
