//! Records exchanged with the identity service.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

pub mod request;

pub type Address = String;

/// CAIP-2 chain identifier, `<namespace>:<reference>`.
///
/// The value is passed through verbatim. A `*` reference stands for any
/// network of the namespace, e.g. `move-mvmt:*`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(String);

impl ChainId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Chain id matching every network of `namespace`.
    pub fn wildcard(namespace: &str) -> Self {
        Self(format!("{namespace}:*"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ChainId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ChainId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityName {
    pub name: String,
    pub owner: Address,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubIdentity {
    pub name: String,
    pub address: Address,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityAddress {
    pub owner: Address,
    pub resolver_address: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caip2_id: Option<ChainId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_identities: Option<Vec<SubIdentity>>,
}

/// A single metadata entry of an identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TxtRecord {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityMetadata {
    pub metadata: Vec<TxtRecord>,
}

/// Names keyed by the address they were resolved from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchIdentityNames {
    pub data: HashMap<Address, IdentityName>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedAddress {
    pub owner: Address,
    pub resolver_address: Address,
}

/// Resolved addresses, in the same order as the requested names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchIdentityAddresses {
    pub data: Vec<ResolvedAddress>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn chain_id_is_passed_through_verbatim() {
        let chain_id = ChainId::from("move-mvmt:testnet");

        assert_eq!(chain_id.as_str(), "move-mvmt:testnet");
        assert_eq!(chain_id.to_string(), "move-mvmt:testnet");
        assert_eq!(serde_json::to_value(&chain_id).unwrap(), json!("move-mvmt:testnet"));
        assert_eq!(ChainId::wildcard("move-mvmt"), ChainId::from("move-mvmt:*"));
    }

    #[test]
    fn identity_address_with_optional_fields() {
        let value = json!({
            "owner": "0x742d35Cc6634C0532925a3b844Bc454e4438f44e",
            "resolverAddress": "0x01",
            "caip2Id": "move-mvmt:testnet",
            "subIdentities": [{"name": "pay.alice.snow", "address": "0x02"}]
        });

        let identity_address: IdentityAddress = serde_json::from_value(value.clone()).unwrap();

        assert_eq!(
            identity_address,
            IdentityAddress {
                owner: "0x742d35Cc6634C0532925a3b844Bc454e4438f44e".to_string(),
                resolver_address: "0x01".to_string(),
                caip2_id: Some(ChainId::from("move-mvmt:testnet")),
                sub_identities: Some(vec![SubIdentity {
                    name: "pay.alice.snow".to_string(),
                    address: "0x02".to_string(),
                }]),
            }
        );
        assert_eq!(serde_json::to_value(&identity_address).unwrap(), value);
    }

    #[test]
    fn identity_address_without_optional_fields() {
        let value = json!({"owner": "0x01", "resolverAddress": "0x02"});

        let identity_address: IdentityAddress = serde_json::from_value(value.clone()).unwrap();

        assert_eq!(identity_address.caip2_id, None);
        assert_eq!(identity_address.sub_identities, None);
        assert_eq!(serde_json::to_value(&identity_address).unwrap(), value);
    }

    #[test]
    fn batch_identity_names_keyed_by_address() {
        let batch: BatchIdentityNames = serde_json::from_value(json!({
            "data": {
                "0x01": {"name": "alice.snow", "owner": "0x01"},
                "0x02": {"name": "bob.snow", "owner": "0x02"}
            }
        }))
        .unwrap();

        assert_eq!(batch.data.len(), 2);
        assert_eq!(batch.data["0x02"].name, "bob.snow");
    }
}
