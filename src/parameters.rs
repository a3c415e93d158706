use clap::{Args, Subcommand};
use tracing::Level;

use crate::config::{ClientConfig, ConfigError, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

const DEFAULT_TIMEOUT_MS: u64 = DEFAULT_TIMEOUT.as_millis() as u64;

#[derive(Args, Debug, Clone, PartialEq)]
pub struct ConnectionArgs {
    /// Root URL of the identity service
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in milliseconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_MS)]
    timeout_ms: u64,

    /// Log every request issued to stderr
    #[arg(long, short, global = true)]
    verbose: bool,
}

impl ConnectionArgs {
    pub fn client_config(&self) -> Result<ClientConfig, ConfigError> {
        ClientConfig::try_from_parts(&self.base_url, self.timeout_ms)
    }

    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Resolve the identity name owning an address.
    Name {
        /// Wallet address
        #[arg(long)]
        address: String,

        /// CAIP-2 chain id, e.g. `move-mvmt:testnet` or `move-mvmt:*`
        #[arg(long)]
        caip2_id: String,
    },
    /// Resolve the address an identity name points to.
    Address {
        /// Identity name, e.g. `alice.snow`
        #[arg(long)]
        name: String,

        /// CAIP-2 chain id
        #[arg(long)]
        caip2_id: String,
    },
    /// Print the text records of an identity.
    Metadata {
        #[arg(long)]
        name: String,
    },
    /// Resolve the names of several addresses at once.
    Names {
        /// Address to resolve; repeat the flag for each one
        #[arg(long = "address", required = true)]
        addresses: Vec<String>,

        /// CAIP-2 chain id. Every chain is searched when missing.
        #[arg(long)]
        caip2_id: Option<String>,
    },
    /// Resolve the addresses of several names at once.
    Addresses {
        /// Name to resolve; repeat the flag for each one
        #[arg(long = "name", required = true)]
        names: Vec<String>,

        /// CAIP-2 chain id
        #[arg(long)]
        caip2_id: String,
    },
}
