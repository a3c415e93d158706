//! Client for the Snowstorm identity API, resolving identity names to
//! blockchain addresses and back across CAIP-2 identified chains.

pub mod client;
pub mod commands;
pub mod config;
pub mod http;
pub mod http_client;
pub mod identity;
pub mod parameters;

pub use client::{ApiError, IdentityClient, IdentityClientError};
pub use config::ClientConfig;
pub use identity::ChainId;
