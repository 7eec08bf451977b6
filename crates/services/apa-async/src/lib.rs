//! Async client for the APA league REST and GraphQL APIs.
//!
//! The REST [`Client`] issues GET/POST calls against a base URL resolved
//! once from an [`ApaConfig`] and normalizes every completed call into an
//! [`ApiResult`] holding the status code, reason phrase, and decoded JSON
//! payload. Client-error statuses (4xx) come back as ordinary results with
//! an empty payload; server errors (5xx) and transport or decode failures
//! surface as [`ApaError`].
//!
//! The [`GraphqlClient`] composes a REST client, POSTs query/mutation
//! documents to the fixed `graphql` path, and exchanges refresh tokens for
//! access tokens.
//!
//! ## Quick Start
//!
//! ```no_run
//! use apa_async::{ApaConfig, Client, GraphqlClient};
//!
//! # async fn example() -> Result<(), apa_async::ApaError> {
//! let client = Client::with_config(ApaConfig::new().with_version("v1"));
//! let result = client.get("teams").await?;
//! println!("{}: {}", result.status_code, result.message);
//!
//! let gql = GraphqlClient::new();
//! let token = gql.generate_access_token(Some("my-refresh-token")).await?;
//! # Ok(())
//! # }
//! ```

/// HTTP client implementation
pub mod client;
/// Configuration types for the client
pub mod config;
/// Error types
pub mod error;
/// GraphQL layer built on top of the REST client
pub mod graphql;
/// Test support utilities (for use in tests)
#[doc(hidden)]
pub mod test_support;
/// Payload key normalization
pub mod transform;
/// Request and response types
pub mod types;

pub use crate::client::Client;
pub use crate::config::{ApaConfig, KeyMode, Protocol};
pub use crate::error::ApaError;
pub use crate::graphql::GraphqlClient;
pub use crate::types::{ApiResult, GraphqlRequest};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{ApaConfig, ApiResult, Client, GraphqlClient, KeyMode, Protocol};
}
