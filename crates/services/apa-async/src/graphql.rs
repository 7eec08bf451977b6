use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use crate::{
    client::Client,
    config::{ApaConfig, GQL_DEFAULT_HOST, Protocol},
    error::ApaError,
    types::{ApiResult, GraphqlRequest},
};

/// Environment variable consulted for the default refresh token
pub const REFRESH_TOKEN_ENV: &str = "APA_REFRESH_TOKEN";

/// Relative path every GraphQL operation is POSTed to
const GRAPHQL_ENDPOINT: &str = "graphql";

const GENERATE_ACCESS_TOKEN_MUTATION: &str = "\
mutation GenerateAccessTokenMutation($refreshToken: String!) {
  generateAccessToken(refreshToken: $refreshToken) {
    accessToken
    __typename
  }
}";

/// GraphQL client for the league API
///
/// Composes one REST [`Client`] for all network I/O and adds the GraphQL
/// wire shape plus the token-refresh mutation on top. Queries and
/// mutations behave identically on the wire; the two methods document
/// intent at the call site.
#[derive(Debug, Clone)]
pub struct GraphqlClient {
    rest: Client,
    refresh_token: Option<SecretString>,
}

impl Default for GraphqlClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphqlClient {
    /// Creates a client against the default GraphQL host
    ///
    /// The default refresh token is captured from `APA_REFRESH_TOKEN` at
    /// construction; [`with_refresh_token`](Self::with_refresh_token)
    /// overrides it.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ApaConfig::new().with_hostname(GQL_DEFAULT_HOST))
    }

    /// Creates a client with a custom adapter configuration
    #[must_use]
    pub fn with_config(config: ApaConfig) -> Self {
        let refresh_token = std::env::var(REFRESH_TOKEN_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .map(SecretString::from);

        Self {
            rest: Client::with_config(config),
            refresh_token,
        }
    }

    /// Overrides the default refresh token
    #[must_use]
    pub fn with_refresh_token(mut self, token: impl Into<String>) -> Self {
        self.refresh_token = Some(SecretString::from(token.into()));
        self
    }

    /// Returns the composed REST client
    #[must_use]
    pub fn rest(&self) -> &Client {
        &self.rest
    }

    /// Executes a GraphQL query
    pub async fn query(
        &self,
        query: &str,
        variables: Option<Value>,
        operation_name: Option<&str>,
    ) -> Result<ApiResult, ApaError> {
        self.run(query, variables, operation_name).await
    }

    /// Executes a GraphQL mutation
    ///
    /// Identical to [`query`](Self::query) on the wire.
    pub async fn mutation(
        &self,
        mutation: &str,
        variables: Option<Value>,
        operation_name: Option<&str>,
    ) -> Result<ApiResult, ApaError> {
        self.run(mutation, variables, operation_name).await
    }

    async fn run(
        &self,
        document: &str,
        variables: Option<Value>,
        operation_name: Option<&str>,
    ) -> Result<ApiResult, ApaError> {
        let body = GraphqlRequest::new(document, variables, operation_name);
        self.rest.post(GRAPHQL_ENDPOINT, &body).await
    }

    /// Exchanges a refresh token for an access token
    ///
    /// Resolves the token from the explicit argument, falling back to the
    /// one captured from `APA_REFRESH_TOKEN` at construction.
    ///
    /// # Errors
    ///
    /// - [`ApaError::MissingCredential`] when no token is available
    /// - [`ApaError::TokenRequestFailed`] when the mutation result is not
    ///   exactly 200
    /// - [`ApaError::TokenExtractionFailed`] when the response shape does
    ///   not contain a non-empty token
    /// - transport, decode, and server errors from the underlying call
    pub async fn generate_access_token(
        &self,
        refresh_token: Option<&str>,
    ) -> Result<String, ApaError> {
        let token = match refresh_token {
            Some(token) => token.to_owned(),
            None => self
                .refresh_token
                .as_ref()
                .map(|secret| secret.expose_secret().to_owned())
                .ok_or_else(|| {
                    ApaError::MissingCredential(format!(
                        "No refresh token provided and {REFRESH_TOKEN_ENV} \
                         environment variable not set"
                    ))
                })?,
        };

        let variables = serde_json::json!({ "refreshToken": token });
        let result = self
            .mutation(GENERATE_ACCESS_TOKEN_MUTATION, Some(variables), None)
            .await?;

        if result.status_code != 200 {
            return Err(ApaError::TokenRequestFailed(result.message));
        }

        result.payload["data"]["generateAccessToken"]["accessToken"]
            .as_str()
            .filter(|token| !token.is_empty())
            .map(str::to_owned)
            .ok_or(ApaError::TokenExtractionFailed)
    }

    /// Constructs a client and immediately exchanges a refresh token
    ///
    /// Convenience for one-shot token fetches where no client instance is
    /// kept around.
    pub async fn fetch_access_token(
        hostname: impl Into<String>,
        version: impl Into<String>,
        protocol: Protocol,
        refresh_token: Option<&str>,
    ) -> Result<String, ApaError> {
        let config = ApaConfig::new()
            .with_hostname(hostname)
            .with_version(version)
            .with_protocol(protocol);
        Self::with_config(config)
            .generate_access_token(refresh_token)
            .await
    }
}
