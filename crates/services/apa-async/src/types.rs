use serde::Serialize;
use serde_json::Value;

/// Normalized outcome of one completed REST or GraphQL call
///
/// Created once per completed call and never mutated afterwards. A 4xx
/// response produces a result with that status and an empty payload; the
/// decoded body is discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResult {
    /// HTTP status code of the response
    pub status_code: u16,
    /// Reason phrase reported with the status line
    pub message: String,
    /// Decoded JSON body; an empty object when the call carries none
    pub payload: Value,
}

impl ApiResult {
    /// Creates a result with an empty payload
    #[must_use]
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
            payload: Value::Object(serde_json::Map::new()),
        }
    }

    /// Creates a result carrying a decoded payload
    #[must_use]
    pub fn with_payload(status_code: u16, message: impl Into<String>, payload: Value) -> Self {
        Self {
            status_code,
            message: message.into(),
            payload,
        }
    }
}

/// Request body for one GraphQL call
///
/// Serializes to the standard GraphQL wire shape: `query` and `variables`
/// are always present, `operationName` only when set.
#[derive(Debug, Clone, Serialize)]
pub struct GraphqlRequest {
    /// Query or mutation document
    pub query: String,
    /// Operation variables; an empty object when none are supplied
    pub variables: Value,
    /// Operation name, omitted from the wire when unset
    #[serde(rename = "operationName", skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
}

impl GraphqlRequest {
    /// Builds a request body from a document and optional variables/name
    #[must_use]
    pub fn new(
        document: impl Into<String>,
        variables: Option<Value>,
        operation_name: Option<&str>,
    ) -> Self {
        Self {
            query: document.into(),
            variables: variables.unwrap_or_else(|| Value::Object(serde_json::Map::new())),
            operation_name: operation_name.map(str::to_owned),
        }
    }
}
