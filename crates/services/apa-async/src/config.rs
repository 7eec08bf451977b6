/// Default REST API hostname
pub const APA_DEFAULT_HOST: &str = "api.example.com";
/// Default GraphQL API hostname
pub const GQL_DEFAULT_HOST: &str = "gql.poolplayers.com";

/// Wire protocol used for the resolved base URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Protocol {
    /// Plain HTTP
    Http,
    /// HTTP over TLS
    #[default]
    Https,
}

impl Protocol {
    /// URL scheme string for this protocol
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

/// Treatment of payload keys on successful responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyMode {
    /// Payload keys pass through exactly as the server sent them
    #[default]
    Preserve,
    /// Payload keys are recursively lowercased and the top-level
    /// `copyright` entry is dropped
    Lowercase,
}

/// Configuration for a REST [`Client`](crate::Client)
///
/// The base URL is a pure function of hostname, protocol, version, and
/// base path; it is resolved once at client construction and immutable
/// afterwards.
#[derive(Debug, Clone)]
pub struct ApaConfig {
    hostname: String,
    protocol: Protocol,
    version: Option<String>,
    base_path: Option<String>,
    key_mode: KeyMode,
}

impl Default for ApaConfig {
    fn default() -> Self {
        Self {
            hostname: APA_DEFAULT_HOST.into(),
            protocol: Protocol::Https,
            version: None,
            base_path: None,
            key_mode: KeyMode::Preserve,
        }
    }
}

impl ApaConfig {
    /// Creates a configuration with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API hostname
    #[must_use]
    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = hostname.into();
        self
    }

    /// Sets the wire protocol
    #[must_use]
    pub fn with_protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = protocol;
        self
    }

    /// Sets the API version path segment
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the base path segment inserted before the version
    #[must_use]
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = Some(base_path.into());
        self
    }

    /// Sets the payload key treatment
    #[must_use]
    pub fn with_key_mode(mut self, key_mode: KeyMode) -> Self {
        self.key_mode = key_mode;
        self
    }

    /// Returns the configured payload key treatment
    #[must_use]
    pub fn key_mode(&self) -> KeyMode {
        self.key_mode
    }

    /// Resolves the fixed base URL for this configuration
    ///
    /// Segment precedence: base path and version are each included only
    /// when set, base path first. The result always ends in `/`.
    #[must_use]
    pub fn base_url(&self) -> String {
        let scheme = self.protocol.as_str();
        let hostname = &self.hostname;
        match (&self.base_path, &self.version) {
            (Some(base), Some(ver)) => format!("{scheme}://{hostname}/{base}/{ver}/"),
            (Some(base), None) => format!("{scheme}://{hostname}/{base}/"),
            (None, Some(ver)) => format!("{scheme}://{hostname}/{ver}/"),
            (None, None) => format!("{scheme}://{hostname}/"),
        }
    }
}
