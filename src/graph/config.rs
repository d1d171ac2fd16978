use std::time::Duration;

use url::Url;

use crate::error::{graph::GraphError, Error};

/// Production Graph API host.
pub const DEFAULT_GRAPH_URL: &str = "https://graph.facebook.com";

/// User agent sent when the caller doesn't provide one.
pub const DEFAULT_USER_AGENT: &str = concat!("fb-test-users/", env!("CARGO_PKG_VERSION"));

/// Where and how to reach the Graph API.
///
/// Built with [`GraphConfig::builder`]; the default points at the unversioned production
/// host, which Facebook routes to the oldest version still available to the application.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    graph_url: String,
    version: Option<String>,
    user_agent: String,
    timeout: Option<Duration>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            graph_url: DEFAULT_GRAPH_URL.to_string(),
            version: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

impl GraphConfig {
    pub fn builder() -> GraphConfigBuilder {
        GraphConfigBuilder::default()
    }

    pub fn graph_url(&self) -> &str {
        &self.graph_url
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Full URL for a Graph path such as `me` or `1234/accounts/test-users`.
    pub fn endpoint(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');

        match &self.version {
            Some(version) => format!("{}/{}/{}", self.graph_url, version, path),
            None => format!("{}/{}", self.graph_url, path),
        }
    }
}

#[derive(Debug, Default)]
pub struct GraphConfigBuilder {
    graph_url: Option<String>,
    version: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl GraphConfigBuilder {
    /// Overrides the Graph host, e.g. to point at a mock server in tests.
    pub fn graph_url(mut self, graph_url: &str) -> Self {
        self.graph_url = Some(graph_url.to_string());
        self
    }

    /// Pins requests to an API version such as `v19.0`.
    pub fn version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validates the configured values.
    ///
    /// # Returns
    /// - `Ok(GraphConfig)` - Base URL parsed as http(s) and version well-formed
    /// - `Err(Error::GraphError(GraphError::InvalidBaseUrl))` - Base URL unparsable or not http(s)
    /// - `Err(Error::GraphError(GraphError::InvalidVersion))` - Version not of the form `vN.N`
    pub fn build(self) -> Result<GraphConfig, Error> {
        let graph_url = match self.graph_url {
            Some(raw) => {
                let parsed =
                    Url::parse(&raw).map_err(|_| GraphError::InvalidBaseUrl(raw.clone()))?;
                if !matches!(parsed.scheme(), "http" | "https") || parsed.cannot_be_a_base() {
                    return Err(GraphError::InvalidBaseUrl(raw).into());
                }
                raw.trim_end_matches('/').to_string()
            }
            None => DEFAULT_GRAPH_URL.to_string(),
        };

        if let Some(version) = &self.version {
            if !is_valid_version(version) {
                return Err(GraphError::InvalidVersion(version.clone()).into());
            }
        }

        Ok(GraphConfig {
            graph_url,
            version: self.version,
            user_agent: self
                .user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            timeout: self.timeout,
        })
    }
}

fn is_valid_version(version: &str) -> bool {
    let is_number = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

    let Some(rest) = version.strip_prefix('v') else {
        return false;
    };
    let mut parts = rest.split('.');

    matches!(
        (parts.next(), parts.next(), parts.next()),
        (Some(major), Some(minor), None) if is_number(major) && is_number(minor)
    )
}
