//! Graph API client.
//!
//! A thin HTTP client over `reqwest` that knows three Graph conventions: the access token
//! travels as the `access_token` parameter, write parameters are form encoded, and failures
//! come back as a `{"error": {...}}` envelope, sometimes even with a 200 status.

pub mod config;
pub mod params;


use std::{fmt, sync::Arc};

use reqwest::{Method, StatusCode};
use serde::{de::DeserializeOwned, Deserialize};
use tracing::{debug, warn};

use crate::error::{
    graph::{GraphError, GraphErrorEnvelope},
    Error,
};

pub use config::GraphConfig;
pub use params::Params;

/// Client for the Facebook Graph API.
///
/// Cloning is cheap: the connection pool and configuration are shared. Use
/// [`GraphClient::with_access_token`] to act as a different user or application over the
/// same pool.
#[derive(Clone)]
pub struct GraphClient {
    http: reqwest::Client,
    config: Arc<GraphConfig>,
    access_token: Option<String>,
}

impl fmt::Debug for GraphClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphClient")
            .field("config", &self.config)
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl GraphClient {
    pub fn builder() -> GraphClientBuilder {
        GraphClientBuilder::default()
    }

    /// Returns a client sharing this one's pool and config, authorised by `access_token`.
    pub fn with_access_token(&self, access_token: impl Into<String>) -> Self {
        Self {
            http: self.http.clone(),
            config: Arc::clone(&self.config),
            access_token: Some(access_token.into()),
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, params: &Params) -> Result<T, Error> {
        self.send(Method::GET, path, params).await
    }

    pub async fn post<T: DeserializeOwned>(&self, path: &str, params: &Params) -> Result<T, Error> {
        self.send(Method::POST, path, params).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &Params,
    ) -> Result<T, Error> {
        self.send(Method::DELETE, path, params).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: &Params,
    ) -> Result<T, Error> {
        let url = self.config.endpoint(path);

        let mut pairs: Vec<(&str, &str)> = params.iter().collect();
        if let Some(token) = &self.access_token {
            pairs.push(("access_token", token));
        }

        debug!(%method, path, "Sending Graph API request");

        let request = self.http.request(method.clone(), &url);
        let request = if method == Method::POST {
            request.form(&pairs)
        } else {
            request.query(&pairs)
        };

        // The URL carries the access token for GET/DELETE; keep it out of error messages.
        let response = request.send().await.map_err(reqwest::Error::without_url)?;
        let status = response.status();
        let body = response.text().await.map_err(reqwest::Error::without_url)?;

        decode(status, &body).inspect_err(|err| {
            if let Error::GraphError(graph_err) = err {
                warn!(%method, path, "Graph API request failed: {}", graph_err);
            }
        })
    }
}

/// Turns a raw Graph response into `T` or the error it carries.
fn decode<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, Error> {
    if !status.is_success() {
        let error = match serde_json::from_str::<GraphErrorEnvelope>(body) {
            Ok(envelope) => GraphError::from_envelope(status, envelope),
            Err(_) => GraphError::UnexpectedStatus {
                status,
                body: body.to_string(),
            },
        };

        return Err(error.into());
    }

    let value: serde_json::Value = serde_json::from_str(body)?;

    if value.get("error").is_some_and(|e| e.is_object()) {
        let envelope: GraphErrorEnvelope = serde_json::from_value(value)?;
        return Err(GraphError::from_envelope(status, envelope).into());
    }

    Ok(serde_json::from_value(value)?)
}

/// Result of a Graph write such as a delete or friend request.
///
/// Graph answers these with a bare `true`/`false` or, on newer versions,
/// `{"success": true}`.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(untagged)]
pub enum Confirmation {
    Bool(bool),
    Success { success: bool },
}

impl Confirmation {
    pub fn is_success(self) -> bool {
        match self {
            Self::Bool(success) | Self::Success { success } => success,
        }
    }

    /// Converts a negative confirmation into [`GraphError::OperationFailed`].
    pub fn ensure(self, operation: &str, path: &str) -> Result<(), GraphError> {
        if self.is_success() {
            Ok(())
        } else {
            Err(GraphError::OperationFailed {
                operation: operation.to_string(),
                path: path.to_string(),
            })
        }
    }
}

#[derive(Debug, Default)]
pub struct GraphClientBuilder {
    config: Option<GraphConfig>,
    access_token: Option<String>,
}

impl GraphClientBuilder {
    pub fn config(mut self, config: GraphConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Token used for every request made by the built client.
    pub fn access_token(mut self, access_token: &str) -> Self {
        self.access_token = Some(access_token.to_string());
        self
    }

    pub fn build(self) -> Result<GraphClient, Error> {
        let config = self.config.unwrap_or_default();

        let mut http = reqwest::Client::builder().user_agent(config.user_agent());
        if let Some(timeout) = config.timeout() {
            http = http.timeout(timeout);
        }

        Ok(GraphClient {
            http: http.build()?,
            config: Arc::new(config),
            access_token: self.access_token,
        })
    }
}
