use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Errors reported by, or while talking to, the Graph API.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Graph answered with its error envelope.
    ///
    /// The envelope may arrive on a non-2xx status or, for some legacy endpoints, inside
    /// a 200 response; `status` records whichever was received.
    #[error("Graph API error ({kind}, code {code:?}, status {status}): {message}")]
    Api {
        status: StatusCode,
        message: String,
        kind: String,
        code: Option<i64>,
        subcode: Option<i64>,
        fbtrace_id: Option<String>,
    },
    #[error("Graph API returned unexpected status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },
    /// Graph accepted the request but reported the write as unsuccessful (`false`).
    #[error("Graph API reported failure for {operation} on {path}")]
    OperationFailed { operation: String, path: String },
    #[error("Test user {0} has no access token; it has likely not installed the application")]
    MissingAccessToken(String),
    #[error("No test user with id {0} belongs to this application")]
    UnknownTestUser(String),
    #[error("Invalid Graph API base URL {0:?}")]
    InvalidBaseUrl(String),
    #[error("Invalid Graph API version {0:?}, expected a value such as \"v19.0\"")]
    InvalidVersion(String),
}

impl GraphError {
    /// Whether this is an `OAuthException`, i.e. the token was invalid, expired or lacked
    /// the permission required for the call.
    pub fn is_oauth(&self) -> bool {
        matches!(self, Self::Api { kind, .. } if kind == "OAuthException")
    }

    /// Builds an [`GraphError::Api`] from a decoded envelope.
    pub(crate) fn from_envelope(status: StatusCode, envelope: GraphErrorEnvelope) -> Self {
        let body = envelope.error;

        Self::Api {
            status,
            message: body.message,
            kind: body.kind,
            code: body.code,
            subcode: body.error_subcode,
            fbtrace_id: body.fbtrace_id,
        }
    }
}

/// Wire shape of `{"error": {...}}`.
#[derive(Deserialize, Debug)]
pub(crate) struct GraphErrorEnvelope {
    pub error: GraphErrorBody,
}

#[derive(Deserialize, Debug)]
pub(crate) struct GraphErrorBody {
    #[serde(default)]
    pub message: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub code: Option<i64>,
    pub error_subcode: Option<i64>,
    pub fbtrace_id: Option<String>,
}
