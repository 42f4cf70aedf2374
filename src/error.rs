//! Client-side error types shared across the crate.

use crate::validation::FieldErrors;

/// Errors from talking to the hospital backend or preparing a request.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Backend rejected the bearer token (401/403). The local session has
    /// already been cleared by the time this is returned.
    #[error("Authorization denied by server (status {status})")]
    AuthorizationDenied { status: u16 },

    /// Login attempt for an account still waiting on admin approval.
    #[error("Account not approved. Contact admin.")]
    AccountNotApproved,

    /// Backend returned a non-success status outside the auth-denied pair.
    /// `message` carries the backend's `{"message": ...}` body when present.
    #[error("Request failed with status {status}: {}", message.as_deref().unwrap_or("no detail"))]
    Api { status: u16, message: Option<String> },

    /// Could not reach the backend at all.
    #[error("Cannot connect to server at {0}")]
    Connection(String),

    #[error("Request timed out")]
    Timeout,

    #[error("HTTP client error: {0}")]
    Http(String),

    /// Backend answered 2xx but the body was not what the client needs
    /// (e.g. a login response without a token).
    #[error("Invalid server response: {0}")]
    InvalidServerResponse(String),

    #[error("Failed to parse server response: {0}")]
    ResponseParsing(String),

    /// Client-side required-field validation failed; no request was sent.
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Unrecognized {field} value: {value:?}")]
    InvalidEnum { field: String, value: String },

    #[error("Credential store error: {0}")]
    CredentialStore(String),
}

impl ClientError {
    /// Whether this error cleared the local session as a side effect.
    pub fn is_authorization_denied(&self) -> bool {
        matches!(self, Self::AuthorizationDenied { .. })
    }
}
