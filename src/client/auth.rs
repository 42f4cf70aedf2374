//! Login, registration, password reset, logout.

use serde::{Deserialize, Serialize};

use crate::error::ClientError;
use crate::models::{Role, SignupForm};
use crate::validation;

use super::ApiClient;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    roles: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
struct ForgotPasswordRequest<'a> {
    email: &'a str,
}

/// Outcome of a successful login; also persisted into the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub token: String,
    pub role: Option<Role>,
}

/// Validate the login response body. The backend must hand back a token and
/// at least one role; an unknown role string still authenticates, it just
/// gets no role-gated features.
fn parse_login_response(response: LoginResponse) -> Result<LoginOutcome, ClientError> {
    let token = response
        .token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ClientError::InvalidServerResponse("login response missing token".into()))?;

    let raw_role = response
        .roles
        .and_then(|roles| roles.into_iter().next())
        .ok_or_else(|| ClientError::InvalidServerResponse("login response missing roles".into()))?;

    let role = match Role::parse_lenient(&raw_role) {
        Ok(role) => Some(role),
        Err(_) => {
            tracing::warn!(role = %raw_role, "Backend reported unknown role");
            None
        }
    };

    Ok(LoginOutcome { token, role })
}

impl ApiClient {
    /// Authenticate and persist the resulting session. A 403 means the
    /// account exists but has not been approved yet.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginOutcome, ClientError> {
        let response: LoginResponse = self
            .post_json("/api/login", &LoginRequest { username, password })
            .await
            .map_err(|e| match e {
                ClientError::AuthorizationDenied { status: 403 } => {
                    ClientError::AccountNotApproved
                }
                other => other,
            })?;

        let outcome = parse_login_response(response)?;

        {
            let session = self.session();
            let mut session = session
                .lock()
                .map_err(|_| ClientError::Http("session lock poisoned".into()))?;
            session.establish(outcome.token.clone(), outcome.role)?;
        }

        tracing::info!(role = ?outcome.role, "Login succeeded");
        Ok(outcome)
    }

    /// Register a new account. Validates locally first; a clean form is
    /// posted and the account then waits for admin approval.
    pub async fn register(
        &self,
        form: &SignupForm,
        confirm_password: &str,
    ) -> Result<(), ClientError> {
        let errors = validation::validate_signup(form, confirm_password);
        if !errors.is_clean() {
            return Err(ClientError::Validation(errors));
        }
        self.post_json_unit("/api/register", form).await
    }

    /// Ask the backend to email a password-reset link.
    pub async fn request_password_reset(&self, email: &str) -> Result<(), ClientError> {
        self.post_json_unit("/api/forgot-password", &ForgotPasswordRequest { email })
            .await
    }

    /// Drop the session locally. No backend call; the token simply stops
    /// being attached.
    pub fn logout(&self) {
        self.clear_session();
        tracing::info!("Logged out");
    }
}
