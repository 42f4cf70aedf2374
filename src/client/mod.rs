//! Authenticated HTTP client for the hospital backend.
//!
//! Request discipline mirrors the mobile shell's expectations:
//! - `Authorization: Bearer <token>` is attached whenever a session exists
//! - any 401/403 response clears the persisted session before the error
//!   surfaces (numeric status-code check)
//! - non-2xx responses carry the backend's `{"message": ...}` detail when
//!   one is present
//! - no retries, no de-duplication; one request per user action

pub mod appointments;
pub mod auth;
pub mod doctors;
pub mod inventory;
pub mod patients;
pub mod prescriptions;
pub mod users;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::ClientError;
use crate::session::SessionManager;

/// Error body shape the backend uses for failures.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Typed access to every backend collection. Cheap to clone the inner
/// `reqwest::Client`; one `ApiClient` per app is the expected shape.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    session: Arc<Mutex<SessionManager>>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        session: Arc<Mutex<SessionManager>>,
    ) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config::CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ClientError::Http(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
            session,
        })
    }

    /// Client against the configured backend (`HMS_BASE_URL` or default).
    pub fn from_env(session: Arc<Mutex<SessionManager>>) -> Result<Self, ClientError> {
        Self::new(config::base_url(), session)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> Arc<Mutex<SessionManager>> {
        Arc::clone(&self.session)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer_token(&self) -> Option<String> {
        self.session
            .lock()
            .ok()
            .and_then(|manager| manager.bearer_token())
    }

    fn clear_session(&self) {
        if let Ok(mut manager) = self.session.lock() {
            manager.clear();
        }
    }

    fn map_send_error(&self, e: reqwest::Error) -> ClientError {
        if e.is_connect() {
            ClientError::Connection(self.base_url.clone())
        } else if e.is_timeout() {
            ClientError::Timeout
        } else {
            ClientError::Http(e.to_string())
        }
    }

    /// Turn a non-success status into the right error, clearing the session
    /// on the authorization-denied pair.
    fn fail_for_status(&self, status: StatusCode, message: Option<String>) -> ClientError {
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            tracing::info!(status = status.as_u16(), "Authorization denied, clearing session");
            self.clear_session();
            ClientError::AuthorizationDenied {
                status: status.as_u16(),
            }
        } else {
            ClientError::Api {
                status: status.as_u16(),
                message,
            }
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, ClientError> {
        let builder = match self.bearer_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };

        let response = builder.send().await.map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .text()
            .await
            .ok()
            .and_then(|text| serde_json::from_str::<ErrorBody>(&text).ok())
            .and_then(|body| body.message);
        Err(self.fail_for_status(status, message))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        response
            .json()
            .await
            .map_err(|e| ClientError::ResponseParsing(e.to_string()))
    }

    // ── JSON verbs ───────────────────────────────────────

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.send(self.http.get(self.url(path))).await?;
        Self::decode(response).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(self.http.post(self.url(path)).json(body)).await?;
        Self::decode(response).await
    }

    pub(crate) async fn post_json_unit<B>(&self, path: &str, body: &B) -> Result<(), ClientError>
    where
        B: Serialize + ?Sized,
    {
        self.send(self.http.post(self.url(path)).json(body)).await?;
        Ok(())
    }

    pub(crate) async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(self.http.put(self.url(path)).json(body)).await?;
        Self::decode(response).await
    }

    pub(crate) async fn put_json_unit<B>(&self, path: &str, body: &B) -> Result<(), ClientError>
    where
        B: Serialize + ?Sized,
    {
        self.send(self.http.put(self.url(path)).json(body)).await?;
        Ok(())
    }

    pub(crate) async fn patch_json_unit<B>(&self, path: &str, body: &B) -> Result<(), ClientError>
    where
        B: Serialize + ?Sized,
    {
        self.send(self.http.patch(self.url(path)).json(body)).await?;
        Ok(())
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ClientError> {
        self.send(self.http.delete(self.url(path))).await?;
        Ok(())
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ClientError> {
        let response = self
            .send(self.http.post(self.url(path)).multipart(form))
            .await?;
        Self::decode(response).await
    }
}
