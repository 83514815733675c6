//! REST client for the todo API.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Non-success statuses are
//! mapped to [`ApiError::Server`] with the `error` message extracted from
//! the response body when the server supplied one; the controller decides
//! which localized fallback to surface otherwise. Nothing here panics and
//! nothing is retried.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde_json::Value;

use super::types::{AuthSuccess, Task};

/// Errors produced by API calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a usable HTTP response.
    #[error("http request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned {status}: {}", message.as_deref().unwrap_or("<no message>"))]
    Server {
        status: u16,
        /// Message from the `error` field of the response body, if any.
        message: Option<String>,
    },
}

impl ApiError {
    /// Human-readable text for an error slot: the server-supplied message
    /// when present, otherwise the caller's fallback copy.
    #[must_use]
    pub fn surface(&self, fallback: &str) -> String {
        match self {
            Self::Server {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

/// Operations the controller needs from the remote API.
///
/// Split out as a trait so controller tests can substitute a scripted
/// fake for the HTTP client. The bearer token is an explicit parameter on
/// authenticated calls; right after login the controller passes the token
/// from the response rather than session state.
#[async_trait::async_trait]
pub trait TodoApi {
    async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<AuthSuccess, ApiError>;

    async fn login(&self, email: &str, password: &str) -> Result<AuthSuccess, ApiError>;

    async fn fetch_tasks(&self, token: &str) -> Result<Vec<Task>, ApiError>;

    async fn create_task(&self, token: &str, title: &str) -> Result<Task, ApiError>;

    async fn delete_task(&self, token: &str, id: &str) -> Result<(), ApiError>;

    async fn health(&self) -> Result<(), ApiError>;
}

/// HTTP implementation of [`TodoApi`] backed by reqwest.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Build a client for the given base URL. A trailing slash is
    /// tolerated and stripped.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Shared request-mutation step for authenticated calls. Every call
    /// site attaches the bearer credential through here and nowhere else.
    fn authed(&self, method: Method, path: &str, token: &str) -> RequestBuilder {
        self.client
            .request(method, self.url(path))
            .bearer_auth(token)
    }

    /// Pass 2xx responses through; map everything else to
    /// [`ApiError::Server`], pulling the message out of the body when the
    /// server sent one.
    async fn expect_success(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|body| {
                body.get("error")
                    .and_then(Value::as_str)
                    .map(ToOwned::to_owned)
            });
        Err(ApiError::Server {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait::async_trait]
impl TodoApi for ApiClient {
    async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<AuthSuccess, ApiError> {
        let response = self
            .client
            .post(self.url("/api/auth/register"))
            .json(&serde_json::json!({ "email": email, "password": password, "name": name }))
            .send()
            .await?;
        Ok(Self::expect_success(response).await?.json().await?)
    }

    async fn login(&self, email: &str, password: &str) -> Result<AuthSuccess, ApiError> {
        let response = self
            .client
            .post(self.url("/api/auth/login"))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;
        Ok(Self::expect_success(response).await?.json().await?)
    }

    async fn fetch_tasks(&self, token: &str) -> Result<Vec<Task>, ApiError> {
        let response = self.authed(Method::GET, "/api/tasks", token).send().await?;
        Ok(Self::expect_success(response).await?.json().await?)
    }

    async fn create_task(&self, token: &str, title: &str) -> Result<Task, ApiError> {
        let response = self
            .authed(Method::POST, "/api/tasks", token)
            .json(&serde_json::json!({ "title": title }))
            .send()
            .await?;
        Ok(Self::expect_success(response).await?.json().await?)
    }

    async fn delete_task(&self, token: &str, id: &str) -> Result<(), ApiError> {
        let path = format!("/api/tasks/{id}");
        let response = self.authed(Method::DELETE, &path, token).send().await?;
        Self::expect_success(response).await?;
        Ok(())
    }

    async fn health(&self) -> Result<(), ApiError> {
        let response = self.client.get(self.url("/health")).send().await?;
        Self::expect_success(response).await?;
        Ok(())
    }
}
