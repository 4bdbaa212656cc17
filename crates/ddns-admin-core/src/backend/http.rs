// # HTTP Admin Backend
//
// reqwest implementation of AdminBackend.
//
// ## Behavior
//
// - One HTTP request per call; no retries
// - HTTP Basic credentials on every request when configured
// - Form-urlencoded POST bodies for add/edit submissions
// - Rejections carry the backend's `{"message": "..."}` text
//
// ## Security
//
// - Admin password NEVER appears in logs or Debug output

use async_trait::async_trait;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

use crate::actions::{Method, RequestPlan};
use crate::config::{AdminConfig, AdminCredentials};
use crate::logout::LogoutPlan;
use crate::traits::{AdminBackend, BackendResponse};
use crate::{Error, Result};

/// Default HTTP timeout for backend requests (30 seconds)
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Error body returned by the admin backend
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Admin backend reached over HTTP
pub struct HttpAdminBackend {
    /// Base URL without trailing slash
    base_url: String,

    /// HTTP Basic credentials
    /// ⚠️ NEVER log the password
    credentials: Option<AdminCredentials>,

    /// HTTP client for backend requests
    client: reqwest::Client,
}

// Custom Debug implementation that hides the credentials
impl fmt::Debug for HttpAdminBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpAdminBackend")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .finish()
    }
}

impl HttpAdminBackend {
    /// Create a backend client
    ///
    /// # Parameters
    ///
    /// - `base_url`: Scheme and authority of the admin backend
    /// - `credentials`: HTTP Basic credentials, if the backend requires them
    /// - `timeout`: Per-request timeout
    pub fn new(
        base_url: impl Into<String>,
        credentials: Option<AdminCredentials>,
        timeout: Duration,
    ) -> Result<Self> {
        let base_url = base_url.into();
        if base_url.is_empty() {
            return Err(Error::config("Admin base URL cannot be empty"));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::http(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
            client,
        })
    }

    /// Create a backend client from the admin configuration
    pub fn from_config(config: &AdminConfig) -> Result<Self> {
        Self::new(
            config.base_url.clone(),
            config.credentials.clone(),
            Duration::from_secs(config.http_timeout_secs),
        )
    }

    /// Absolute URL of a backend path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.credentials {
            Some(credentials) => {
                request.basic_auth(&credentials.username, Some(&credentials.password))
            }
            None => request,
        }
    }
}

/// Extract the human-readable message from an error body
///
/// The backend answers failures with `{"message": "..."}`; anything else is
/// returned trimmed, and an empty body falls back to the status line.
pub fn backend_message(status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.message;
    }

    let body = body.trim();
    if body.is_empty() {
        format!("HTTP {}", status)
    } else {
        body.to_string()
    }
}

/// Map a rejected response to an error
pub fn error_for_status(status: u16, body: &str) -> Error {
    let message = backend_message(status, body);
    match status {
        401 | 403 => Error::auth(message),
        404 => Error::not_found(message),
        _ => Error::backend(status, message),
    }
}

#[async_trait]
impl AdminBackend for HttpAdminBackend {
    async fn execute(
        &self,
        plan: &RequestPlan,
        form: &[(String, String)],
    ) -> Result<BackendResponse> {
        let url = self.url(&plan.path);
        tracing::info!("{} {}", plan.method, url);

        let request = match plan.method {
            Method::Get => self.client.get(&url),
            Method::Post if plan.sends_form => self.client.post(&url).form(form),
            Method::Post => self.client.post(&url),
        };

        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());

            let err = error_for_status(status, &body);
            tracing::warn!("{} {} rejected: {}", plan.method, plan.path, err);
            return Err(err);
        }

        tracing::debug!("{} {} accepted ({})", plan.method, plan.path, status);
        Ok(BackendResponse {
            status,
            redirect_to: plan.redirect_to.clone(),
        })
    }

    async fn logout(&self, plan: &LogoutPlan) -> Result<()> {
        let url = self.url(&plan.path);
        tracing::info!("Logging out via {}", url);

        let response = self
            .client
            .get(&url)
            .basic_auth(&plan.username, Some(&plan.password))
            .send()
            .await
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status().as_u16();
        if plan.is_complete(status) {
            return Ok(());
        }

        Err(Error::auth(format!(
            "logout expected 401 from {}, got {}",
            plan.path, status
        )))
    }

    fn backend_name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_message_json() {
        assert_eq!(
            backend_message(400, r#"{"message":"Hostname already exists"}"#),
            "Hostname already exists"
        );
    }

    #[test]
    fn test_backend_message_plain() {
        assert_eq!(backend_message(500, "  internal error\n"), "internal error");
        assert_eq!(backend_message(502, ""), "HTTP 502");
    }

    #[test]
    fn test_error_for_status() {
        assert!(matches!(error_for_status(401, ""), Error::Authentication(_)));
        assert!(matches!(error_for_status(403, ""), Error::Authentication(_)));
        assert!(matches!(error_for_status(404, ""), Error::NotFound(_)));
        assert!(matches!(
            error_for_status(400, r#"{"message":"bad ttl"}"#),
            Error::Backend { status: 400, ref message } if message == "bad ttl"
        ));
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let backend =
            HttpAdminBackend::new("https://ddns.example.com/", None, DEFAULT_HTTP_TIMEOUT).unwrap();
        assert_eq!(
            backend.url("/admin/hosts"),
            "https://ddns.example.com/admin/hosts"
        );
    }

    #[test]
    fn test_empty_base_url_rejected() {
        assert!(HttpAdminBackend::new("", None, DEFAULT_HTTP_TIMEOUT).is_err());
    }

    #[test]
    fn test_password_not_exposed_in_debug() {
        let backend = HttpAdminBackend::new(
            "https://ddns.example.com",
            Some(AdminCredentials::new("admin", "secret_password_123")),
            DEFAULT_HTTP_TIMEOUT,
        )
        .unwrap();

        let debug_str = format!("{:?}", backend);
        assert!(!debug_str.contains("secret_password_123"));
        assert!(debug_str.contains("HttpAdminBackend"));
    }

    #[test]
    fn test_from_config() {
        let config = AdminConfig::new("http://127.0.0.1:8080").with_credentials("admin", "pw");
        let backend = HttpAdminBackend::from_config(&config).unwrap();
        assert_eq!(backend.backend_name(), "http");
        assert_eq!(backend.url("/hosts"), "http://127.0.0.1:8080/hosts");
    }
}
