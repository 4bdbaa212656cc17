//! Configuration types for the admin client
//!
//! This module defines all configuration structures used throughout the crate.

use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::actions::RoutePrefix;
use crate::secret::SecretProfile;
use crate::update_url::CredentialEncoding;

/// Main admin client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Base URL of the admin backend (e.g. "https://ddns.example.com")
    pub base_url: String,

    /// Mount point of the admin pages
    #[serde(default)]
    pub route_prefix: RoutePrefix,

    /// HTTP Basic credentials for the admin pages
    #[serde(default)]
    pub credentials: Option<AdminCredentials>,

    /// Generator used for update usernames and passwords
    #[serde(default)]
    pub secret_profile: SecretProfile,

    /// How credentials are embedded in update URLs
    #[serde(default)]
    pub credential_encoding: CredentialEncoding,

    /// Clipboard backend
    #[serde(default)]
    pub clipboard: ClipboardConfig,

    /// Timeout for backend requests (in seconds)
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,
}

impl AdminConfig {
    /// Create a new configuration with defaults
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Set the admin credentials
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.credentials = Some(AdminCredentials::new(username, password));
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        self.parsed_base_url()?;

        if self.http_timeout_secs == 0 {
            return Err(crate::Error::config("HTTP timeout must be > 0"));
        }

        if let Some(credentials) = &self.credentials {
            credentials.validate()?;
        }

        self.secret_profile.validate()?;
        self.clipboard.validate()?;

        Ok(())
    }

    /// Parse the base URL
    ///
    /// The URL must use the `http` or `https` scheme and name a host.
    pub fn parsed_base_url(&self) -> Result<Url, crate::Error> {
        if self.base_url.is_empty() {
            return Err(crate::Error::config("Admin base URL cannot be empty"));
        }

        let url = Url::parse(&self.base_url)
            .map_err(|e| crate::Error::config(format!("Invalid admin base URL: {}", e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(crate::Error::config(format!(
                "Admin base URL must use HTTP or HTTPS scheme. Got: {}",
                url.scheme()
            )));
        }

        if url.host_str().is_none_or(str::is_empty) {
            return Err(crate::Error::config("Admin base URL must name a host"));
        }

        Ok(url)
    }

    /// Scheme the admin pages are served on (`http` or `https`)
    pub fn scheme(&self) -> Result<String, crate::Error> {
        Ok(self.parsed_base_url()?.scheme().to_string())
    }

    /// Admin host as typed in a browser (`host` or `host:port`)
    pub fn admin_host(&self) -> Result<String, crate::Error> {
        let url = self.parsed_base_url()?;
        let host = url.host_str().unwrap_or_default();
        Ok(match url.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        })
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            route_prefix: RoutePrefix::default(),
            credentials: None,
            secret_profile: SecretProfile::default(),
            credential_encoding: CredentialEncoding::default(),
            clipboard: ClipboardConfig::default(),
            http_timeout_secs: default_http_timeout_secs(),
        }
    }
}

/// HTTP Basic credentials for the admin pages
#[derive(Clone, Serialize, Deserialize)]
pub struct AdminCredentials {
    /// Admin username
    pub username: String,

    /// Admin password
    /// ⚠️ NEVER log this value
    pub password: String,
}

impl AdminCredentials {
    /// Create a credential pair
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Validate the credential pair
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.username.is_empty() {
            return Err(crate::Error::config("Admin username cannot be empty"));
        }
        Ok(())
    }
}

// Custom Debug implementation that hides the password
impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"<REDACTED>")
            .finish()
    }
}

/// Clipboard backend configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClipboardConfig {
    /// Pipe text into a native clipboard tool
    #[default]
    Command,

    /// Pipe text into a specific program
    Program {
        /// Executable to run
        program: String,
        /// Arguments passed to the executable
        #[serde(default)]
        args: Vec<String>,
    },

    /// Keep the text in memory (headless use, tests)
    Memory,
}

impl ClipboardConfig {
    /// Validate the clipboard configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        match self {
            ClipboardConfig::Program { program, .. } if program.is_empty() => Err(
                crate::Error::config("Clipboard program cannot be empty"),
            ),
            _ => Ok(()),
        }
    }

    /// Get the backend type name
    pub fn type_name(&self) -> &str {
        match self {
            ClipboardConfig::Command => "command",
            ClipboardConfig::Program { program, .. } => program,
            ClipboardConfig::Memory => "memory",
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_http_timeout_secs() -> u64 {
    30
}
