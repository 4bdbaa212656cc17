//! Effect execution
//!
//! [`ActionRunner`] carries out the [`Effect`]s produced by the action table:
//! it sends requests through an [`AdminBackend`] and writes text to a
//! [`Clipboard`]. Navigation and field updates are returned to the caller,
//! which owns the view.

use crate::actions::{Effect, Field};
use crate::error::Result;
use crate::logout::reset_url;
use crate::secret::Secret;
use crate::traits::{AdminBackend, Clipboard};

/// What happened after running an effect
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Show this page next
    Navigate(String),

    /// Form field now holds a new secret
    FieldSet {
        /// Overwritten field
        field: Field,
        /// New value
        value: Secret,
    },

    /// Text placed on the clipboard
    Copied(String),

    /// HTTP-auth session ended
    LoggedOut,
}

/// Executes effects against a backend and a clipboard
pub struct ActionRunner<'a> {
    backend: &'a dyn AdminBackend,
    clipboard: &'a dyn Clipboard,
    hostname: String,
}

impl<'a> ActionRunner<'a> {
    /// Create a runner
    ///
    /// `hostname` is the admin host as typed in a browser; it is only used
    /// for the logout fallback URL.
    pub fn new(
        backend: &'a dyn AdminBackend,
        clipboard: &'a dyn Clipboard,
        hostname: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            clipboard,
            hostname: hostname.into(),
        }
    }

    /// Run one effect
    ///
    /// Backend rejections are returned as errors carrying the backend's
    /// message. A failed logout falls back to navigating to the
    /// reset-credential URL.
    pub async fn run(&self, effect: Effect, form: &[(String, String)]) -> Result<Outcome> {
        match effect {
            Effect::Navigate(path) => Ok(Outcome::Navigate(path)),
            Effect::Request(plan) => {
                let response = self.backend.execute(&plan, form).await?;
                Ok(Outcome::Navigate(response.redirect_to))
            }
            Effect::SetField { field, value } => Ok(Outcome::FieldSet { field, value }),
            Effect::Copy(text) => {
                self.clipboard.copy(&text)?;
                tracing::info!(
                    "Copied {} characters with the {} clipboard",
                    text.chars().count(),
                    self.clipboard.backend_name()
                );
                Ok(Outcome::Copied(text))
            }
            Effect::Logout(plan) => match self.backend.logout(&plan).await {
                Ok(()) => Ok(Outcome::LoggedOut),
                Err(e) => {
                    tracing::warn!("Logout request failed ({}), using reset URL", e);
                    Ok(Outcome::Navigate(reset_url(&self.hostname, &plan.path)))
                }
            },
        }
    }
}
