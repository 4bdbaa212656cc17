// # Admin Backend Trait
//
// Defines the interface for executing planned requests against the
// dynamic-DNS admin backend.
//
// ## Implementations
//
// - `HttpAdminBackend`: reqwest client with HTTP Basic credentials
//
// ## Usage
//
// ```rust,ignore
// use ddns_admin_core::AdminBackend;
// use ddns_admin_core::actions::{dispatch, ActionKind, ResourceKind, Routes};
//
// #[tokio::main]
// async fn main() -> anyhow::Result<()> {
//     let backend = /* AdminBackend implementation */;
//     let plan = dispatch(&Routes::default(), ActionKind::Delete, ResourceKind::Host, Some("3"))?;
//
//     let response = backend.execute(&plan, &[]).await?;
//     println!("next page: {}", response.redirect_to);
//
//     Ok(())
// }
// ```

use async_trait::async_trait;

use crate::actions::RequestPlan;
use crate::logout::LogoutPlan;

/// Result of an accepted backend request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendResponse {
    /// HTTP status code
    pub status: u16,

    /// Page to show next
    pub redirect_to: String,
}

/// Trait for admin backend implementations
///
/// Implementations send exactly one request per call and never retry; a
/// failed request is reported to the caller, which shows the message and
/// reloads the page.
#[async_trait]
pub trait AdminBackend: Send + Sync {
    /// Execute a planned request
    ///
    /// # Parameters
    ///
    /// - `plan`: Request derived from an action
    /// - `form`: Form values, sent only when `plan.sends_form` is set
    ///
    /// # Returns
    ///
    /// - `Ok(BackendResponse)`: The backend accepted the request
    /// - `Err(Error)`: Transport failure or rejection, carrying the backend's message
    async fn execute(
        &self,
        plan: &RequestPlan,
        form: &[(String, String)],
    ) -> Result<BackendResponse, crate::Error>;

    /// End the HTTP-auth session with forced-invalid credentials
    ///
    /// # Returns
    ///
    /// - `Ok(())`: The backend answered 401
    /// - `Err(Error)`: Any other outcome
    async fn logout(&self, plan: &LogoutPlan) -> Result<(), crate::Error>;

    /// Get the backend name (for logging)
    fn backend_name(&self) -> &'static str;
}
