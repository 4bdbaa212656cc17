// # Admin Routes
//
// Path construction for the admin backend and the typed
// `ActionKind × ResourceKind` dispatch.
//
// ## Layout
//
// ```text
// <prefix>/hosts                 list
// <prefix>/hosts/add             add page (GET) / submit (POST)
// <prefix>/hosts/edit/<id>       edit page (GET) / submit (POST)
// <prefix>/hosts/delete/<id>     delete (GET)
// <prefix>/logs                  log list
// <prefix>/logs/host/<id>        log of one host
// ```
//
// CNAME records use the same layout under `cnames`. `<prefix>` is empty for
// deployments that serve the admin pages at the root and `/admin` otherwise.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Mount point of the admin pages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutePrefix {
    /// Admin pages served at `/`
    Root,

    /// Admin pages served at `/admin`
    #[default]
    Admin,
}

impl RoutePrefix {
    /// Path prefix without trailing slash
    pub fn as_str(&self) -> &'static str {
        match self {
            RoutePrefix::Root => "",
            RoutePrefix::Admin => "/admin",
        }
    }

    /// Parse a prefix name (`root`, `admin`)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "root" | "" | "/" => Some(RoutePrefix::Root),
            "admin" | "/admin" => Some(RoutePrefix::Admin),
            _ => None,
        }
    }
}

/// What the user wants to do with a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    /// Create a new record
    Add,
    /// Modify an existing record
    Edit,
    /// Remove an existing record
    Delete,
}

impl ActionKind {
    /// Path segment used by the backend
    pub fn path_segment(&self) -> &'static str {
        match self {
            ActionKind::Add => "add",
            ActionKind::Edit => "edit",
            ActionKind::Delete => "delete",
        }
    }

    /// Whether the action targets an existing record
    pub fn requires_id(&self) -> bool {
        !matches!(self, ActionKind::Add)
    }
}

/// Kind of record managed by the admin pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// Dynamic host (A/AAAA record)
    Host,
    /// Alias record pointing at a host
    CName,
}

impl ResourceKind {
    /// Path segment used by the backend
    pub fn path_segment(&self) -> &'static str {
        match self {
            ResourceKind::Host => "hosts",
            ResourceKind::CName => "cnames",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Host => f.write_str("host"),
            ResourceKind::CName => f.write_str("cname"),
        }
    }
}

/// HTTP method of a backend request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET
    Get,
    /// POST with a form-urlencoded body
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Post => f.write_str("POST"),
        }
    }
}

/// A backend request derived from an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestPlan {
    /// HTTP method
    pub method: Method,

    /// Absolute path on the admin backend
    pub path: String,

    /// Whether the request carries the record form
    pub sends_form: bool,

    /// Page to show after the backend accepts the request
    pub redirect_to: String,
}

/// Path builder for one admin deployment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Routes {
    prefix: RoutePrefix,
}

impl Routes {
    /// Create a path builder for the given mount point
    pub fn new(prefix: RoutePrefix) -> Self {
        Self { prefix }
    }

    /// Mount point in use
    pub fn prefix(&self) -> RoutePrefix {
        self.prefix
    }

    /// `<prefix>/<resource>`
    pub fn list(&self, resource: ResourceKind) -> String {
        format!("{}/{}", self.prefix.as_str(), resource.path_segment())
    }

    /// `<prefix>/<resource>/add`
    pub fn add_page(&self, resource: ResourceKind) -> String {
        format!("{}/add", self.list(resource))
    }

    /// `<prefix>/<resource>/edit/<id>`
    pub fn edit_page(&self, resource: ResourceKind, id: &str) -> Result<String> {
        let id = require_id(ActionKind::Edit, resource, Some(id))?;
        Ok(format!("{}/edit/{}", self.list(resource), id))
    }

    /// `<prefix>/<resource>/delete/<id>`
    pub fn delete(&self, resource: ResourceKind, id: &str) -> Result<String> {
        let id = require_id(ActionKind::Delete, resource, Some(id))?;
        Ok(format!("{}/delete/{}", self.list(resource), id))
    }

    /// `<prefix>/logs`
    pub fn logs(&self) -> String {
        format!("{}/logs", self.prefix.as_str())
    }

    /// `<prefix>/logs/host/<id>`
    pub fn host_logs(&self, id: &str) -> Result<String> {
        let id = id.trim();
        if id.is_empty() {
            return Err(Error::invalid_input("showing a host log requires a host id"));
        }
        Ok(format!("{}/host/{}", self.logs(), id))
    }

    /// Form submission target for an add or edit
    ///
    /// An empty id is treated like a missing one, matching a form rendered
    /// for a record that does not exist yet.
    pub fn submit(
        &self,
        action: ActionKind,
        resource: ResourceKind,
        id: Option<&str>,
    ) -> Result<String> {
        match action {
            ActionKind::Add => Ok(self.add_page(resource)),
            ActionKind::Edit => {
                let id = require_id(action, resource, id)?;
                Ok(format!("{}/edit/{}", self.list(resource), id))
            }
            ActionKind::Delete => Err(Error::invalid_input(format!(
                "delete is not a form submission for {resource}"
            ))),
        }
    }
}

fn require_id<'a>(
    action: ActionKind,
    resource: ResourceKind,
    id: Option<&'a str>,
) -> Result<&'a str> {
    match id.map(str::trim) {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(Error::invalid_input(format!(
            "{} {} requires a record id",
            action.path_segment(),
            resource
        ))),
    }
}

/// Turn an action on a record into a backend request
///
/// - `Add` → `POST <prefix>/<resource>/add`
/// - `Edit` → `POST <prefix>/<resource>/edit/<id>`
/// - `Delete` → `GET <prefix>/<resource>/delete/<id>`
///
/// Every successful request redirects to the resource list.
pub fn dispatch(
    routes: &Routes,
    action: ActionKind,
    resource: ResourceKind,
    id: Option<&str>,
) -> Result<RequestPlan> {
    let (method, path, sends_form) = match action {
        ActionKind::Add | ActionKind::Edit => {
            (Method::Post, routes.submit(action, resource, id)?, true)
        }
        ActionKind::Delete => {
            let id = require_id(action, resource, id)?;
            (Method::Get, routes.delete(resource, id)?, false)
        }
    };

    let plan = RequestPlan {
        method,
        path,
        sends_form,
        redirect_to: routes.list(resource),
    };

    tracing::debug!(
        "Planned {} {} for {} {}",
        plan.method,
        plan.path,
        action.path_segment(),
        resource
    );
    Ok(plan)
}
