//! Action table: UI action identifiers mapped to handlers
//!
//! The table is built once at startup and handed to the view layer. Each
//! handler is a pure function from an [`ActionContext`] to an [`Effect`];
//! executing the effect (sending a request, writing the clipboard) is the
//! caller's job.
//!
//! ## Usage
//!
//! ```rust
//! use ddns_admin_core::actions::{ActionContext, ActionTable, Effect};
//! use ddns_admin_core::config::AdminConfig;
//!
//! let table = ActionTable::standard(&AdminConfig::default());
//! let effect = table
//!     .dispatch("deleteHost", &ActionContext::new().with_id("3"))
//!     .unwrap();
//!
//! match effect {
//!     Effect::Request(plan) => assert_eq!(plan.path, "/admin/hosts/delete/3"),
//!     other => panic!("unexpected effect: {other:?}"),
//! }
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::RwLock;

use super::routes::{ActionKind, RequestPlan, ResourceKind, Routes, dispatch};
use crate::config::AdminConfig;
use crate::error::{Error, Result};
use crate::logout::LogoutPlan;
use crate::secret::{Secret, SecretProfile};
use crate::update_url::{HostRecord, UpdateUrlBuilder};

/// Scheme used for update URLs when neither the context nor the base URL
/// names one
pub const DEFAULT_SCHEME: &str = "http";

/// Credential field on the host form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Update username
    Username,
    /// Update password
    Password,
}

impl Field {
    /// Form field name
    pub fn name(&self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Password => "password",
        }
    }

    /// Parse a form field name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "username" => Some(Field::Username),
            "password" => Some(Field::Password),
            _ => None,
        }
    }
}

/// Inputs available to a handler
#[derive(Debug, Clone, Default)]
pub struct ActionContext {
    /// Record id of the row the action was triggered on
    pub id: Option<String>,

    /// Credential field the action targets
    pub field: Option<Field>,

    /// Host row the action was triggered on
    pub host: Option<HostRecord>,

    /// Scheme of the page (`http` or `https`, trailing colon allowed)
    pub scheme: Option<String>,

    /// Path of the current page
    pub current_path: Option<String>,

    /// Current form values
    pub form: Vec<(String, String)>,
}

impl ActionContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the record id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the targeted credential field
    pub fn with_field(mut self, field: Field) -> Self {
        self.field = Some(field);
        self
    }

    /// Set the host row
    pub fn with_host(mut self, host: HostRecord) -> Self {
        self.host = Some(host);
        self
    }

    /// Set the page scheme
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    /// Set the current page path
    pub fn with_current_path(mut self, path: impl Into<String>) -> Self {
        self.current_path = Some(path.into());
        self
    }

    /// Add a form value
    pub fn with_form_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.form.push((name.into(), value.into()));
        self
    }

    /// Look up a form value by name (last one wins)
    pub fn form_value(&self, name: &str) -> Option<&str> {
        self.form
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn require_field(&self, action: &str) -> Result<Field> {
        self.field.ok_or_else(|| {
            Error::invalid_input(format!("{action} requires a username or password field"))
        })
    }
}

/// What the caller should do after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show another admin page
    Navigate(String),

    /// Send a request to the admin backend
    Request(RequestPlan),

    /// Write a generated secret into a form field
    SetField {
        /// Field to overwrite
        field: Field,
        /// New value
        value: Secret,
    },

    /// Place text on the clipboard
    Copy(String),

    /// End the HTTP-auth session
    Logout(LogoutPlan),
}

/// Handler stored in the table
pub type ActionHandler = Box<dyn Fn(&ActionContext) -> Result<Effect> + Send + Sync>;

/// Identifier → handler map
///
/// Uses interior mutability so handlers can be registered through a shared
/// reference during initialization.
#[derive(Default)]
pub struct ActionTable {
    handlers: RwLock<HashMap<String, ActionHandler>>,
}

impl fmt::Debug for ActionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionTable")
            .field("identifiers", &self.identifiers())
            .finish()
    }
}

impl ActionTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler, replacing any previous one with the same id
    pub fn register<F>(&self, id: impl Into<String>, handler: F)
    where
        F: Fn(&ActionContext) -> Result<Effect> + Send + Sync + 'static,
    {
        let mut handlers = self.handlers.write().unwrap_or_else(|e| e.into_inner());
        handlers.insert(id.into(), Box::new(handler));
    }

    /// Whether a handler is registered under `id`
    pub fn contains(&self, id: &str) -> bool {
        let handlers = self.handlers.read().unwrap_or_else(|e| e.into_inner());
        handlers.contains_key(id)
    }

    /// Registered identifiers, sorted
    pub fn identifiers(&self) -> Vec<String> {
        let handlers = self.handlers.read().unwrap_or_else(|e| e.into_inner());
        let mut ids: Vec<String> = handlers.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Run the handler registered under `id`
    pub fn dispatch(&self, id: &str, ctx: &ActionContext) -> Result<Effect> {
        let handlers = self.handlers.read().unwrap_or_else(|e| e.into_inner());
        let handler = handlers.get(id).ok_or_else(|| Error::unknown_action(id))?;
        handler(ctx)
    }

    /// Table with every action of the admin pages
    ///
    /// | identifier           | effect                                  |
    /// |----------------------|-----------------------------------------|
    /// | `addHost`            | navigate to the add-host page           |
    /// | `editHost`           | navigate to the edit page of `id`       |
    /// | `deleteHost`         | `GET .../hosts/delete/<id>`             |
    /// | `showHostLog`        | navigate to the log page of `id`        |
    /// | `submitAddHost`      | `POST .../hosts/add` with the form      |
    /// | `submitEditHost`     | `POST .../hosts/edit/<id>` with the form|
    /// | `addCName`           | navigate to the add-CNAME page          |
    /// | `deleteCName`        | `GET .../cnames/delete/<id>`            |
    /// | `submitAddCName`     | `POST .../cnames/add` with the form     |
    /// | `submitEditCName`    | `POST .../cnames/edit/<id>`             |
    /// | `showLogs`           | navigate to the log list                |
    /// | `generateHash`       | new secret for `field`                  |
    /// | `copyToClipboard`    | copy the form value of `field`          |
    /// | `copyUrlToClipboard` | copy the update URL of `host`           |
    /// | `logout`             | forced-invalid-credential logout        |
    pub fn standard(config: &AdminConfig) -> Self {
        let table = Self::new();
        let routes = Routes::new(config.route_prefix);

        table.register("addHost", move |_| {
            Ok(Effect::Navigate(routes.add_page(ResourceKind::Host)))
        });
        table.register("editHost", move |ctx| {
            let id = ctx.id().unwrap_or_default();
            Ok(Effect::Navigate(routes.edit_page(ResourceKind::Host, id)?))
        });
        table.register("showHostLog", move |ctx| {
            Ok(Effect::Navigate(routes.host_logs(ctx.id().unwrap_or_default())?))
        });
        table.register("addCName", move |_| {
            Ok(Effect::Navigate(routes.add_page(ResourceKind::CName)))
        });
        table.register("showLogs", move |_| Ok(Effect::Navigate(routes.logs())));

        let requests = [
            ("deleteHost", ActionKind::Delete, ResourceKind::Host),
            ("submitAddHost", ActionKind::Add, ResourceKind::Host),
            ("submitEditHost", ActionKind::Edit, ResourceKind::Host),
            ("deleteCName", ActionKind::Delete, ResourceKind::CName),
            ("submitAddCName", ActionKind::Add, ResourceKind::CName),
            ("submitEditCName", ActionKind::Edit, ResourceKind::CName),
        ];
        for (id, action, resource) in requests {
            table.register(id, move |ctx| {
                let record_id = if action.requires_id() { ctx.id() } else { None };
                Ok(Effect::Request(dispatch(&routes, action, resource, record_id)?))
            });
        }

        let profile: SecretProfile = config.secret_profile.clone();
        table.register("generateHash", move |ctx| {
            let field = ctx.require_field("generateHash")?;
            Ok(Effect::SetField {
                field,
                value: profile.generate(),
            })
        });

        table.register("copyToClipboard", |ctx| {
            let field = ctx.require_field("copyToClipboard")?;
            let value = ctx.form_value(field.name()).ok_or_else(|| {
                Error::invalid_input(format!("form has no {} value", field.name()))
            })?;
            Ok(Effect::Copy(value.to_string()))
        });

        let builder = UpdateUrlBuilder::new(config.credential_encoding);
        // Update URLs are served on the same scheme as the admin pages
        let page_scheme = config
            .scheme()
            .unwrap_or_else(|_| DEFAULT_SCHEME.to_string());
        table.register("copyUrlToClipboard", move |ctx| {
            let host = ctx
                .host
                .as_ref()
                .ok_or_else(|| Error::invalid_input("copyUrlToClipboard requires a host row"))?;
            let scheme = ctx.scheme.as_deref().unwrap_or(&page_scheme);
            Ok(Effect::Copy(builder.build_for(scheme, host)))
        });

        table.register("logout", move |ctx| {
            let path = ctx
                .current_path
                .clone()
                .unwrap_or_else(|| routes.list(ResourceKind::Host));
            Ok(Effect::Logout(LogoutPlan::new(path)))
        });

        table
    }
}
