// # ddns-admin-core
//
// Core library for the dynamic DNS admin client.
//
// ## Architecture Overview
//
// This library provides the logic behind the admin pages of a dynamic DNS
// server:
// - **secret**: Random usernames/passwords from a configurable alphabet
// - **update_url**: Update URLs with embedded credentials for routers and scripts
// - **actions**: Typed `ActionKind × ResourceKind` dispatch and the action table
// - **logout**: Forced-invalid-credential logout for HTTP auth
// - **Clipboard**: Trait for placing text on the system clipboard
// - **AdminBackend**: Trait for executing planned requests against the backend
// - **ActionRunner**: Carries out effects through a backend and a clipboard
//
// ## Design Principles
//
// 1. **Pure Core**: Actions produce effects; only backends and clipboards do I/O
// 2. **Explicit Dispatch**: Identifiers map to handlers in one table built at startup
// 3. **Library-First**: The CLI is a thin layer over this crate
// 4. **No Secret Leaks**: Passwords are redacted from every Debug output

pub mod actions;
pub mod backend;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod logout;
pub mod runner;
pub mod secret;
pub mod traits;
pub mod update_url;

// Re-export core types for convenience
pub use actions::{ActionContext, ActionKind, ActionTable, Effect, ResourceKind};
pub use backend::HttpAdminBackend;
pub use clipboard::{CommandClipboard, MemoryClipboard, create_clipboard};
pub use config::{AdminConfig, AdminCredentials, ClipboardConfig};
pub use error::{Error, Result};
pub use runner::{ActionRunner, Outcome};
pub use secret::{Alphabet, Secret, SecretProfile};
pub use traits::{AdminBackend, Clipboard};
pub use update_url::{CredentialEncoding, HostRecord, UpdateUrlBuilder, build_update_url};
