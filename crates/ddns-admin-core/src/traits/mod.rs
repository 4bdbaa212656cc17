//! Core traits for the admin client
//!
//! This module defines the seams between the pure action layer and the
//! outside world.
//!
//! - [`Clipboard`]: place text on the system clipboard
//! - [`AdminBackend`]: execute planned requests against the admin backend

pub mod backend;
pub mod clipboard;

pub use backend::{AdminBackend, BackendResponse};
pub use clipboard::Clipboard;
