// # Admin Backend Implementations
//
// This module provides implementations of the AdminBackend trait.

pub mod http;

pub use http::{DEFAULT_HTTP_TIMEOUT, HttpAdminBackend, backend_message, error_for_status};
