//! Admin page actions
//!
//! - [`routes`]: path construction and the `ActionKind × ResourceKind` dispatch
//! - [`table`]: identifier → handler table producing [`Effect`]s

pub mod routes;
pub mod table;

pub use routes::{ActionKind, Method, RequestPlan, ResourceKind, RoutePrefix, Routes, dispatch};
pub use table::{ActionContext, ActionHandler, ActionTable, Effect, Field};
