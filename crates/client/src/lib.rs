//! REST client layer for the back-office suite.
//!
//! One `EntityService<T>` per REST resource wraps the five CRUD
//! operations, normalizes the resource's response envelope into a
//! uniform `Page<T>`, and maps every failure into a single `ApiError`.
//! `ListController` holds the per-screen fetch state machine, and
//! column descriptor sets turn typed records into renderable cells.
//! Widget chrome (tables, dialogs, toasts) lives outside this crate.

pub mod columns;
pub mod config;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod http;
pub mod list_state;
pub mod resource;

#[cfg(test)]
mod test_support;

pub use config::ClientConfig;
pub use error::ApiError;
pub use resource::{EntityService, RestResource};
