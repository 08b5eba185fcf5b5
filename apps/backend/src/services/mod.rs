//! Service layer: request-agnostic orchestration of store, hasher and token
//! operations.

pub mod auth;
pub mod projects;
pub mod users;
