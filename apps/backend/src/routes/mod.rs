//! HTTP route handlers, grouped per scope.

pub mod auth;
pub mod health;
pub mod projects;
pub mod users;
