//! SeaORM entity definitions.

pub mod projects;
pub mod users;
