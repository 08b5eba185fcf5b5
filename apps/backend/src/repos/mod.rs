//! Repository layer: domain models and store operations generic over
//! `sea_orm::ConnectionTrait`, returning `DomainError`.

pub mod projects;
pub mod users;
