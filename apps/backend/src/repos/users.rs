//! User repository functions for the domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::adapters::users_sea as users_adapter;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::infra::db_errors::map_db_err;

pub use crate::adapters::users_sea::{UserChanges, UserCreate};

/// User domain model
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

pub async fn find_by_email<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Option<User>, DomainError> {
    let user = users_adapter::find_by_email(conn, email)
        .await
        .map_err(map_db_err)?;
    Ok(user.map(User::from))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
) -> Result<Option<User>, DomainError> {
    let user = users_adapter::find_by_id(conn, id)
        .await
        .map_err(map_db_err)?;
    Ok(user.map(User::from))
}

pub async fn list<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<Vec<User>, DomainError> {
    let users = users_adapter::list(conn).await.map_err(map_db_err)?;
    Ok(users.into_iter().map(User::from).collect())
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: UserCreate,
) -> Result<User, DomainError> {
    let user = users_adapter::insert(conn, dto).await.map_err(map_db_err)?;
    Ok(User::from(user))
}

/// Apply a partial update; fails with a user not-found when the id is unknown.
pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
    changes: UserChanges,
) -> Result<User, DomainError> {
    let updated = users_adapter::update_by_id(conn, id, changes)
        .await
        .map_err(map_db_err)?;
    updated
        .map(User::from)
        .ok_or_else(|| DomainError::not_found(NotFoundKind::User, format!("User {id} not found")))
}

/// Delete one user; fails with a user not-found when the id is unknown.
pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
) -> Result<(), DomainError> {
    let rows = users_adapter::delete_by_id(conn, id)
        .await
        .map_err(map_db_err)?;
    if rows == 0 {
        return Err(DomainError::not_found(
            NotFoundKind::User,
            format!("User {id} not found"),
        ));
    }
    Ok(())
}

/// Delete every user, returning how many rows were removed.
pub async fn delete_all<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, DomainError> {
    users_adapter::delete_all(conn).await.map_err(map_db_err)
}

// Conversion between the SeaORM model and the domain model

impl From<crate::entities::users::Model> for User {
    fn from(model: crate::entities::users::Model) -> Self {
        Self {
            id: model.id,
            firstname: model.firstname,
            lastname: model.lastname,
            email: model.email,
            password_hash: model.password_hash,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
