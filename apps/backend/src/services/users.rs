//! User CRUD orchestration on top of the repos layer.

use sea_orm::ConnectionTrait;
use tracing::info;
use uuid::Uuid;

use crate::auth::hasher::CredentialHasher;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::users::{self, User, UserChanges, UserCreate};

#[derive(Debug, Clone)]
pub struct CreateUserInput {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateUserInput {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

pub async fn list<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<Vec<User>, AppError> {
    Ok(users::list(conn).await?)
}

pub async fn get<C: ConnectionTrait + Send + Sync>(conn: &C, id: Uuid) -> Result<User, AppError> {
    users::find_by_id(conn, id)
        .await?
        .ok_or_else(|| AppError::not_found(ErrorCode::UserNotFound, format!("User {id} not found")))
}

/// Direct create (no token issued). The password is hashed before it reaches
/// the store, so the plaintext-never-stored invariant holds on this path too.
pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    hasher: &dyn CredentialHasher,
    input: CreateUserInput,
) -> Result<User, AppError> {
    let password_hash = hasher.hash(&input.password).await?;

    let user = users::create(
        conn,
        UserCreate {
            firstname: input.firstname,
            lastname: input.lastname,
            email: input.email,
            password_hash,
        },
    )
    .await?;

    info!(user_id = %user.id, "user created");
    Ok(user)
}

/// Partial update; only supplied fields change. A supplied password is
/// re-hashed; `updated_at` always advances.
pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    hasher: &dyn CredentialHasher,
    id: Uuid,
    input: UpdateUserInput,
) -> Result<User, AppError> {
    let password_hash = match input.password {
        Some(password) => Some(hasher.hash(&password).await?),
        None => None,
    };

    let user = users::update(
        conn,
        id,
        UserChanges {
            firstname: input.firstname,
            lastname: input.lastname,
            email: input.email,
            password_hash,
        },
    )
    .await?;

    info!(user_id = %user.id, "user updated");
    Ok(user)
}

pub async fn delete<C: ConnectionTrait + Send + Sync>(conn: &C, id: Uuid) -> Result<(), AppError> {
    users::delete(conn, id).await?;
    info!(user_id = %id, "user deleted");
    Ok(())
}

/// Remove every user, returning the number of rows that were present.
pub async fn delete_all<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, AppError> {
    let deleted = users::delete_all(conn).await?;
    info!(deleted, "all users deleted");
    Ok(deleted)
}
