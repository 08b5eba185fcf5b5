//! Auth flow: signup and login orchestration.
//!
//! Both operations are all-or-nothing: every failure path leaves the store
//! untouched (login never writes at all).

use std::time::SystemTime;

use sea_orm::ConnectionTrait;
use tracing::{debug, info};

use crate::auth::hasher::CredentialHasher;
use crate::auth::jwt::TokenCodec;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;
use crate::repos::users::{self, User, UserCreate};

#[derive(Debug, Clone)]
pub struct SignupInput {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// A freshly authenticated user plus their bearer token.
pub struct AuthOutcome {
    pub user: User,
    pub token: String,
}

/// Register a new user: validate → uniqueness → hash → persist → mint.
pub async fn signup<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    hasher: &dyn CredentialHasher,
    tokens: &dyn TokenCodec,
    input: SignupInput,
) -> Result<AuthOutcome, AppError> {
    let firstname = require_field(&input.firstname, ErrorCode::InvalidFirstname, "Firstname")?;
    let lastname = require_field(&input.lastname, ErrorCode::InvalidLastname, "Lastname")?;
    let email = require_field(&input.email, ErrorCode::InvalidEmail, "Email")?;
    if input.password.is_empty() {
        return Err(AppError::invalid(
            ErrorCode::InvalidPassword,
            "Password cannot be empty",
        ));
    }

    if users::find_by_email(conn, &email).await?.is_some() {
        return Err(AppError::conflict(
            ErrorCode::UniqueEmail,
            "Email already registered",
        ));
    }

    let password_hash = hasher.hash(&input.password).await?;

    // A concurrent signup racing past the lookup above fails on the store's
    // unique index and surfaces as the same conflict.
    let user = users::create(
        conn,
        UserCreate {
            firstname,
            lastname,
            email,
            password_hash,
        },
    )
    .await?;

    let token = tokens.mint(user.id, &user.email, SystemTime::now())?;

    info!(
        user_id = %user.id,
        email = %Redacted(&user.email),
        "user signed up"
    );

    Ok(AuthOutcome { user, token })
}

/// Authenticate an existing user: lookup → verify → mint. No stored state is
/// mutated.
pub async fn login<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    hasher: &dyn CredentialHasher,
    tokens: &dyn TokenCodec,
    input: LoginInput,
) -> Result<AuthOutcome, AppError> {
    let email = require_field(&input.email, ErrorCode::InvalidEmail, "Email")?;
    if input.password.is_empty() {
        return Err(AppError::invalid(
            ErrorCode::InvalidPassword,
            "Password cannot be empty",
        ));
    }

    let user = users::find_by_email(conn, &email).await?.ok_or_else(|| {
        AppError::not_found(ErrorCode::UserNotFound, "No account for this email")
    })?;

    if !hasher.verify(&input.password, &user.password_hash).await? {
        return Err(AppError::unauthorized_invalid_credentials());
    }

    let token = tokens.mint(user.id, &user.email, SystemTime::now())?;

    debug!(
        user_id = %user.id,
        email = %Redacted(&user.email),
        "user logged in"
    );

    Ok(AuthOutcome { user, token })
}

fn require_field(value: &str, code: ErrorCode, label: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid(code, format!("{label} cannot be empty")));
    }
    Ok(trimmed.to_string())
}
