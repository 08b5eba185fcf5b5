use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::security_config::SecurityConfig;
use crate::auth::hasher::{BcryptHasher, CredentialHasher};
use crate::auth::jwt::{JwtTokenCodec, TokenCodec};
use crate::error::AppError;

/// Application state containing shared resources.
///
/// Everything the handlers need is injected here explicitly; there is no
/// process-global connection or secret.
#[derive(Clone)]
pub struct AppState {
    /// Database connection (optional for test scenarios)
    pub db: Option<DatabaseConnection>,
    /// Security configuration including JWT settings
    pub security: SecurityConfig,
    /// Password hashing capability
    pub hasher: Arc<dyn CredentialHasher>,
    /// Token mint/verify capability
    pub tokens: Arc<dyn TokenCodec>,
}

impl AppState {
    /// Create a new AppState with the given database connection and security
    /// config, using the default bcrypt/JWT capability implementations.
    pub fn new(db: DatabaseConnection, security: SecurityConfig) -> Self {
        Self {
            db: Some(db),
            security: security.clone(),
            hasher: Arc::new(BcryptHasher::new()),
            tokens: Arc::new(JwtTokenCodec::new(security)),
        }
    }

    /// Create a new AppState without a database connection (for testing)
    pub fn without_db(security: SecurityConfig) -> Self {
        Self {
            db: None,
            security: security.clone(),
            hasher: Arc::new(BcryptHasher::new()),
            tokens: Arc::new(JwtTokenCodec::new(security)),
        }
    }

    /// Replace the password hashing capability.
    pub fn with_hasher(mut self, hasher: Arc<dyn CredentialHasher>) -> Self {
        self.hasher = hasher;
        self
    }

    /// Replace the token codec capability.
    pub fn with_tokens(mut self, tokens: Arc<dyn TokenCodec>) -> Self {
        self.tokens = tokens;
        self
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("db", &self.db.is_some())
            .field("security", &"SecurityConfig{..}")
            .finish()
    }
}

/// Borrow the database connection or fail with a config error.
pub fn require_db(state: &AppState) -> Result<&DatabaseConnection, AppError> {
    state
        .db
        .as_ref()
        .ok_or_else(|| AppError::config("Database connection not available".to_string()))
}
