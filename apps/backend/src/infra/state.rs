use std::sync::Arc;

use crate::auth::hasher::CredentialHasher;
use crate::auth::jwt::TokenCodec;
use crate::config::db::DbProfile;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    security_config: SecurityConfig,
    db_profile: Option<DbProfile>,
    hasher: Option<Arc<dyn CredentialHasher>>,
    tokens: Option<Arc<dyn TokenCodec>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            security_config: SecurityConfig::default(),
            db_profile: None,
            hasher: None,
            tokens: None,
        }
    }

    pub fn with_db(mut self, profile: DbProfile) -> Self {
        self.db_profile = Some(profile);
        self
    }

    pub fn with_security(mut self, security_config: SecurityConfig) -> Self {
        self.security_config = security_config;
        self
    }

    /// Override the password hashing capability (tests use a cheap cost).
    pub fn with_hasher(mut self, hasher: Arc<dyn CredentialHasher>) -> Self {
        self.hasher = Some(hasher);
        self
    }

    /// Override the token codec capability.
    pub fn with_tokens(mut self, tokens: Arc<dyn TokenCodec>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let mut state = if let Some(profile) = self.db_profile {
            // single entrypoint: connect + migrate
            let conn = bootstrap_db(profile).await?;
            AppState::new(conn, self.security_config)
        } else {
            AppState::without_db(self.security_config)
        };

        if let Some(hasher) = self.hasher {
            state = state.with_hasher(hasher);
        }
        if let Some(tokens) = self.tokens {
            state = state.with_tokens(tokens);
        }

        Ok(state)
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
