//! Test state construction: isolated in-memory store, fixed JWT secret,
//! cheap bcrypt cost.

use std::sync::Arc;

use backend::auth::hasher::BcryptHasher;
use backend::config::db::DbProfile;
use backend::infra::state::build_state;
use backend::state::app_state::AppState;
use backend::state::security_config::SecurityConfig;
use backend::AppError;

/// Secret every test app signs and verifies with.
pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_purposes_only";

pub fn test_security_config() -> SecurityConfig {
    SecurityConfig::new(TEST_JWT_SECRET.as_bytes())
}

/// Build an AppState backed by a private in-memory database, so test
/// binaries (and tests within one binary) never observe each other's data.
pub async fn build_test_state() -> Result<AppState, AppError> {
    build_state()
        .with_db(DbProfile::Test)
        .with_security(test_security_config())
        // bcrypt's minimum cost keeps signup-heavy tests fast
        .with_hasher(Arc::new(BcryptHasher::with_cost(4)))
        .build()
        .await
}
