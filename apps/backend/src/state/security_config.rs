use jsonwebtoken::Algorithm;
use tracing::warn;

/// Configuration for JWT security settings
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// JWT secret key for signing and verifying tokens
    pub jwt_secret: Vec<u8>,
    /// JWT algorithm to use (defaults to HS256)
    pub algorithm: Algorithm,
}

/// Fallback secret used when `BACKEND_JWT_SECRET` is unset. Fine for local
/// development, unacceptable for production; `from_env` warns when it is used.
const DEV_FALLBACK_SECRET: &[u8] = b"workdesk_dev_secret_change_me";

impl SecurityConfig {
    /// Create a new SecurityConfig with the given JWT secret
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
        }
    }

    /// Read the signing secret from `BACKEND_JWT_SECRET`, falling back to the
    /// built-in development secret.
    pub fn from_env() -> Self {
        match std::env::var("BACKEND_JWT_SECRET") {
            Ok(secret) => Self::new(secret.into_bytes()),
            Err(_) => {
                warn!("BACKEND_JWT_SECRET not set; using built-in development secret");
                Self::new(DEV_FALLBACK_SECRET.to_vec())
            }
        }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::new(DEV_FALLBACK_SECRET.to_vec())
    }
}
