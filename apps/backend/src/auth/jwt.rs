use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::state::security_config::SecurityConfig;
use crate::AppError;

/// Access token lifetime: 24 hours.
pub const TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// Claims included in our backend-issued access tokens.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AccessClaims {
    /// User identifier (users.id)
    pub sub: String,
    pub email: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

/// Capability interface for minting and verifying bearer tokens.
///
/// The auth flow and guard depend on this trait rather than on a concrete
/// cryptographic library, so tests can install deterministic fakes.
pub trait TokenCodec: Send + Sync {
    /// Sign a token over `{user_id, email}` valid for [`TOKEN_TTL_SECS`].
    fn mint(&self, user_id: Uuid, email: &str, now: SystemTime) -> Result<String, AppError>;

    /// Verify a token and return its claims.
    ///
    /// Errors:
    /// - Expired token → `AppError::UnauthorizedExpiredJwt`
    /// - Bad signature or any other decode failure → `AppError::UnauthorizedInvalidJwt`
    fn verify(&self, token: &str) -> Result<AccessClaims, AppError>;
}

/// HS256 JWT implementation of [`TokenCodec`].
pub struct JwtTokenCodec {
    security: SecurityConfig,
}

impl JwtTokenCodec {
    pub fn new(security: SecurityConfig) -> Self {
        Self { security }
    }
}

impl TokenCodec for JwtTokenCodec {
    fn mint(&self, user_id: Uuid, email: &str, now: SystemTime) -> Result<String, AppError> {
        let iat = now
            .duration_since(UNIX_EPOCH)
            .map_err(|_| AppError::internal("Failed to get current time".to_string()))?
            .as_secs() as i64;

        let claims = AccessClaims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat,
            exp: iat + TOKEN_TTL_SECS,
        };

        encode(
            &Header::new(self.security.algorithm),
            &claims,
            &EncodingKey::from_secret(&self.security.jwt_secret),
        )
        .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}")))
    }

    fn verify(&self, token: &str) -> Result<AccessClaims, AppError> {
        // Default Validation already checks exp; pin algorithm to configured algorithm.
        let validation = Validation::new(self.security.algorithm);

        decode::<AccessClaims>(
            token,
            &DecodingKey::from_secret(&self.security.jwt_secret),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                AppError::unauthorized_expired_jwt()
            }
            jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                AppError::unauthorized_invalid_jwt()
            }
            _ => AppError::unauthorized_invalid_jwt(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use uuid::Uuid;

    use super::{JwtTokenCodec, TokenCodec, TOKEN_TTL_SECS};
    use crate::state::security_config::SecurityConfig;
    use crate::AppError;

    fn codec(secret: &str) -> JwtTokenCodec {
        JwtTokenCodec::new(SecurityConfig::new(secret.as_bytes()))
    }

    #[test]
    fn test_mint_and_verify_roundtrip() {
        let codec = codec("test_secret_key_for_testing_purposes_only");

        let user_id = Uuid::new_v4();
        let email = "test@example.com";
        let now = SystemTime::now();

        let token = codec.mint(user_id, email, now).unwrap();
        let claims = codec.verify(&token).unwrap();

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.email, email);
        assert_eq!(
            claims.iat,
            now.duration_since(UNIX_EPOCH).unwrap().as_secs() as i64
        );
        assert_eq!(claims.exp, claims.iat + TOKEN_TTL_SECS);
    }

    #[test]
    fn test_expired_token() {
        let codec = codec("test_secret_key_for_testing_purposes_only");

        // 25 hours ago so the 24-hour token is expired
        let now = SystemTime::now() - Duration::from_secs(25 * 60 * 60);
        let token = codec.mint(Uuid::new_v4(), "test@example.com", now).unwrap();

        match codec.verify(&token) {
            Err(AppError::UnauthorizedExpiredJwt) => {}
            other => panic!("expected expired-token error, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_signature() {
        // Mint with secret A, verify with secret B
        let codec_a = codec("secret-A");
        let token = codec_a
            .mint(Uuid::new_v4(), "test@example.com", SystemTime::now())
            .unwrap();

        let codec_b = codec("secret-B");
        match codec_b.verify(&token) {
            Err(AppError::UnauthorizedInvalidJwt) => {}
            other => panic!("expected invalid-signature error, got {other:?}"),
        }
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        let codec = codec("test_secret_key_for_testing_purposes_only");
        match codec.verify("not-a-jwt") {
            Err(AppError::UnauthorizedInvalidJwt) => {}
            other => panic!("expected invalid-token error, got {other:?}"),
        }
    }
}
