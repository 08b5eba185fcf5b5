use async_trait::async_trait;

use crate::AppError;

/// Capability interface for one-way password hashing.
///
/// The auth flow depends on this trait rather than on a concrete hashing
/// library, so tests can swap in a cheap or deterministic implementation.
#[async_trait]
pub trait CredentialHasher: Send + Sync {
    /// Hash a plaintext password. The result never equals the input.
    async fn hash(&self, password: &str) -> Result<String, AppError>;

    /// Check a plaintext password against a stored hash.
    async fn verify(&self, password: &str, password_hash: &str) -> Result<bool, AppError>;
}

/// bcrypt implementation of [`CredentialHasher`].
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Use a non-default cost. Tests use the minimum cost to stay fast.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialHasher for BcryptHasher {
    async fn hash(&self, password: &str) -> Result<String, AppError> {
        bcrypt::hash(password, self.cost)
            .map_err(|e| AppError::internal(format!("password hashing failed: {e}")))
    }

    async fn verify(&self, password: &str, password_hash: &str) -> Result<bool, AppError> {
        bcrypt::verify(password, password_hash)
            .map_err(|e| AppError::internal(format!("password verification failed: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> BcryptHasher {
        // bcrypt::MIN_COST is private in this version; 4 is its value.
        BcryptHasher::with_cost(4)
    }

    #[tokio::test]
    async fn hash_never_equals_plaintext() {
        let hash = hasher().hash("hunter2").await.unwrap();
        assert_ne!(hash, "hunter2");
        assert!(hash.starts_with("$2"));
    }

    #[tokio::test]
    async fn verify_accepts_correct_password() {
        let h = hasher();
        let hash = h.hash("correct horse battery staple").await.unwrap();
        assert!(h.verify("correct horse battery staple", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn verify_rejects_wrong_password() {
        let h = hasher();
        let hash = h.hash("right").await.unwrap();
        assert!(!h.verify("wrong", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn same_password_hashes_differently() {
        let h = hasher();
        let a = h.hash("pw").await.unwrap();
        let b = h.hash("pw").await.unwrap();
        // bcrypt salts every hash
        assert_ne!(a, b);
    }
}
