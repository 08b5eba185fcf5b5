//! Write-side DTOs for the users adapter.

/// Fields required to insert a new user row. The password arrives already
/// hashed; plaintext never reaches this layer.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password_hash: String,
}

/// Partial update: only `Some` fields are written.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
}
