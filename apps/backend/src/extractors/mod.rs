//! Request extractors, including the authentication guard chain
//! (`AuthToken` → `CurrentUser`).

pub mod auth_token;
pub mod current_user;
pub mod ids;
pub mod validated_json;
