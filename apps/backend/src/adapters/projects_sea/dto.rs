//! Write-side DTOs for the projects adapter.

#[derive(Debug, Clone)]
pub struct ProjectCreate {
    pub name: String,
    pub description: Option<String>,
}

/// Partial update: only `Some` fields are written.
#[derive(Debug, Clone, Default)]
pub struct ProjectChanges {
    pub name: Option<String>,
    pub description: Option<String>,
}
