//! Project repository functions for the domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::adapters::projects_sea as projects_adapter;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::infra::db_errors::map_db_err;

pub use crate::adapters::projects_sea::{ProjectChanges, ProjectCreate};

/// Project domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
) -> Result<Option<Project>, DomainError> {
    let project = projects_adapter::find_by_id(conn, id)
        .await
        .map_err(map_db_err)?;
    Ok(project.map(Project::from))
}

pub async fn list<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<Vec<Project>, DomainError> {
    let projects = projects_adapter::list(conn).await.map_err(map_db_err)?;
    Ok(projects.into_iter().map(Project::from).collect())
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ProjectCreate,
) -> Result<Project, DomainError> {
    let project = projects_adapter::insert(conn, dto)
        .await
        .map_err(map_db_err)?;
    Ok(Project::from(project))
}

/// Apply a partial update; fails with a project not-found when the id is unknown.
pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
    changes: ProjectChanges,
) -> Result<Project, DomainError> {
    let updated = projects_adapter::update_by_id(conn, id, changes)
        .await
        .map_err(map_db_err)?;
    updated.map(Project::from).ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Project, format!("Project {id} not found"))
    })
}

/// Delete one project; fails with a project not-found when the id is unknown.
pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
) -> Result<(), DomainError> {
    let rows = projects_adapter::delete_by_id(conn, id)
        .await
        .map_err(map_db_err)?;
    if rows == 0 {
        return Err(DomainError::not_found(
            NotFoundKind::Project,
            format!("Project {id} not found"),
        ));
    }
    Ok(())
}

// Conversion between the SeaORM model and the domain model

impl From<crate::entities::projects::Model> for Project {
    fn from(model: crate::entities::projects::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
