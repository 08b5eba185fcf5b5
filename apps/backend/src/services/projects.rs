//! Project CRUD orchestration on top of the repos layer.

use sea_orm::ConnectionTrait;
use tracing::info;
use uuid::Uuid;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::projects::{self, Project, ProjectChanges, ProjectCreate};

#[derive(Debug, Clone)]
pub struct CreateProjectInput {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProjectInput {
    pub name: Option<String>,
    pub description: Option<String>,
}

pub async fn list<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<Vec<Project>, AppError> {
    Ok(projects::list(conn).await?)
}

pub async fn get<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
) -> Result<Project, AppError> {
    projects::find_by_id(conn, id).await?.ok_or_else(|| {
        AppError::not_found(ErrorCode::ProjectNotFound, format!("Project {id} not found"))
    })
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    input: CreateProjectInput,
) -> Result<Project, AppError> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(AppError::invalid(
            ErrorCode::InvalidProjectName,
            "Project name cannot be empty",
        ));
    }

    let project = projects::create(
        conn,
        ProjectCreate {
            name: name.to_string(),
            description: input.description,
        },
    )
    .await?;

    info!(project_id = %project.id, "project created");
    Ok(project)
}

/// Partial update; only supplied fields change and `updated_at` advances.
pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
    input: UpdateProjectInput,
) -> Result<Project, AppError> {
    let project = projects::update(
        conn,
        id,
        ProjectChanges {
            name: input.name,
            description: input.description,
        },
    )
    .await?;

    info!(project_id = %project.id, "project updated");
    Ok(project)
}

pub async fn delete<C: ConnectionTrait + Send + Sync>(conn: &C, id: Uuid) -> Result<(), AppError> {
    projects::delete(conn, id).await?;
    info!(project_id = %id, "project deleted");
    Ok(())
}
