use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::error::AppError;
use crate::extractors::current_user::CurrentUser;
use crate::extractors::ids::ProjectId;
use crate::extractors::validated_json::ValidatedJson;
use crate::repos::projects::Project;
use crate::routes::users::MessageResponse;
use crate::services::projects as projects_service;
use crate::services::projects::{CreateProjectInput, UpdateProjectInput};
use crate::state::app_state::{require_db, AppState};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<Project> for ProjectView {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            name: project.name,
            description: project.description,
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct UpdateProjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

async fn list_projects(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let projects = projects_service::list(db).await?;
    let views: Vec<ProjectView> = projects.into_iter().map(ProjectView::from).collect();
    Ok(HttpResponse::Ok().json(views))
}

async fn get_project(
    id: ProjectId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let project = projects_service::get(db, id.0).await?;
    Ok(HttpResponse::Ok().json(ProjectView::from(project)))
}

async fn create_project(
    _user: CurrentUser,
    req: ValidatedJson<CreateProjectRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let req = req.into_inner();

    let project = projects_service::create(
        db,
        CreateProjectInput {
            name: req.name,
            description: req.description,
        },
    )
    .await?;

    Ok(HttpResponse::Created().json(ProjectView::from(project)))
}

async fn update_project(
    _user: CurrentUser,
    id: ProjectId,
    req: ValidatedJson<UpdateProjectRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let req = req.into_inner();

    let project = projects_service::update(
        db,
        id.0,
        UpdateProjectInput {
            name: req.name,
            description: req.description,
        },
    )
    .await?;

    Ok(HttpResponse::Ok().json(ProjectView::from(project)))
}

async fn delete_project(
    _user: CurrentUser,
    id: ProjectId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    projects_service::delete(db, id.0).await?;
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Project deleted".to_string(),
    }))
}

/// Routes relative to the `/api/projects` scope. Reads are public; mutations
/// require a verified bearer token.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_projects))
            .route(web::post().to(create_project)),
    )
    .service(
        web::resource("/{id}")
            .route(web::get().to(get_project))
            .route(web::put().to(update_project))
            .route(web::delete().to(delete_project)),
    );
}
