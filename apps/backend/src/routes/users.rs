use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::error::AppError;
use crate::extractors::current_user::CurrentUser;
use crate::extractors::ids::UserId;
use crate::extractors::validated_json::ValidatedJson;
use crate::repos::users::User;
use crate::services::users as users_service;
use crate::services::users::{CreateUserInput, UpdateUserInput};
use crate::state::app_state::{require_db, AppState};

/// Client-facing user representation. There is no password field on this
/// type, so a hash can never leak through serialization.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: Uuid,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            firstname: user.firstname,
            lastname: user.lastname,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct UpdateUserRequest {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAllResponse {
    pub deleted_count: u64,
}

async fn list_users(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let users = users_service::list(db).await?;
    let views: Vec<UserView> = users.into_iter().map(UserView::from).collect();
    Ok(HttpResponse::Ok().json(views))
}

async fn get_user(
    id: UserId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let user = users_service::get(db, id.0).await?;
    Ok(HttpResponse::Ok().json(UserView::from(user)))
}

async fn create_user(
    req: ValidatedJson<CreateUserRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let req = req.into_inner();

    // Direct creates report any store rejection, including a duplicate
    // email, as a plain store failure; only the signup flow owns the 409.
    let user = users_service::create(
        db,
        app_state.hasher.as_ref(),
        CreateUserInput {
            firstname: req.firstname,
            lastname: req.lastname,
            email: req.email,
            password: req.password,
        },
    )
    .await
    .map_err(|e| match e {
        AppError::Conflict { detail, .. } | AppError::Validation { detail, .. } => {
            AppError::db(format!("user creation failed: {detail}"))
        }
        other => other,
    })?;

    Ok(HttpResponse::Created().json(UserView::from(user)))
}

async fn update_user(
    _user: CurrentUser,
    id: UserId,
    req: ValidatedJson<UpdateUserRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let req = req.into_inner();

    let user = users_service::update(
        db,
        app_state.hasher.as_ref(),
        id.0,
        UpdateUserInput {
            firstname: req.firstname,
            lastname: req.lastname,
            email: req.email,
            password: req.password,
        },
    )
    .await?;

    Ok(HttpResponse::Ok().json(UserView::from(user)))
}

async fn delete_user(
    _user: CurrentUser,
    id: UserId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    users_service::delete(db, id.0).await?;
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "User deleted".to_string(),
    }))
}

async fn delete_users(
    _user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let deleted_count = users_service::delete_all(db).await?;
    Ok(HttpResponse::Ok().json(DeleteAllResponse { deleted_count }))
}

/// Routes relative to the `/api/users` scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_users))
            .route(web::post().to(create_user))
            .route(web::delete().to(delete_users)),
    )
    .service(
        web::resource("/{id}")
            .route(web::get().to(get_user))
            .route(web::put().to(update_user))
            .route(web::delete().to(delete_user)),
    );
}
