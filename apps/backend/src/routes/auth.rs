use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::extractors::validated_json::ValidatedJson;
use crate::routes::users::UserView;
use crate::services::auth::{self, LoginInput, SignupInput};
use crate::state::app_state::{require_db, AppState};

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: UserView,
}

/// Register a new user and hand back a fresh bearer token.
async fn signup(
    req: ValidatedJson<SignupRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let req = req.into_inner();

    let outcome = auth::signup(
        db,
        app_state.hasher.as_ref(),
        app_state.tokens.as_ref(),
        SignupInput {
            firstname: req.firstname,
            lastname: req.lastname,
            email: req.email,
            password: req.password,
        },
    )
    .await?;

    Ok(HttpResponse::Created().json(AuthResponse {
        message: "User created successfully".to_string(),
        token: outcome.token,
        user: UserView::from(outcome.user),
    }))
}

/// Verify credentials and hand back a fresh bearer token.
async fn login(
    req: ValidatedJson<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let req = req.into_inner();

    let outcome = auth::login(
        db,
        app_state.hasher.as_ref(),
        app_state.tokens.as_ref(),
        LoginInput {
            email: req.email,
            password: req.password,
        },
    )
    .await?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        message: "Login successful".to_string(),
        token: outcome.token,
        user: UserView::from(outcome.user),
    }))
}

/// Routes relative to the `/api/auth` scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/signup").route(web::post().to(signup)))
        .service(web::resource("/login").route(web::post().to(login)));
}
