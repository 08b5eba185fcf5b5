//! Path-id extractors. Unparseable ids are rejected with a 400 carrying a
//! resource-specific code before the handler runs.

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::errors::ErrorCode;

/// User ID extracted from the `{id}` route path parameter.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct UserId(pub Uuid);

impl FromRequest for UserId {
    type Error = AppError;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        std::future::ready(parse_path_id(req, ErrorCode::InvalidUserId).map(UserId))
    }
}

/// Project ID extracted from the `{id}` route path parameter.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct ProjectId(pub Uuid);

impl FromRequest for ProjectId {
    type Error = AppError;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        std::future::ready(parse_path_id(req, ErrorCode::InvalidProjectId).map(ProjectId))
    }
}

fn parse_path_id(req: &HttpRequest, code: ErrorCode) -> Result<Uuid, AppError> {
    let id_str = req
        .match_info()
        .get("id")
        .ok_or_else(|| AppError::bad_request(code, "Missing id parameter"))?;

    id_str
        .parse::<Uuid>()
        .map_err(|_| AppError::bad_request(code, format!("Invalid id: {id_str}")))
}
