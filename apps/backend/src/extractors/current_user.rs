use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::extractors::auth_token::AuthToken;
use crate::state::app_state::AppState;

/// Authenticated identity for the current request.
///
/// Produced only by a successful guard pass: header shape via [`AuthToken`],
/// then token verification via the configured codec. Derived entirely from
/// the verified claims; lives for the duration of the request and is never
/// persisted. Handlers take this as a parameter to require authentication;
/// on any failure the handler is never invoked and the client gets a 401.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CurrentUser {
    pub user_id: Uuid,
    pub email: String,
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let token_fut = AuthToken::from_request(req, payload);
        let req = req.clone();

        Box::pin(async move {
            let auth_token = token_fut.await?;

            let app_state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::internal("AppState not available".to_string()))?;

            let claims = app_state.tokens.verify(&auth_token.token)?;

            // The sub claim is minted from users.id; a token carrying anything
            // else did not come from us.
            let user_id = claims
                .sub
                .parse::<Uuid>()
                .map_err(|_| AppError::unauthorized_invalid_jwt())?;

            let current_user = CurrentUser {
                user_id,
                email: claims.email,
            };

            // Expose the identity to anything downstream that inspects the
            // request rather than taking the extractor directly.
            req.extensions_mut().insert(current_user.clone());

            Ok(current_user)
        })
    }
}
