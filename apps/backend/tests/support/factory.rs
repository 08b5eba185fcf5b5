//! Request-level fixtures shared by the integration suites.

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, Error};
use serde_json::json;

/// Sign up a user through the real endpoint and return `(token, user view)`.
pub async fn signup_user<S>(app: &S, email: &str, password: &str) -> (String, serde_json::Value)
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(json!({
            "firstname": "Test",
            "lastname": "User",
            "email": email,
            "password": password,
        }))
        .to_request();

    let resp = test::call_service(app, req).await;
    assert_eq!(
        resp.status().as_u16(),
        201,
        "signup fixture should succeed for {email}"
    );

    let body: serde_json::Value = test::read_body_json(resp).await;
    let token = body["token"].as_str().expect("token in response").to_string();
    (token, body["user"].clone())
}

/// Create a project through the real endpoint and return its view.
pub async fn create_project<S>(app: &S, token: &str, name: &str) -> serde_json::Value
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::post()
        .uri("/api/projects")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(json!({ "name": name }))
        .to_request();

    let resp = test::call_service(app, req).await;
    assert_eq!(
        resp.status().as_u16(),
        201,
        "project fixture should succeed for {name}"
    );

    test::read_body_json(resp).await
}
