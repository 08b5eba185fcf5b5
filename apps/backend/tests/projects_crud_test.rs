// Integration tests for the projects resource.
//
// Reads are public; create, update and delete require a bearer token.

use actix_web::test;
use backend_test_support::unique_helpers::{unique_email, unique_str};
use serde_json::json;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

mod common;
mod support;

use common::assert_problem_details_structure;
use support::app_builder::create_test_app;
use support::factory::{create_project, signup_user};
use support::test_state::build_test_state;

fn parse_stamp(value: &serde_json::Value) -> OffsetDateTime {
    OffsetDateTime::parse(value.as_str().expect("timestamp string"), &Rfc3339)
        .expect("RFC 3339 timestamp")
}

#[actix_web::test]
async fn test_create_requires_token() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/api/projects")
        .set_json(json!({ "name": "Skunkworks" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 401);

    Ok(())
}

#[actix_web::test]
async fn test_create_and_read_project() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let (token, _) = signup_user(&app, &unique_email("proj"), "pw").await;

    let req = test::TestRequest::post()
        .uri("/api/projects")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(json!({
            "name": "Skunkworks",
            "description": "Under the radar",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 201);
    let created: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(created["name"].as_str(), Some("Skunkworks"));
    assert_eq!(created["description"].as_str(), Some("Under the radar"));
    let id = created["id"].as_str().unwrap();

    // Reads are public
    let req = test::TestRequest::get()
        .uri(&format!("/api/projects/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let req = test::TestRequest::get().uri("/api/projects").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let list: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(list.as_array().map(Vec::len), Some(1));

    Ok(())
}

#[actix_web::test]
async fn test_create_rejects_empty_name() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let (token, _) = signup_user(&app, &unique_email("proj"), "pw").await;

    let req = test::TestRequest::post()
        .uri("/api/projects")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(json!({ "name": "   " }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(
        resp,
        400,
        "INVALID_PROJECT_NAME",
        "Project name cannot be empty",
    )
    .await;

    Ok(())
}

#[actix_web::test]
async fn test_project_id_errors() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get()
        .uri("/api/projects/nope")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 400, "INVALID_PROJECT_ID", "Invalid id: nope").await;

    let unknown = uuid::Uuid::new_v4();
    let req = test::TestRequest::get()
        .uri(&format!("/api/projects/{unknown}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(
        resp,
        404,
        "PROJECT_NOT_FOUND",
        &format!("Project {unknown} not found"),
    )
    .await;

    Ok(())
}

#[actix_web::test]
async fn test_update_project_partial() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let (token, _) = signup_user(&app, &unique_email("proj"), "pw").await;
    let project = create_project(&app, &token, &unique_str("proj")).await;
    let id = project["id"].as_str().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/api/projects/{id}"))
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(json!({ "description": "Now documented" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let updated: serde_json::Value = test::read_body_json(resp).await;
    // Name untouched, description set, stamp advanced
    assert_eq!(updated["name"], project["name"]);
    assert_eq!(updated["description"].as_str(), Some("Now documented"));
    assert!(parse_stamp(&updated["updatedAt"]) > parse_stamp(&project["updatedAt"]));

    // Mutation without a token is rejected
    let req = test::TestRequest::put()
        .uri(&format!("/api/projects/{id}"))
        .set_json(json!({ "name": "Hijacked" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 401);

    Ok(())
}

#[actix_web::test]
async fn test_delete_project() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let (token, _) = signup_user(&app, &unique_email("proj"), "pw").await;
    let project = create_project(&app, &token, &unique_str("doomed")).await;
    let id = project["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/projects/{id}"))
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"].as_str(), Some("Project deleted"));

    let req = test::TestRequest::get()
        .uri(&format!("/api/projects/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);

    Ok(())
}

#[actix_web::test]
async fn test_health_endpoint() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    Ok(())
}
