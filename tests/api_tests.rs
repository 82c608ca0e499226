
use actix_web::{
    http::{header, StatusCode},
    middleware::NormalizePath,
    test, web, App,
};
use resume_manager::{
    auth::password::hash_password, middlewares::auth::AuthMiddleware, routes::configure_routes, AppState,
};
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use test_utils::test_config;

const ADMIN_PASSWORD: &str = "correct-horse-battery";

/// Builds the application over a pool that never connects; every request in
/// this file is answered before a query would run.
fn app_state() -> web::Data<AppState> {
    let config = test_config(hash_password(ADMIN_PASSWORD).unwrap());
    let pool = PgPoolOptions::new()
        .connect_lazy(&config.database_url)
        .expect("lazy pool");
    web::Data::new(AppState::new(&config, pool))
}

macro_rules! spawn_app {
    () => {
        test::init_service(
            App::new()
                .app_data(app_state())
                .wrap(AuthMiddleware)
                .wrap(NormalizePath::trim())
                .configure(configure_routes),
        )
        .await
    };
}

macro_rules! login {
    ($app:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({ "username": "admin", "password": ADMIN_PASSWORD }))
            .to_request();
        let body: Value = test::call_and_read_body_json($app, req).await;
        body["access_token"].as_str().unwrap().to_string()
    }};
}

#[actix_rt::test]
async fn home_describes_the_api() {
    let app = spawn_app!();

    let req = test::TestRequest::get().uri("/").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["api"], "/api/v1");
}

#[actix_rt::test]
async fn writes_without_token_are_rejected() {
    let app = spawn_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/persons")
        .set_json(json!({ "name": "Sara" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::delete()
        .uri("/api/v1/resumes/2b0a6c0e-6b1b-4c8e-9a57-1f3f5f8d2b11")
        .insert_header((header::AUTHORIZATION, "Bearer not.a.jwt"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}

#[actix_rt::test]
async fn login_rejects_wrong_password() {
    let app = spawn_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "username": "admin", "password": "nope-nope-nope" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn me_requires_and_echoes_the_admin_token() {
    let app = spawn_app!();

    let req = test::TestRequest::get().uri("/api/v1/auth/me").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let token = login!(&app);
    let req = test::TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["username"], "admin");
    assert_eq!(body["admin"], true);
}

#[actix_rt::test]
async fn invalid_bodies_get_json_errors() {
    let app = spawn_app!();
    let token = login!(&app);
    let bearer = format!("Bearer {token}");

    let req = test::TestRequest::post()
        .uri("/api/v1/persons")
        .insert_header((header::AUTHORIZATION, bearer.clone()))
        .insert_header(header::ContentType::json())
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().starts_with("JSON payload error"));

    let req = test::TestRequest::post()
        .uri("/api/v1/persons")
        .insert_header((header::AUTHORIZATION, bearer))
        .set_json(json!({ "name": "", "email": "broken", "phone": "0912" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Validation failed");

    let fields: Vec<&str> = body["details"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|d| d["field"].as_str())
        .collect();
    assert!(fields.contains(&"name"));
    assert!(fields.contains(&"email"));
}

#[actix_rt::test]
async fn malformed_ids_are_bad_requests() {
    let app = spawn_app!();

    let req = test::TestRequest::get().uri("/api/v1/resumes/not-a-uuid/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn unknown_sections_and_paths_are_not_found() {
    let app = spawn_app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/resumes/2b0a6c0e-6b1b-4c8e-9a57-1f3f5f8d2b11/projects")
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/api/v2/resumes").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}
