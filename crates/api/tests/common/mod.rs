#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use sqlx::PgPool;
use tower::ServiceExt;

use coursepath_api::auth::jwt::JwtConfig;
use coursepath_api::auth::password::hash_password;
use coursepath_api::config::ServerConfig;
use coursepath_api::router::build_app_router;
use coursepath_api::state::AppState;
use coursepath_db::models::user::CreateUser;
use coursepath_db::repositories::UserRepo;

/// Shared secret used to sign identity webhook deliveries in tests.
pub const TEST_WEBHOOK_SECRET: &str = "test-webhook-secret";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a fixed JWT secret, and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-jwt-secret-for-integration-tests".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
        webhook_secret: TEST_WEBHOOK_SECRET.to_string(),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This uses the same `build_app_router` as `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request to the given path.
pub async fn get(app: Router, path: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request with a bearer token.
pub async fn get_auth(app: Router, path: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(path)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body and a bearer token.
pub async fn post_json_auth(
    app: Router,
    path: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a PUT request with a JSON body and a bearer token.
pub async fn put_json_auth(
    app: Router,
    path: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(path)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a DELETE request with a bearer token.
pub async fn delete_auth(app: Router, path: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(path)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Read a response body into a `serde_json::Value`.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = http_body_util::BodyExt::collect(response.into_body())
        .await
        .unwrap()
        .to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixture helpers
// ---------------------------------------------------------------------------

/// Create a user directly in the database and return the user id plus the
/// plaintext password used.
pub async fn create_test_user(pool: &PgPool, username: &str, role: &str) -> (i64, String) {
    let password = "correct horse battery staple";
    let hashed = hash_password(password).expect("hashing should succeed");
    let input = CreateUser {
        username: username.to_string(),
        email: format!("{username}@test.edu"),
        password_hash: hashed,
        role: role.to_string(),
    };
    let user = UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed");
    (user.id, password.to_string())
}

/// Log in a user via the API and return the JSON response containing
/// `access_token`, `refresh_token`, and `user` info.
pub async fn login_user(app: Router, username: &str, password: &str) -> serde_json::Value {
    let body = serde_json::json!({ "username": username, "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

/// Create a user, log them in, and return `(user_id, access_token)`.
pub async fn authed_user(pool: &PgPool, username: &str, role: &str) -> (i64, String) {
    let (user_id, password) = create_test_user(pool, username, role).await;
    let app = build_test_app(pool.clone());
    let json = login_user(app, username, &password).await;
    let token = json["access_token"]
        .as_str()
        .expect("login response must contain access_token")
        .to_string();
    (user_id, token)
}

/// Insert a course directly into the catalog table.
pub async fn insert_course(
    pool: &PgPool,
    code: &str,
    name: &str,
    category: &str,
    prerequisites: &[&str],
    credits: Option<i32>,
) {
    sqlx::query(
        "INSERT INTO courses (code, name, category, prerequisites, credits)
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(code)
    .bind(name)
    .bind(category)
    .bind(serde_json::json!(prerequisites))
    .bind(credits)
    .execute(pool)
    .await
    .expect("course insert should succeed");
}

/// Seed a small computer-science catalog used across eligibility tests.
///
/// CSC101 (no prereqs) -> CSC201 (CSC101) -> CSC301 (CSC201)
/// MTH101 (no prereqs, Mathematics), CSC210 (CSC101, 4 credits)
pub async fn seed_catalog(pool: &PgPool) {
    insert_course(pool, "CSC101", "Intro to Programming", "Computer Science", &[], Some(3)).await;
    insert_course(pool, "CSC201", "Data Structures", "Computer Science", &["CSC101"], Some(3))
        .await;
    insert_course(
        pool,
        "CSC301",
        "Algorithms",
        "Computer Science",
        &["CSC201"],
        Some(3),
    )
    .await;
    insert_course(pool, "MTH101", "Calculus I", "Mathematics", &[], Some(4)).await;
    insert_course(
        pool,
        "CSC210",
        "Computer Organization",
        "Computer Science",
        &["CSC101"],
        Some(4),
    )
    .await;
}
