//! Tests for admin login, token checks and entity CRUD requests.

use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use axum::{
    Json, Router,
    extract::Path,
    http::{HeaderMap, StatusCode},
    routing::{delete, get, post, put},
};
use backend::api::admin::{self, SessionExpired};
use backend::config::CatalogApiConfig;
use backend::rest_utils::catalog_client::CatalogClient;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use common::admin_entity::EntityKind;
use common::session::LoginCredentials;
use serde_json::{Value, json};

async fn serve(app: Router) -> CatalogClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    CatalogClient::new(CatalogApiConfig::new(format!("http://{addr}"), Duration::from_secs(5))).expect("client")
}

fn token_expiring_in(secs: i64) -> String {
    let now = SystemTime::now().duration_since(UNIX_EPOCH).expect("clock").as_secs() as i64;
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(json!({ "exp": now + secs, "user_id": 1 }).to_string());
    format!("{header}.{payload}.sig")
}

fn credentials() -> LoginCredentials {
    LoginCredentials { username: "admin".to_string(), password: "secret".to_string() }
}

#[tokio::test]
async fn login_returns_tokens_and_user() {
    let app = Router::new().route(
        "/api/auth/admin-login/",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body, json!({ "username": "admin", "password": "secret" }));
            Json(json!({
                "access": "a.b.c",
                "refresh": "r",
                "user": { "id": 1, "username": "admin", "email": "", "is_staff": true, "is_superuser": true }
            }))
        }),
    );
    let client = serve(app).await;

    let login = admin::admin_login(&client, &credentials()).await.expect("login");
    assert_eq!(login.access, "a.b.c");
    assert!(login.user.is_superuser);
}

#[tokio::test]
async fn login_failure_uses_api_message_or_fallback() {
    let app = Router::new()
        .route(
            "/api/auth/admin-login/",
            post(|| async { (StatusCode::UNAUTHORIZED, Json(json!({ "error": "Invalid credentials" }))) }),
        );
    let client = serve(app).await;
    let err = admin::admin_login(&client, &credentials()).await.expect_err("rejected");
    assert_eq!(err.to_string(), "Invalid credentials");

    let app = Router::new().route("/api/auth/admin-login/", post(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
    let client = serve(app).await;
    let err = admin::admin_login(&client, &credentials()).await.expect_err("rejected");
    assert_eq!(err.to_string(), "Login failed. Please check your credentials.");
}

#[tokio::test]
async fn expired_token_never_reaches_the_api() {
    let hits = Arc::new(Mutex::new(0));
    let counter = hits.clone();
    let app = Router::new().route(
        "/api/auth/check-admin/",
        get(move || {
            let counter = counter.clone();
            async move {
                *counter.lock().expect("lock") += 1;
                Json(json!({ "is_admin": true, "is_superuser": false, "username": "admin" }))
            }
        }),
    );
    let client = serve(app).await;

    let err = admin::check_admin(&client, &token_expiring_in(-60)).await.expect_err("expired");
    assert!(err.downcast_ref::<SessionExpired>().is_some());
    let err = admin::check_admin(&client, "garbage").await.expect_err("malformed");
    assert!(err.downcast_ref::<SessionExpired>().is_some());
    assert_eq!(*hits.lock().expect("lock"), 0);

    let status = admin::check_admin(&client, &token_expiring_in(600)).await.expect("valid");
    assert!(status.is_admin);
    assert_eq!(*hits.lock().expect("lock"), 1);
}

#[tokio::test]
async fn refused_token_maps_to_session_expired() {
    let app = Router::new().route(
        "/api/teachers/",
        get(|| async { (StatusCode::UNAUTHORIZED, Json(json!({ "detail": "Token is invalid or expired" }))) }),
    );
    let client = serve(app).await;

    let err = admin::list_entities(&client, &token_expiring_in(600), EntityKind::Teacher)
        .await
        .expect_err("refused");
    assert!(err.downcast_ref::<SessionExpired>().is_some());
}

#[tokio::test]
async fn crud_requests_use_entity_urls_and_bearer_token() {
    let token = token_expiring_in(600);
    let expected_auth = format!("Bearer {token}");
    let seen = Arc::new(Mutex::new(Vec::<String>::new()));

    let app = {
        let (s1, s2, s3) = (seen.clone(), seen.clone(), seen.clone());
        let (a1, a2, a3) = (expected_auth.clone(), expected_auth.clone(), expected_auth.clone());
        Router::new()
            .route(
                "/api/study-programs/add/",
                post(move |headers: HeaderMap, Json(body): Json<Value>| async move {
                    assert_eq!(headers["authorization"], a1.as_str());
                    s1.lock().expect("lock").push(format!("POST add {body}"));
                    (StatusCode::CREATED, Json(json!({ "id": 9, "name": body["name"] })))
                }),
            )
            .route(
                "/api/study-programs/{id}/update/",
                put(move |Path(id): Path<u64>, headers: HeaderMap, Json(body): Json<Value>| async move {
                    assert_eq!(headers["authorization"], a2.as_str());
                    s2.lock().expect("lock").push(format!("PUT {id} {body}"));
                    Json(json!({ "id": id, "name": body["name"] }))
                }),
            )
            .route(
                "/api/study-programs/{id}/delete/",
                delete(move |Path(id): Path<u64>, headers: HeaderMap| async move {
                    assert_eq!(headers["authorization"], a3.as_str());
                    s3.lock().expect("lock").push(format!("DELETE {id}"));
                    StatusCode::NO_CONTENT
                }),
            )
    };
    let client = serve(app).await;

    let mut data = serde_json::Map::new();
    data.insert("name".to_string(), json!("Robotics"));
    data.insert("department".to_string(), json!(5));

    let created = admin::create_entity(&client, &token, EntityKind::StudyProgram, data.clone())
        .await
        .expect("create");
    let updated = admin::update_entity(&client, &token, EntityKind::StudyProgram, 9, data)
        .await
        .expect("update");
    admin::delete_entity(&client, &token, EntityKind::StudyProgram, 9)
        .await
        .expect("delete");

    assert_eq!(created["id"], 9);
    assert_eq!(updated["name"], "Robotics");
    assert_eq!(
        seen.lock().expect("lock").as_slice(),
        [
            r#"POST add {"department":5,"name":"Robotics"}"#,
            r#"PUT 9 {"department":5,"name":"Robotics"}"#,
            "DELETE 9",
        ]
    );
}

#[tokio::test]
async fn validation_errors_are_condensed_for_saves() {
    let app = Router::new()
        .route(
            "/api/courses/add/",
            post(|| async { (StatusCode::BAD_REQUEST, Json(json!({ "course_code": ["Invalid format"] }))) }),
        )
        .route("/api/teachers/add/", post(|| async { StatusCode::BAD_REQUEST }));
    let client = serve(app).await;
    let token = token_expiring_in(600);

    let err = admin::create_entity(&client, &token, EntityKind::Course, serde_json::Map::new())
        .await
        .expect_err("invalid");
    assert_eq!(err.to_string(), "course_code: Invalid format");

    let err = admin::create_entity(&client, &token, EntityKind::Teacher, serde_json::Map::new())
        .await
        .expect_err("invalid");
    assert_eq!(err.to_string(), "Failed to save teacher");
}

#[tokio::test]
async fn dashboard_counts_every_entity() {
    let mut app = Router::new();
    for (index, kind) in EntityKind::ALL.into_iter().enumerate() {
        let records = (0..=index).map(|id| json!({ "id": id })).collect::<Vec<_>>();
        app = app.route(&kind.endpoint(), get(move || async move { Json(Value::Array(records)) }));
    }
    let client = serve(app).await;

    let stats = admin::dashboard_stats(&client, &token_expiring_in(600)).await.expect("stats");

    assert_eq!(stats.count(EntityKind::Course), 1);
    assert_eq!(stats.count(EntityKind::StudyProgram), 6);
    assert_eq!(stats.counts.len(), 6);
}
