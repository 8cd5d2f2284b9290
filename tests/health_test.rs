// HTTP surface served after bootstrap

mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use pharmacy::db::seed::{seed_admin_user, AdminSeed};
use pharmacy::AppState;
use tower::ServiceExt; // for `oneshot`

#[tokio::test]
async fn test_health_reports_user_count() {
    let users = common::setup_test_repo().await;
    seed_admin_user(&users, &common::test_hasher(), &AdminSeed::default())
        .await
        .unwrap();
    let app = pharmacy::create_router(AppState { users });

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["users"], 1);
}

#[tokio::test]
async fn test_health_fails_when_store_is_down() {
    let pool = common::setup_test_db().await;
    let users = pharmacy::db::SqliteUserRepository::new(pool.clone());
    pool.close().await;
    let app = pharmacy::create_router(AppState { users });

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body_str = String::from_utf8(body.to_vec()).unwrap();
    assert!(body_str.contains("Database error"));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let users = common::setup_test_repo().await;
    let app = pharmacy::create_router(AppState { users });

    let response = app
        .oneshot(Request::builder().uri("/admin").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
