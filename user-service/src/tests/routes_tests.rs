use axum::http::{header, StatusCode};
use roster_shared::test_utils::http_test_utils::{
    empty_request, json_request, response_to_bytes, response_to_json,
};
use roster_shared::test_utils::sqlite_test_utils::TestDb;
use roster_shared::test_utils::test_logging::init_test_logging;
use serde_json::json;
use std::net::{IpAddr, Ipv4Addr};
use tower::ServiceExt;

use super::utils::{create_sqlite_test_app, create_test_app};
use crate::config::Config;
use crate::routes::create_router;

#[tokio::test]
async fn test_unknown_route_falls_back_to_404() {
    let (app, _repo) = create_test_app(vec![]);

    let response = app
        .oneshot(empty_request("GET", "/accounts"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response_to_bytes(response).await;
    assert_eq!(body, b"The requested resource was not found");
}

#[tokio::test]
async fn test_unsupported_method_is_rejected() {
    let (app, _repo) = create_test_app(vec![]);

    let response = app
        .oneshot(empty_request("PATCH", "/users"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_cors_headers_present() {
    let (app, _repo) = create_test_app(vec![]);

    let mut request = empty_request("GET", "/users");
    request
        .headers_mut()
        .insert(header::ORIGIN, "http://localhost:8080".parse().unwrap());

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn test_prefixed_routes() {
    let (app, _db) = create_sqlite_test_app("/api").await;

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/api/users"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/users"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/users",
            &json!({"name": "Ada Lovelace", "email": "ada@example.com"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let location = response.headers()[header::LOCATION]
        .to_str()
        .unwrap()
        .to_string();
    assert!(location.starts_with("/api/users/"), "location was {}", location);

    let response = app.oneshot(empty_request("GET", &location)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_create_router_from_config_serves_seeded_users() {
    init_test_logging();
    let db = TestDb::new().await;
    let config = Config {
        database_url: db.database_url().to_string(),
        max_connections: 2,
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        route_prefix: "/api".to_string(),
    };

    let app = create_router(&config).await.unwrap();
    let response = app.oneshot(empty_request("GET", "/api/users")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_to_json(response).await;
    let emails: Vec<&str> = json
        .as_array()
        .expect("Response should be an array")
        .iter()
        .map(|u| u["email"].as_str().unwrap())
        .collect();
    assert_eq!(emails.len(), 2);
    assert!(emails.contains(&"jon.doe@example.com"));
    assert!(emails.contains(&"isaac.ai@example.com"));

    // A second start against the same file finds the table and leaves it alone
    let app = create_router(&config).await.unwrap();
    let response = app
        .oneshot(empty_request("GET", "/api/users/email/jon.doe@example.com"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_to_json(response).await;
    assert_eq!(json["name"], "Jon Doe");
    assert_eq!(db.count_users().await, 2);
}

#[tokio::test]
async fn test_openapi_document() {
    let (app, _db) = create_sqlite_test_app("/api").await;

    let response = app
        .oneshot(empty_request("GET", "/api-docs/openapi.json"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let doc = response_to_json(response).await;
    assert_eq!(doc["info"]["title"], "Repository Pattern Demo API");
    assert_eq!(doc["info"]["version"], "v1");

    let paths = &doc["paths"];
    for method in ["get", "post"] {
        assert!(paths["/users"][method].is_object(), "missing {} /users", method);
    }
    for method in ["get", "put", "delete"] {
        assert!(
            paths["/users/{id}"][method].is_object(),
            "missing {} /users/{{id}}",
            method
        );
    }
    assert!(paths["/users/email/{email}"]["get"].is_object());

    assert!(paths["/users"]["post"]["responses"]["201"].is_object());
    assert!(paths["/users/{id}"]["put"]["responses"]["204"].is_object());
    assert!(paths["/users/{id}"]["delete"]["responses"]["404"].is_object());

    let schemas = &doc["components"]["schemas"];
    assert!(schemas["User"]["properties"]["createdAt"].is_object());
    assert!(schemas["ErrorResponse"]["properties"]["error"].is_object());
}
