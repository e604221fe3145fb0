//! HTTP-level integration tests for the `/rooms` resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn listing(category: &str, host_email: &str) -> serde_json::Value {
    json!({
        "title": format!("{category} place"),
        "category": category,
        "price": 120,
        "host": {"email": host_email, "name": "Host"}
    })
}

/// Create a listing via the API and return the assigned id.
async fn create_listing(app: axum::Router, category: &str, host_email: &str) -> String {
    let response = post_json(app, "/api/v1/rooms", listing(category, host_email)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    body["id"].as_str().expect("creation must return an id").to_string()
}

// ---------------------------------------------------------------------------
// Create / lookup
// ---------------------------------------------------------------------------

/// Creation returns 201 with the store-assigned identifier, and the record
/// round-trips through a direct lookup.
#[sqlx::test(migrations = "../db/migrations")]
async fn create_and_get_room(pool: PgPool) {
    let app = common::build_test_app(pool);

    let id = create_listing(app.clone(), "beach", "h@x.com").await;

    let response = get(app, &format!("/api/v1/rooms/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let record = body_json(response).await;
    assert_eq!(record["id"], id.as_str());
    assert_eq!(record["fields"]["category"], "beach");
    assert_eq!(record["fields"]["host"]["email"], "h@x.com");
    assert_eq!(record["fields"]["price"], 120);
}

/// A listing without the required fields is rejected before any write.
#[sqlx::test(migrations = "../db/migrations")]
async fn create_without_required_fields_is_bad_request(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app.clone(), "/api/v1/rooms", json!({"title": "No category"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(app, "/api/v1/rooms", json!({"category": "beach"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// A malformed identifier is a 400 client error, not a crash.
#[sqlx::test(migrations = "../db/migrations")]
async fn get_with_malformed_id_is_bad_request(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/rooms/not-a-uuid").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "MALFORMED_ID");
}

/// Looking up an id that was never assigned succeeds with a null body.
#[sqlx::test(migrations = "../db/migrations")]
async fn get_absent_room_returns_null(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/rooms/67e55044-10b1-426f-9247-bb680e5fe0c8").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::Value::Null);
}

// ---------------------------------------------------------------------------
// Category filter
// ---------------------------------------------------------------------------

/// No parameter and the literal `"null"` both mean "no filter"; a concrete
/// category returns exactly the matching subset.
#[sqlx::test(migrations = "../db/migrations")]
async fn list_rooms_category_filter(pool: PgPool) {
    let app = common::build_test_app(pool);

    create_listing(app.clone(), "beach", "h@x.com").await;
    create_listing(app.clone(), "beach", "h@x.com").await;
    create_listing(app.clone(), "cabin", "h@x.com").await;

    let all = body_json(get(app.clone(), "/api/v1/rooms").await).await;
    assert_eq!(all.as_array().map(Vec::len), Some(3));

    let sentinel = body_json(get(app.clone(), "/api/v1/rooms?category=null").await).await;
    assert_eq!(sentinel.as_array().map(Vec::len), Some(3));

    let beach = body_json(get(app, "/api/v1/rooms?category=beach").await).await;
    let beach = beach.as_array().unwrap();
    assert_eq!(beach.len(), 2);
    assert!(beach.iter().all(|r| r["fields"]["category"] == "beach"));
}

// ---------------------------------------------------------------------------
// Ownership filter
// ---------------------------------------------------------------------------

/// The host listing is scoped to rooms whose nested host email matches.
#[sqlx::test(migrations = "../db/migrations")]
async fn list_by_host_scopes_to_owner(pool: PgPool) {
    let app = common::build_test_app(pool);

    create_listing(app.clone(), "beach", "a@x.com").await;
    create_listing(app.clone(), "cabin", "a@x.com").await;
    create_listing(app.clone(), "beach", "b@x.com").await;

    let mine = body_json(get(app.clone(), "/api/v1/rooms/host/a@x.com").await).await;
    let mine = mine.as_array().unwrap();
    assert_eq!(mine.len(), 2);
    assert!(mine.iter().all(|r| r["fields"]["host"]["email"] == "a@x.com"));

    let nobody = body_json(get(app, "/api/v1/rooms/host/c@x.com").await).await;
    assert_eq!(nobody.as_array().map(Vec::len), Some(0));
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

/// Deleting twice succeeds both times; the second reports zero deleted.
#[sqlx::test(migrations = "../db/migrations")]
async fn delete_room_is_idempotent(pool: PgPool) {
    let app = common::build_test_app(pool);

    let id = create_listing(app.clone(), "beach", "h@x.com").await;

    let first = delete(app.clone(), &format!("/api/v1/rooms/{id}")).await;
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(body_json(first).await["deleted"], 1);

    let second = delete(app.clone(), &format!("/api/v1/rooms/{id}")).await;
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(body_json(second).await["deleted"], 0);

    let gone = get(app, &format!("/api/v1/rooms/{id}")).await;
    assert_eq!(body_json(gone).await, serde_json::Value::Null);
}

/// Deleting with a malformed identifier is a 400, same as lookup.
#[sqlx::test(migrations = "../db/migrations")]
async fn delete_with_malformed_id_is_bad_request(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = delete(app, "/api/v1/rooms/definitely-not-an-id").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
