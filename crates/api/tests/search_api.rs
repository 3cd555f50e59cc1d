//! HTTP-level integration tests for metadata search over the serialized
//! attribute bag.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_event_with_metadata, get};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Substring mode
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_substring_search_finds_matches_case_insensitively(pool: PgPool) {
    create_event_with_metadata(
        pool.clone(),
        "Yerevan",
        "low",
        60,
        serde_json::json!({"organizer": "Shant TV", "vip": true}),
    )
    .await;
    create_event_with_metadata(
        pool.clone(),
        "Gyumri",
        "low",
        30,
        serde_json::json!({"organizer": "city hall"}),
    )
    .await;
    // No metadata at all; must never match.
    common::create_event(pool.clone(), "Vanadzor", "low", 45).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/queries/fulltext_search_events?q=shant").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["total"].as_i64().unwrap(), 1);
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["city"], "Yerevan");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_substring_search_reports_total_across_pages(pool: PgPool) {
    for i in 0..3 {
        create_event_with_metadata(
            pool.clone(),
            "Yerevan",
            "low",
            60 + i,
            serde_json::json!({"tag": "festival"}),
        )
        .await;
    }

    let app = common::build_test_app(pool);
    let response = get(
        app,
        "/api/v1/queries/fulltext_search_events?q=festival&limit=2&offset=2",
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["total"].as_i64().unwrap(), 3);
    assert_eq!(json["limit"].as_i64().unwrap(), 2);
    assert_eq!(json["offset"].as_i64().unwrap(), 2);
    assert_eq!(json["items"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_substring_search_rejects_single_character_query(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/queries/fulltext_search_events?q=a").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_substring_search_rejects_whitespace_padded_short_query(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/queries/fulltext_search_events?q=%20%20x%20%20").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_substring_search_treats_like_metacharacters_literally(pool: PgPool) {
    create_event_with_metadata(
        pool.clone(),
        "Yerevan",
        "low",
        60,
        serde_json::json!({"note": "100% sold out"}),
    )
    .await;
    create_event_with_metadata(
        pool.clone(),
        "Gyumri",
        "low",
        30,
        serde_json::json!({"note": "100 tickets"}),
    )
    .await;

    let app = common::build_test_app(pool);
    // "100%" must only match the literal percent sign, not act as a wildcard.
    let response = get(app, "/api/v1/queries/fulltext_search_events?q=100%25").await;
    let json = body_json(response).await;
    assert_eq!(json["total"].as_i64().unwrap(), 1);
    assert_eq!(json["items"][0]["city"], "Yerevan");
}

// ---------------------------------------------------------------------------
// Regex mode
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_regex_search_matches_pattern(pool: PgPool) {
    create_event_with_metadata(
        pool.clone(),
        "Yerevan",
        "low",
        60,
        serde_json::json!({"vip": true}),
    )
    .await;
    create_event_with_metadata(
        pool.clone(),
        "Gyumri",
        "low",
        30,
        serde_json::json!({"vip": false}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(
        app,
        "/api/v1/queries/regex_search_events?pattern=%22vip%22%3A%20true",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["total"].as_i64().unwrap(), 1);
    assert_eq!(json["items"][0]["city"], "Yerevan");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_regex_search_case_sensitivity_flag(pool: PgPool) {
    create_event_with_metadata(
        pool.clone(),
        "Yerevan",
        "low",
        60,
        serde_json::json!({"organizer": "SHANT"}),
    )
    .await;

    // Default is case-insensitive.
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/queries/regex_search_events?pattern=shant").await;
    let json = body_json(response).await;
    assert_eq!(json["total"].as_i64().unwrap(), 1);

    // Case-sensitive mode does not match a lowercase pattern.
    let app = common::build_test_app(pool);
    let response = get(
        app,
        "/api/v1/queries/regex_search_events?pattern=shant&case_sensitive=true",
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["total"].as_i64().unwrap(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_regex_search_rejects_empty_pattern(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/queries/regex_search_events?pattern=").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_regex_search_rejects_oversized_pattern(pool: PgPool) {
    let long = "a".repeat(501);
    let app = common::build_test_app(pool);
    let response = get(
        app,
        &format!("/api/v1/queries/regex_search_events?pattern={long}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_invalid_regex_is_a_pattern_error_not_a_store_failure(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(
        app,
        "/api/v1/queries/regex_search_events?pattern=%5Bunclosed",
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "PATTERN_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_regex_rejected_by_postgres_is_a_pattern_error(pool: PgPool) {
    // `(?P<a>x)` compiles locally but Postgres ARE does not accept the
    // `(?P<...>)` named-group syntax, so the rejection happens in the store.
    create_event_with_metadata(
        pool.clone(),
        "Yerevan",
        "low",
        60,
        serde_json::json!({"vip": true}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(
        app,
        "/api/v1/queries/regex_search_events?pattern=%28%3FP%3Ca%3Ex%29",
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "PATTERN_ERROR");
}

// ---------------------------------------------------------------------------
// Legacy JSON search
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_search_events_json_returns_matching_events(pool: PgPool) {
    create_event_with_metadata(
        pool.clone(),
        "Yerevan",
        "low",
        60,
        serde_json::json!({"theme": "jazz"}),
    )
    .await;
    common::create_event(pool.clone(), "Gyumri", "low", 30).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/queries/search_events_json?q=jazz").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["extra_metadata"]["theme"], "jazz");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_search_events_json_rejects_invalid_regex(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/queries/search_events_json?q=%28%3FP%3C").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "PATTERN_ERROR");
}
