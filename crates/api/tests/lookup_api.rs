//! Integration tests for the reference-data endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, seeded_app};
use cultores_core::lookup::seed;
use serde_json::Value;
use sqlx::PgPool;

fn ids(json: &Value) -> Vec<i64> {
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_i64().unwrap())
        .collect()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn lists_are_complete_and_sorted(pool: PgPool) {
    let app = seeded_app(pool).await;

    let cases = [
        ("/api/v1/municipalities", seed::municipalities().len()),
        ("/api/v1/parishes", seed::parishes().len()),
        ("/api/v1/art-categories", seed::art_categories().len()),
        ("/api/v1/art-disciplines", seed::art_disciplines().len()),
    ];
    for (uri, expected) in cases {
        let response = get(app.clone(), uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        let listed = ids(&body_json(response).await);
        assert_eq!(listed.len(), expected, "{uri}");
        assert!(listed.windows(2).all(|w| w[0] < w[1]), "{uri} not sorted");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn parishes_of_municipality(pool: PgPool) {
    let app = seeded_app(pool).await;

    let response = get(app.clone(), "/api/v1/municipalities/14/parishes").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let parishes = json["data"].as_array().unwrap();
    assert!(!parishes.is_empty());
    assert!(parishes.iter().all(|p| p["municipality_id"] == 14));

    let response = get(app, "/api/v1/municipalities/999/parishes").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn disciplines_of_category_include_sentinel(pool: PgPool) {
    let app = seeded_app(pool).await;

    let response = get(app.clone(), "/api/v1/art-categories/3/disciplines").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let disciplines = json["data"].as_array().unwrap();
    assert!(disciplines.iter().all(|d| d["art_category_id"] == 3));
    assert_eq!(
        disciplines.iter().filter(|d| d["name"] == "Otra...").count(),
        1
    );

    let response = get(app, "/api/v1/art-categories/999/disciplines").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
