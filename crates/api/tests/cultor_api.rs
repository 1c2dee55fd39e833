//! Integration tests for the `/api/v1/cultors` endpoints.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_cultor, cultor_payload, delete, get, post_json, put_json, seeded_app,
};
use serde_json::{json, Value};
use sqlx::PgPool;

fn violation_fields(json: &Value) -> Vec<String> {
    json["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["field"].as_str().unwrap().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_normalizes_and_returns_201(pool: PgPool) {
    let app = seeded_app(pool).await;
    let response = post_json(
        app,
        "/api/v1/cultors",
        cultor_payload("V-12345678", "0412-1234567"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let data = &json["data"];
    assert!(data["id"].is_i64());
    assert_eq!(data["first_name"], "María José");
    assert_eq!(data["last_name"], "Rodríguez");
    assert_eq!(data["gender"], "F");
    assert_eq!(data["email"], "maria.rodriguez@example.com");
    assert_eq!(data["instagram_user"], Value::Null);
    assert_eq!(data["home_address"], "Av. Bolívar, Casa 12");
    assert_eq!(data["birth_date"], "1990-05-20");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_then_get_returns_same_record(pool: PgPool) {
    let app = seeded_app(pool).await;
    let created = create_cultor(app.clone(), "V-12345678", "0412-1234567").await;
    let id = created["id"].as_i64().unwrap();

    let response = get(app, &format!("/api/v1/cultors/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"], created);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_reports_every_invalid_field(pool: PgPool) {
    let app = seeded_app(pool).await;
    let mut payload = cultor_payload("X-1", "0411-1234567");
    payload["gender"] = json!("x");
    payload["email"] = json!("not-an-email");

    let response = post_json(app, "/api/v1/cultors", payload).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    let fields = violation_fields(&json);
    for field in ["gender", "id_number", "phone_number", "email"] {
        assert!(fields.contains(&field.to_string()), "missing {field} in {fields:?}");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_rejects_parish_outside_municipality(pool: PgPool) {
    let app = seeded_app(pool).await;
    let mut payload = cultor_payload("V-12345678", "0412-1234567");
    payload["parish_id"] = json!(1); // Bejuma parish, municipality 1

    let response = post_json(app, "/api/v1/cultors", payload).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(violation_fields(&json), vec!["parish_id", "municipality_id"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_requires_detail_for_other_discipline(pool: PgPool) {
    let app = seeded_app(pool).await;
    let mut payload = cultor_payload("V-12345678", "0412-1234567");
    payload["art_discipline_id"] = json!(14); // "Otra..." in Música

    let response = post_json(app.clone(), "/api/v1/cultors", payload.clone()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(violation_fields(&json), vec!["other_discipline"]);

    payload["other_discipline"] = json!("joropo llanero");
    let response = post_json(app, "/api/v1/cultors", payload).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["other_discipline"], "Joropo Llanero");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_with_unknown_reference_returns_404(pool: PgPool) {
    let app = seeded_app(pool).await;
    let mut payload = cultor_payload("V-12345678", "0412-1234567");
    payload["art_category_id"] = json!(999);

    let response = post_json(app, "/api/v1/cultors", payload).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "ArtCategory with id 999 not found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_with_duplicate_id_number_returns_409(pool: PgPool) {
    let app = seeded_app(pool).await;
    create_cultor(app.clone(), "V-12345678", "0412-1234567").await;

    let mut payload = cultor_payload("V-12345678", "0414-7654321");
    payload["email"] = Value::Null;
    let response = post_json(app, "/api/v1/cultors", payload).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "DUPLICATE");
    assert_eq!(json["field"], "id_number");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn update_replaces_mutable_fields(pool: PgPool) {
    let app = seeded_app(pool).await;
    let created = create_cultor(app.clone(), "V-12345678", "0412-1234567").await;
    let id = created["id"].as_i64().unwrap();

    let mut payload = cultor_payload("V-12345678", "0412-1234567");
    payload["email"] = Value::Null;
    payload["group_name"] = json!("coro  de   valencia");
    payload["years_of_experience"] = json!(13);

    let response = put_json(app, &format!("/api/v1/cultors/{id}"), payload).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["group_name"], "Coro De Valencia");
    assert_eq!(json["data"]["years_of_experience"], 13);
    assert_eq!(json["data"]["created_at"], created["created_at"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_rejects_changed_id_number(pool: PgPool) {
    let app = seeded_app(pool).await;
    let created = create_cultor(app.clone(), "V-12345678", "0412-1234567").await;
    let id = created["id"].as_i64().unwrap();

    let payload = cultor_payload("V-87654321", "0412-1234567");
    let response = put_json(app, &format!("/api/v1/cultors/{id}"), payload).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "IMMUTABLE_FIELD");
    assert_eq!(json["field"], "id_number");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_rejects_changed_birth_date(pool: PgPool) {
    let app = seeded_app(pool).await;
    let created = create_cultor(app.clone(), "V-12345678", "0412-1234567").await;
    let id = created["id"].as_i64().unwrap();

    let mut payload = cultor_payload("V-12345678", "0412-1234567");
    payload["birth_date"] = json!("1991-05-20");
    let response = put_json(app, &format!("/api/v1/cultors/{id}"), payload).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["field"], "birth_date");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_reusing_another_phone_returns_409(pool: PgPool) {
    let app = seeded_app(pool).await;
    create_cultor(app.clone(), "V-11111111", "0412-1111111").await;
    let second = create_cultor(app.clone(), "V-22222222", "0414-2222222").await;
    let id = second["id"].as_i64().unwrap();

    let mut payload = cultor_payload("V-22222222", "0412-1111111");
    payload["email"] = Value::Null;
    let response = put_json(app, &format!("/api/v1/cultors/{id}"), payload).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "DUPLICATE");
    assert_eq!(json["field"], "phone_number");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_missing_cultor_returns_404(pool: PgPool) {
    let app = seeded_app(pool).await;
    let response = put_json(
        app,
        "/api/v1/cultors/999999",
        cultor_payload("V-12345678", "0412-1234567"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_removes_cultor(pool: PgPool) {
    let app = seeded_app(pool).await;
    let created = create_cultor(app.clone(), "V-12345678", "0412-1234567").await;
    let uri = format!("/api/v1/cultors/{}", created["id"]);

    let response = delete(app.clone(), &uri).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert_eq!(get(app.clone(), &uri).await.status(), StatusCode::NOT_FOUND);
    assert_eq!(delete(app, &uri).await.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_filters_and_paginates(pool: PgPool) {
    let app = seeded_app(pool).await;
    let first = create_cultor(app.clone(), "V-11111111", "0412-1111111").await;
    let second = create_cultor(app.clone(), "V-22222222", "0414-2222222").await;

    let mut other = cultor_payload("E-33333333", "0416-3333333");
    other["email"] = Value::Null;
    other["first_name"] = json!("Pedro");
    other["last_name"] = json!("Gil");
    other["gender"] = json!("M");
    other["disability"] = json!("Auditiva");
    let response = post_json(app.clone(), "/api/v1/cultors", other).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let third = body_json(response).await["data"].clone();

    let ids = |json: &Value| -> Vec<Value> {
        json["data"]["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["id"].clone())
            .collect()
    };

    let json = body_json(get(app.clone(), "/api/v1/cultors").await).await;
    assert_eq!(json["data"]["total"], 3);
    assert_eq!(json["data"]["limit"], 20);
    assert_eq!(
        ids(&json),
        vec![first["id"].clone(), second["id"].clone(), third["id"].clone()]
    );

    let json = body_json(get(app.clone(), "/api/v1/cultors?query=mar%C3%ADa%20rod").await).await;
    assert_eq!(ids(&json), vec![first["id"].clone(), second["id"].clone()]);

    let json = body_json(get(app.clone(), "/api/v1/cultors?gender=m").await).await;
    assert_eq!(ids(&json), vec![third["id"].clone()]);

    let json = body_json(get(app.clone(), "/api/v1/cultors?has_disability=false").await).await;
    assert_eq!(ids(&json), vec![first["id"].clone(), second["id"].clone()]);

    let json = body_json(get(app.clone(), "/api/v1/cultors?query=2222").await).await;
    assert_eq!(ids(&json), vec![second["id"].clone()]);

    let json = body_json(get(app.clone(), "/api/v1/cultors?limit=1&offset=1").await).await;
    assert_eq!(json["data"]["total"], 3);
    assert_eq!(ids(&json), vec![second["id"].clone()]);

    let json = body_json(get(app, "/api/v1/cultors?limit=500").await).await;
    assert_eq!(json["data"]["limit"], 100);
}
