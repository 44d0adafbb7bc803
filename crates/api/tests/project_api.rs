//! HTTP-level integration tests for the `/projects` resource: creation,
//! filtered listing, the assembled detail view, and photo entries.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, post_json_auth};
use sqlx::PgPool;

/// Sign up a throwaway user and return its access token.
async fn access_token(pool: &PgPool, email: &str) -> String {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "email": email, "password": "a-strong-password" });
    let response = post_json(app, "/api/v1/auth/signup", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["access_token"].as_str().unwrap().to_string()
}

/// Look up a seeded profession id by title via the API.
async fn profession_id(pool: &PgPool, title: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/professions").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["title"] == title)
        .unwrap_or_else(|| panic!("profession '{title}' should be seeded"))["id"]
        .as_i64()
        .unwrap()
}

/// Create a project via the API and return its JSON.
async fn create_project(pool: &PgPool, token: &str, body: serde_json::Value) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/projects", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_requires_authentication(pool: PgPool) {
    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "name": "Fence repair",
        "location": "Hilltop Park",
        "category": "Repair",
        "roles_required": [1]
    });
    let response = post_json(app, "/api/v1/projects", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_rejects_draft_without_roles(pool: PgPool) {
    let token = access_token(&pool, "creator@example.com").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "name": "Fence repair",
        "location": "Hilltop Park",
        "category": "Repair",
        "roles_required": []
    });
    let response = post_json_auth(app, "/api/v1/projects", body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Pick at least one role.");

    // The rejected draft must not have been inserted.
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/projects").await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_normalizes_and_returns_the_project(pool: PgPool) {
    let token = access_token(&pool, "creator@example.com").await;
    let mason = profession_id(&pool, "Mason").await;

    let project = create_project(
        &pool,
        &token,
        serde_json::json!({
            "name": "  Fence repair  ",
            "location": "Hilltop Park",
            "category": "Repair",
            "details": "   ",
            "tools_needed": ["Hammer", "  ", "Saw"],
            "roles_required": [mason]
        }),
    )
    .await;

    assert_eq!(project["name"], "Fence repair");
    assert_eq!(project["details"], serde_json::Value::Null);
    assert_eq!(
        project["tools_needed"],
        serde_json::json!(["Hammer", "Saw"])
    );
    assert_eq!(project["roles_required"], serde_json::json!([mason]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_accepts_comma_separated_tools(pool: PgPool) {
    let token = access_token(&pool, "creator@example.com").await;
    let mason = profession_id(&pool, "Mason").await;

    let project = create_project(
        &pool,
        &token,
        serde_json::json!({
            "name": "Drain clearing",
            "location": "Low street",
            "category": "Maintenance",
            "tools_needed": "shovel, gloves , ,wheelbarrow",
            "roles_required": [mason]
        }),
    )
    .await;

    assert_eq!(
        project["tools_needed"],
        serde_json::json!(["shovel", "gloves", "wheelbarrow"])
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_invalidates_the_cached_listing(pool: PgPool) {
    let token = access_token(&pool, "lister@example.com").await;
    let mason = profession_id(&pool, "Mason").await;

    // One app instance throughout, so every request shares one cache.
    // A cold build per request would never observe invalidation.
    let app = common::build_test_app(pool);

    // Prime the cache with an empty listing.
    let response = get(app.clone(), "/api/v1/projects").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);

    for name in ["First project", "Second project"] {
        let body = serde_json::json!({
            "name": name,
            "location": "Town hall",
            "category": "Build",
            "roles_required": [mason]
        });
        let response = post_json_auth(app.clone(), "/api/v1/projects", body, &token).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    // The primed snapshot must have been dropped: the same cache now
    // serves both rows, newest first.
    let response = get(app, "/api/v1/projects").await;
    let json = body_json(response).await;
    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();

    assert_eq!(names, vec!["Second project", "First project"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_filters_by_text_roles_and_tool(pool: PgPool) {
    let token = access_token(&pool, "filterer@example.com").await;
    let mason = profession_id(&pool, "Mason").await;
    let painter = profession_id(&pool, "Painter").await;

    create_project(
        &pool,
        &token,
        serde_json::json!({
            "name": "Garden wall",
            "location": "Riverside",
            "category": "Build",
            "tools_needed": ["Trowel"],
            "roles_required": [mason]
        }),
    )
    .await;
    create_project(
        &pool,
        &token,
        serde_json::json!({
            "name": "Mural refresh",
            "location": "School yard",
            "category": "Decoration",
            "tools_needed": ["Paintbrush", "Ladder"],
            "roles_required": [painter]
        }),
    )
    .await;

    // Free text matches name, location, or category (case-insensitive).
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/projects?q=riverside").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["name"], "Garden wall");

    // Role filter matches any required role.
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/projects?roles={painter}")).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["name"], "Mural refresh");

    // Tool filter is a case-insensitive substring over the tool list.
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/projects?tool=paint").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["name"], "Mural refresh");

    // Criteria combine conjunctively.
    let app = common::build_test_app(pool.clone());
    let json =
        body_json(get(app, &format!("/api/v1/projects?q=wall&roles={painter}")).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);

    // Inactive criteria leave the listing unconstrained.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/projects?q=&roles=&tool=").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn detail_resolves_role_titles_in_required_order(pool: PgPool) {
    let token = access_token(&pool, "detailer@example.com").await;
    let mason = profession_id(&pool, "Mason").await;
    let carpenter = profession_id(&pool, "Carpenter").await;
    let painter = profession_id(&pool, "Painter").await;

    let project = create_project(
        &pool,
        &token,
        serde_json::json!({
            "name": "Community shed",
            "location": "Allotments",
            "category": "Build",
            "roles_required": [painter, mason, carpenter]
        }),
    )
    .await;
    let id = project["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Community shed");
    assert_eq!(
        json["role_titles"],
        serde_json::json!(["Painter", "Mason", "Carpenter"])
    );
    assert_eq!(json["photos"], serde_json::json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn detail_returns_404_for_missing_project(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/projects/9999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn photos_attach_to_a_project_oldest_first(pool: PgPool) {
    let token = access_token(&pool, "photographer@example.com").await;
    let mason = profession_id(&pool, "Mason").await;

    let project = create_project(
        &pool,
        &token,
        serde_json::json!({
            "name": "Bench restoration",
            "location": "Main square",
            "category": "Repair",
            "roles_required": [mason]
        }),
    )
    .await;
    let id = project["id"].as_i64().unwrap();

    for (path, tag) in [
        ("uploads/bench-before.jpg", "before"),
        ("uploads/bench-after.jpg", "after"),
    ] {
        let app = common::build_test_app(pool.clone());
        let body = serde_json::json!({ "photo_path": path, "tag": tag });
        let response =
            post_json_auth(app, &format!("/api/v1/projects/{id}/photos"), body, &token).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/projects/{id}/photos")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let paths: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["photo_path"].as_str().unwrap())
        .collect();
    assert_eq!(
        paths,
        vec!["uploads/bench-before.jpg", "uploads/bench-after.jpg"]
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn photo_upload_rejects_blank_path_and_missing_project(pool: PgPool) {
    let token = access_token(&pool, "photographer@example.com").await;
    let mason = profession_id(&pool, "Mason").await;

    let project = create_project(
        &pool,
        &token,
        serde_json::json!({
            "name": "Bench restoration",
            "location": "Main square",
            "category": "Repair",
            "roles_required": [mason]
        }),
    )
    .await;
    let id = project["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "photo_path": "   ", "tag": null });
    let response =
        post_json_auth(app, &format!("/api/v1/projects/{id}/photos"), body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "photo_path": "uploads/nowhere.jpg", "tag": null });
    let response = post_json_auth(app, "/api/v1/projects/9999/photos", body, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
