//! API Integration Tests
//!
//! Every test starts the API with in-memory storage next to its own stub
//! upstream tracker, so no external services are required.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, fixtures::*, test_config, StubUpstream, TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

fn names(list: &Value) -> Vec<String> {
    list.as_array()
        .map(|members| {
            members
                .iter()
                .filter_map(|m| m["name"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start(red_rose()).await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_readiness_follows_upstream() {
    let server = TestServer::start(red_rose()).await.expect("Failed to start server");

    let response = server.get("/health/ready").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "disabled");
    assert_eq!(body["checks"]["upstream"], "pending");

    server.refresh().await.unwrap();
    let response = server.get("/health/ready").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["upstream"], "healthy");

    server.upstream.set_failing(true);
    server.refresh().await.unwrap();
    let response = server.get("/health/ready").await.unwrap();
    let body: Value = assert_json(response, StatusCode::SERVICE_UNAVAILABLE)
        .await
        .unwrap();
    assert_eq!(body["status"], "not_ready");
    assert_eq!(body["checks"]["upstream"], "unhealthy");
}

// ============================================================================
// Roster Tests
// ============================================================================

#[tokio::test]
async fn test_roster_empty_before_first_refresh() {
    let server = TestServer::start(red_rose()).await.unwrap();

    let response = server.get("/api/v1/roster").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body["analysis"].is_null());
    assert!(body["fetchedAt"].is_null());
    assert_eq!(server.upstream.fetch_count(), 0);
}

#[tokio::test]
async fn test_refresh_classifies_roster() {
    let server = TestServer::start(red_rose()).await.unwrap();

    let refresh = server.refresh().await.unwrap();
    assert_eq!(refresh["outcome"], "completed");
    assert_eq!(refresh["level"], "none");

    let response = server.get("/api/v1/roster").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["guildName"], "Red Rose");
    assert_eq!(body["stale"], false);

    let analysis = &body["analysis"];
    assert_eq!(analysis["counts"]["online"], 4);
    assert_eq!(analysis["counts"]["offline"], 1);
    assert_eq!(analysis["counts"]["total"], 5);
    assert_eq!(analysis["counts"]["external"], 1);
    assert_eq!(analysis["levelThreshold"], 100);

    assert_eq!(names(&analysis["sorted"]), vec!["Alpha", "Beta", "Scout"]);
    assert_eq!(names(&analysis["exitedSorted"]), vec!["Delta"]);
    assert_eq!(names(&analysis["externalCharacters"]), vec!["Scout"]);
    assert_eq!(names(&analysis["byLevel"]["above"]), vec!["Alpha"]);

    let vocations: Vec<&str> = analysis["vocations"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|g| g["vocation"].as_str())
        .collect();
    assert_eq!(vocations, vec!["Druid", "Knight", "Sorcerer"]);
}

#[tokio::test]
async fn test_failed_refresh_keeps_last_snapshot() {
    let server = TestServer::start(red_rose()).await.unwrap();
    server.refresh().await.unwrap();

    server.upstream.set_failing(true);
    let refresh = server.refresh().await.unwrap();
    assert_eq!(refresh["outcome"], "failed");
    assert!(refresh["error"].is_string());

    let response = server.get("/api/v1/roster").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["stale"], true);
    assert!(body["lastError"].is_string());
    assert_eq!(names(&body["analysis"]["sorted"]), vec!["Alpha", "Beta", "Scout"]);
}

#[tokio::test]
async fn test_mark_member_exited_applies_and_forwards() {
    let server = TestServer::start(red_rose()).await.unwrap();
    server.refresh().await.unwrap();

    let response = server.post_empty("/api/v1/members/Beta/exited").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["name"], "Beta");
    assert_eq!(body["appliedLocally"], true);
    assert_eq!(body["forwarded"], true);
    assert_eq!(server.upstream.commands(), vec!["guild/mark-exited/Beta"]);

    let response = server.get("/api/v1/roster").await.unwrap();
    let roster: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(names(&roster["analysis"]["exitedSorted"]), vec!["Delta", "Beta"]);

    let response = server.delete("/api/v1/members/Delta/exited").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        server.upstream.commands().last().map(String::as_str),
        Some("guild/unmark-exited/Delta")
    );
}

#[tokio::test]
async fn test_blank_member_name_rejected() {
    let server = TestServer::start(red_rose()).await.unwrap();

    let response = server.post_empty("/api/v1/members/%20%20/exited").await.unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(body["error"]["code"].is_string());
    assert!(server.upstream.commands().is_empty());
}

// ============================================================================
// External Character Tests
// ============================================================================

#[tokio::test]
async fn test_add_and_remove_external_character() {
    let server = TestServer::start(red_rose()).await.unwrap();
    server.refresh().await.unwrap();

    let response = server
        .post("/api/v1/external-characters", &json!({ "name": "  Rival  " }))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(body["name"], "Rival");
    assert_eq!(body["forwarded"], true);

    let response = server.get("/api/v1/external-characters").await.unwrap();
    let list: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(names(&list), vec!["Scout", "Rival"]);

    let response = server.delete("/api/v1/external-characters/Scout").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/api/v1/external-characters").await.unwrap();
    let list: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(names(&list), vec!["Rival"]);

    assert_eq!(
        server.upstream.commands(),
        vec!["add/Rival", "external-characters/remove/Scout"]
    );
}

#[tokio::test]
async fn test_add_external_requires_name() {
    let server = TestServer::start(red_rose()).await.unwrap();

    let response = server
        .post("/api/v1/external-characters", &json!({ "name": "" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .post("/api/v1/external-characters", &json!({ "nickname": "x" }))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["error"]["code"], "INVALID_REQUEST_BODY");
}

#[tokio::test]
async fn test_forward_failure_still_applies_locally() {
    let server = TestServer::start(red_rose()).await.unwrap();
    server.refresh().await.unwrap();
    server.upstream.set_failing(true);

    let response = server
        .post_empty("/api/v1/external-characters/Scout/exited")
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["appliedLocally"], true);
    assert_eq!(body["forwarded"], false);

    let response = server.get("/api/v1/roster").await.unwrap();
    let roster: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(names(&roster["analysis"]["exitedSorted"]), vec!["Delta", "Scout"]);
}

// ============================================================================
// Note Tests
// ============================================================================

#[tokio::test]
async fn test_note_lifecycle() {
    let server = TestServer::start(red_rose()).await.unwrap();

    let response = server
        .post(
            "/api/v1/notes",
            &json!({ "name": "Alpha", "message": "Shared account, check twice" }),
        )
        .await
        .unwrap();
    let note: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(note["name"], "Alpha");
    assert!(note["updatedAt"].is_string());

    let response = server
        .post("/api/v1/notes", &json!({ "name": "Alpha", "message": "Updated" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/api/v1/notes").await.unwrap();
    let notes: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(notes.as_array().map(Vec::len), Some(1));

    let response = server.get("/api/v1/notes/Alpha").await.unwrap();
    let note: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(note["message"], "Updated");

    let response = server.delete("/api/v1/notes/Alpha").await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get("/api/v1/notes/Alpha").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // Deleting again is not an error
    let response = server.delete("/api/v1/notes/Alpha").await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_note_validation() {
    let server = TestServer::start(red_rose()).await.unwrap();

    let response = server
        .post("/api/v1/notes", &json!({ "name": "Alpha", "message": "" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .post("/api/v1/notes", &json!({ "name": "   ", "message": "hello" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server.get("/api/v1/notes").await.unwrap();
    let notes: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(notes, json!([]));
}

// ============================================================================
// Alert Tests
// ============================================================================

#[tokio::test]
async fn test_alert_config_defaults_and_update() {
    let server = TestServer::start(red_rose()).await.unwrap();

    let response = server.get("/api/v1/alerts/config").await.unwrap();
    let config: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(config["enabled"], false);
    assert_eq!(config["yellowAlertPlayers"], 3);
    assert_eq!(config["redAlertPlayers"], 5);

    let response = server
        .put("/api/v1/alerts/config", &sensitive_alert_config())
        .await
        .unwrap();
    let config: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(config["enabled"], true);
    assert_eq!(config["soundVolume"], 40);

    let response = server.get("/api/v1/alerts/config").await.unwrap();
    let config: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(config["redAlertPlayers"], 3);
}

#[tokio::test]
async fn test_alert_config_out_of_range_rejected() {
    let server = TestServer::start(red_rose()).await.unwrap();

    let mut body = sensitive_alert_config();
    body["soundVolume"] = json!(101);
    let response = server.put("/api/v1/alerts/config", &body).await.unwrap();
    let error: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(error["error"]["details"].is_object());

    let response = server.get("/api/v1/alerts/config").await.unwrap();
    let config: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(config["enabled"], false);
}

#[tokio::test]
async fn test_mass_login_raises_alert_with_cooldown() {
    let server = TestServer::start(login_wave(3)).await.unwrap();
    let response = server
        .put("/api/v1/alerts/config", &sensitive_alert_config())
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let refresh = server.refresh().await.unwrap();
    assert_eq!(refresh["level"], "red");
    assert_eq!(refresh["recentCount"], 3);

    let response = server.get("/api/v1/alerts").await.unwrap();
    let status: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(status["level"], "red");
    assert_eq!(status["sound"], "played");
    assert_eq!(status["onCooldown"], true);
    assert!(status["lastFiredAt"].is_string());

    server.refresh().await.unwrap();
    let response = server.get("/api/v1/alerts").await.unwrap();
    let status: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(status["sound"], "suppressed_by_cooldown");

    let response = server.post_empty("/api/v1/alerts/cooldown/reset").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    server.refresh().await.unwrap();
    let response = server.get("/api/v1/alerts").await.unwrap();
    let status: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(status["sound"], "played");
}

#[tokio::test]
async fn test_dismiss_clears_level_until_next_cycle() {
    let server = TestServer::start(login_wave(2)).await.unwrap();
    server
        .put("/api/v1/alerts/config", &sensitive_alert_config())
        .await
        .unwrap();

    let refresh = server.refresh().await.unwrap();
    assert_eq!(refresh["level"], "yellow");

    let response = server.post_empty("/api/v1/alerts/dismiss").await.unwrap();
    let status: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(status["level"], "none");

    server.upstream.set_roster(login_wave(0));
    let refresh = server.refresh().await.unwrap();
    assert_eq!(refresh["level"], "none");
    assert_eq!(refresh["recentCount"], 0);
}

// ============================================================================
// Configuration Tests
// ============================================================================

#[tokio::test]
async fn test_custom_level_threshold() {
    let upstream = StubUpstream::start(red_rose()).await.unwrap();
    let config = test_config(&upstream.base_url(), &[("ROSTER_LEVEL_THRESHOLD", "50")]).unwrap();
    let server = TestServer::start_with_config(upstream, config).await.unwrap();
    server.refresh().await.unwrap();

    let response = server.get("/api/v1/roster").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["analysis"]["levelThreshold"], 50);
    assert_eq!(
        names(&body["analysis"]["byLevel"]["above"]),
        vec!["Alpha", "Beta", "Scout"]
    );
}

#[tokio::test]
async fn test_wrong_upstream_key_reports_failure() {
    let upstream = StubUpstream::start(red_rose()).await.unwrap();
    let config = test_config(&upstream.base_url(), &[("UPSTREAM_API_KEY", "wrong")]).unwrap();
    let server = TestServer::start_with_config(upstream, config).await.unwrap();

    let refresh = server.refresh().await.unwrap();
    assert_eq!(refresh["outcome"], "failed");

    let response = server.get("/api/v1/roster").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body["analysis"].is_null());
    assert!(body["lastError"].is_string());
}
