//! UpstreamClient against a stub tracker served by axum

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{delete, get, post},
    Json, Router,
};
use parking_lot::Mutex;
use serde_json::{json, Value};

use guild_core::traits::{RosterCommands, RosterSource};
use guild_core::value_objects::CharacterName;
use guild_core::DomainError;
use guild_upstream::{UpstreamClient, UpstreamClientConfig, API_KEY_HEADER};

#[derive(Clone, Default)]
struct Recorder {
    calls: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    fn record(&self, headers: &HeaderMap, call: String) -> StatusCode {
        let key = headers
            .get(API_KEY_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        if key != "test-key" {
            return StatusCode::UNAUTHORIZED;
        }
        self.calls.lock().push(call);
        StatusCode::OK
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

async fn combined(State(rec): State<Recorder>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    let status = rec.record(&headers, "GET combined-data".to_string());
    let body = json!({
        "guild": {
            "name": "Red Rose",
            "members": [
                {"name": "Alpha", "vocation": "Elder Druid", "level": 300, "status": "online",
                 "lastSeen": "2024-05-01T12:00:00Z", "isExited": false},
                {"name": "Beta", "vocation": "Knight", "level": 80, "status": "offline",
                 "lastSeen": "garbage", "isExited": true}
            ]
        },
        "externalCharacters": [
            {"name": "Scout", "vocation": "Monk", "level": 50, "status": "online",
             "lastSeen": null, "isExited": false, "isExternal": true}
        ]
    });
    (status, Json(body))
}

async fn guild_command(
    State(rec): State<Recorder>,
    Path((action, name)): Path<(String, String)>,
    headers: HeaderMap,
) -> StatusCode {
    rec.record(&headers, format!("POST guild/{action}/{name}"))
}

async fn external_command(
    State(rec): State<Recorder>,
    Path((action, name)): Path<(String, String)>,
    headers: HeaderMap,
) -> StatusCode {
    rec.record(&headers, format!("POST external/{action}/{name}"))
}

async fn external_add(
    State(rec): State<Recorder>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> StatusCode {
    rec.record(&headers, format!("POST external/add {}", body["name"]))
}

async fn external_remove(
    State(rec): State<Recorder>,
    Path(name): Path<String>,
    headers: HeaderMap,
) -> StatusCode {
    rec.record(&headers, format!("DELETE external/remove/{name}"))
}

async fn spawn_stub() -> (String, Recorder) {
    let recorder = Recorder::default();
    let app = Router::new()
        .route("/api/external-characters/combined-data", get(combined))
        .route("/api/external-characters/add", post(external_add))
        .route("/api/external-characters/remove/:name", delete(external_remove))
        .route("/api/external-characters/:action/:name", post(external_command))
        .route("/api/guild/:action/:name", post(guild_command))
        .with_state(recorder.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), recorder)
}

fn name(raw: &str) -> CharacterName {
    CharacterName::parse(raw).unwrap()
}

#[tokio::test]
async fn test_fetch_roster() {
    let (base, recorder) = spawn_stub().await;
    let client = UpstreamClient::new(UpstreamClientConfig::new(base, "test-key")).unwrap();

    let roster = client.fetch_roster().await.unwrap();
    assert_eq!(roster.guild_name, "Red Rose");
    assert_eq!(roster.guild_members.len(), 2);
    assert!(roster.guild_members[0].last_seen.is_some());
    assert!(roster.guild_members[1].last_seen.is_none());
    assert!(roster.guild_members[1].is_exited);
    assert_eq!(roster.external_characters.len(), 1);
    assert!(roster.external_characters[0].is_external);

    assert_eq!(recorder.calls(), vec!["GET combined-data".to_string()]);
}

#[tokio::test]
async fn test_commands_hit_backend_routes() {
    let (base, recorder) = spawn_stub().await;
    let client = UpstreamClient::new(UpstreamClientConfig::new(base, "test-key")).unwrap();

    client.mark_exited(&name("Sir Alpha")).await.unwrap();
    client.unmark_exited(&name("Sir Alpha")).await.unwrap();
    client.add_external(&name("Scout")).await.unwrap();
    client.mark_external_exited(&name("Scout")).await.unwrap();
    client.unmark_external_exited(&name("Scout")).await.unwrap();
    client.remove_external(&name("Scout")).await.unwrap();

    assert_eq!(
        recorder.calls(),
        vec![
            "POST guild/mark-exited/Sir Alpha",
            "POST guild/unmark-exited/Sir Alpha",
            "POST external/add \"Scout\"",
            "POST external/mark-exited/Scout",
            "POST external/unmark-exited/Scout",
            "DELETE external/remove/Scout",
        ]
    );
}

#[tokio::test]
async fn test_wrong_key_maps_to_status_error() {
    let (base, _recorder) = spawn_stub().await;
    let client = UpstreamClient::new(UpstreamClientConfig::new(base, "wrong")).unwrap();

    let err = client.fetch_roster().await.unwrap_err();
    assert!(matches!(err, DomainError::UpstreamError(ref msg) if msg.contains("401")));
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    let client = UpstreamClient::new(UpstreamClientConfig::new("http://127.0.0.1:1", "test-key"))
        .unwrap();

    let err = client.combined_data().await.unwrap_err();
    assert!(err.is_retryable());
}
