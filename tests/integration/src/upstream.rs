//! Stub upstream tracker
//!
//! Serves the combined roster and records every forwarded command so tests
//! can assert on what the API sent upstream.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use guild_upstream::{wire::AddExternalRequest, CombinedDataResponse, API_KEY_HEADER};
use parking_lot::Mutex;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// API key the stub accepts
pub const STUB_API_KEY: &str = "integration-key";

#[derive(Debug, Default)]
struct StubState {
    roster: CombinedDataResponse,
    commands: Vec<String>,
    failing: bool,
    fetches: usize,
}

type Shared = Arc<Mutex<StubState>>;

/// Running stub tracker
pub struct StubUpstream {
    pub addr: SocketAddr,
    state: Shared,
    _handle: JoinHandle<()>,
}

impl StubUpstream {
    /// Start the stub on an ephemeral port
    pub async fn start(roster: CombinedDataResponse) -> Result<Self> {
        let state: Shared = Arc::new(Mutex::new(StubState {
            roster,
            ..StubState::default()
        }));

        let app = Router::new()
            .route("/api/external-characters/combined-data", get(combined_data))
            .route("/api/external-characters/add", post(add_external))
            .route("/api/external-characters/remove/:name", delete(command))
            .route("/api/external-characters/mark-exited/:name", post(command))
            .route("/api/external-characters/unmark-exited/:name", post(command))
            .route("/api/guild/mark-exited/:name", post(command))
            .route("/api/guild/unmark-exited/:name", post(command))
            .with_state(state.clone());

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            addr,
            state,
            _handle: handle,
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Replace the roster served from now on
    pub fn set_roster(&self, roster: CombinedDataResponse) {
        self.state.lock().roster = roster;
    }

    /// Make every request fail with 500
    pub fn set_failing(&self, failing: bool) {
        self.state.lock().failing = failing;
    }

    /// Forwarded commands as `path` strings, in arrival order
    pub fn commands(&self) -> Vec<String> {
        self.state.lock().commands.clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.state.lock().fetches
    }
}

fn reject(state: &StubState, headers: &HeaderMap) -> Option<Response> {
    let key = headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok());
    if key != Some(STUB_API_KEY) {
        return Some(StatusCode::UNAUTHORIZED.into_response());
    }
    state
        .failing
        .then(|| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

async fn combined_data(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let mut state = state.lock();
    state.fetches += 1;
    if let Some(rejection) = reject(&state, &headers) {
        return rejection;
    }
    Json(state.roster.clone()).into_response()
}

async fn add_external(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<AddExternalRequest>,
) -> Response {
    let mut state = state.lock();
    if let Some(rejection) = reject(&state, &headers) {
        return rejection;
    }
    state.commands.push(format!("add/{}", body.name));
    StatusCode::OK.into_response()
}

async fn command(
    State(state): State<Shared>,
    headers: HeaderMap,
    uri: axum::http::Uri,
    Path(_name): Path<String>,
) -> Response {
    let mut state = state.lock();
    if let Some(rejection) = reject(&state, &headers) {
        return rejection;
    }
    let path = uri.path().trim_start_matches("/api/").to_string();
    state.commands.push(path);
    StatusCode::OK.into_response()
}
