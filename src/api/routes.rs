//! API route definitions.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::error;

use super::state::{AppState, TriggerOutcome};
use crate::roster;
use crate::session::AnalysisOutcome;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/incidents", get(list_incidents))
        .route("/incidents/generate", post(generate_incidents))
        .route("/incidents/analyze", post(analyze_incidents))
        .route("/roster", get(naughty_nice_roster))
        .route("/stats", get(summary_stats))
        .route("/autogen", put(set_autogen))
}

fn meta() -> Value {
    json!({
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    })
}

async fn health() -> Json<Value> {
    Json(json!({
        "data": { "status": "ok", "version": env!("CARGO_PKG_VERSION") },
        "meta": meta()
    }))
}

async fn list_incidents(State(state): State<AppState>) -> Json<Value> {
    let session = state.session.read().await;
    let store = session.store();
    Json(json!({
        "data": store.feed(),
        "meta": {
            "total": store.feed().len(),
            "unanalyzed": store.unanalyzed_count(),
            "history": store.history().len(),
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }
    }))
}

async fn generate_incidents(State(state): State<AppState>) -> Json<Value> {
    let (generated, feed_len) = state.session.write().await.generate();
    Json(json!({
        "data": { "generated": generated, "feed": feed_len },
        "meta": meta()
    }))
}

async fn analyze_incidents(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    // Single in-flight analysis; mirror of the disabled button in the UI.
    let result = match state.trigger_analysis().await {
        TriggerOutcome::Busy => {
            return (
                StatusCode::CONFLICT,
                Json(json!({ "error": "analysis already in flight", "meta": meta() })),
            );
        }
        TriggerOutcome::Done(result) => result,
    };

    match result {
        Ok(AnalysisOutcome::NoOp) => (
            StatusCode::OK,
            Json(json!({
                "data": { "merged": 0, "no_op": true },
                "meta": meta()
            })),
        ),
        Ok(AnalysisOutcome::Analyzed(count)) => (
            StatusCode::OK,
            Json(json!({
                "data": { "merged": count, "no_op": false },
                "meta": meta()
            })),
        ),
        Err(e) => {
            error!(error = %e, "analysis request failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": e.to_string(), "meta": meta() })),
            )
        }
    }
}

async fn naughty_nice_roster(State(state): State<AppState>) -> Json<Value> {
    let session = state.session.read().await;
    let standings = roster::compile_roster(session.store().history());
    let total = standings.len();
    Json(json!({
        "data": standings,
        "meta": { "total": total, "timestamp": chrono::Utc::now().to_rfc3339() }
    }))
}

async fn summary_stats(State(state): State<AppState>) -> Json<Value> {
    let session = state.session.read().await;
    let stats = roster::summary_stats(session.store().history());
    Json(json!({ "data": stats, "meta": meta() }))
}

#[derive(Deserialize)]
struct AutogenRequest {
    enabled: bool,
}

async fn set_autogen(
    State(state): State<AppState>,
    Json(req): Json<AutogenRequest>,
) -> Json<Value> {
    let mut autogen = state.autogen.lock().await;
    if req.enabled {
        autogen.enable(state.session.clone());
    } else {
        autogen.disable();
    }
    Json(json!({
        "data": { "enabled": autogen.is_enabled() },
        "meta": meta()
    }))
}
