//! SleighWatch -- North Pole security operations console.
//!
//! This crate provides the core library for synthetic incident generation,
//! LLM-assisted incident classification, naughty/nice aggregation, and the
//! dashboard API. All state is session-local and in-memory; the process is
//! a client of one outbound API only.

pub mod analysis;
pub mod api;
pub mod config;
pub mod generator;
pub mod incident;
pub mod roster;
pub mod scheduler;
pub mod session;

use std::sync::Arc;

use anyhow::Result;

use crate::analysis::{Analyzer, ClaudeAnalyzer};
use crate::api::state::AppState;
use crate::config::Config;
use crate::session::Session;

/// Start the SleighWatch console: dashboard, JSON API, and session state.
pub async fn serve(config: Config) -> Result<()> {
    if config.analysis.api_key.is_none() {
        tracing::warn!("no API key configured; analysis requests will be rejected upstream");
    }

    let session = Session::shared();
    let analyzer: Arc<dyn Analyzer> = Arc::new(ClaudeAnalyzer::new(config.analysis.clone()));
    let state = AppState::new(session, analyzer);

    let addr: std::net::SocketAddr = config.bind.parse()?;
    let app = api::router(state);

    tracing::info!(%addr, "SleighWatch console listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
