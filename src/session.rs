//! Application session state and the analyze orchestration.
//!
//! All mutable console state lives in one [`Session`] struct behind a shared
//! handle; handlers and the auto-generation task go through its entry points
//! rather than touching ambient state.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::analysis::{AnalysisError, Analyzer};
use crate::generator;
use crate::incident::{Incident, SessionStore};

/// Shared handle to the session, one per process.
pub type SharedSession = Arc<RwLock<Session>>;

#[derive(Debug, Default)]
pub struct Session {
    store: SessionStore,
}

/// Result of an analysis trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisOutcome {
    /// Nothing was unanalyzed; no external call was made.
    NoOp,
    /// The given number of incidents were analyzed and merged.
    Analyzed(usize),
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedSession {
        Arc::new(RwLock::new(Self::new()))
    }

    /// Generate one synthetic batch into the feed. Returns the batch size
    /// and the resulting feed length, taken under the same mutation so the
    /// pair stays consistent even with the auto-generation task running.
    pub fn generate(&mut self) -> (usize, usize) {
        let batch = generator::generate_batch(&mut rand::thread_rng());
        let count = batch.len();
        self.store.ingest_batch(batch);
        let feed = self.store.feed().len();
        info!(count, feed, "generated incident batch");
        (count, feed)
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut SessionStore {
        &mut self.store
    }
}

/// Analyze the current unanalyzed subset through `analyzer` and merge the
/// verdicts back in.
///
/// The session lock is not held across the external call; the snapshot taken
/// up front is what gets analyzed and merged. On any failure the store is
/// left exactly as it was — the merge happens only after the whole response
/// validated.
pub async fn run_analysis(
    session: &SharedSession,
    analyzer: &dyn Analyzer,
) -> Result<AnalysisOutcome, AnalysisError> {
    let snapshot = session.read().await.store().unanalyzed();
    if snapshot.is_empty() {
        return Ok(AnalysisOutcome::NoOp);
    }

    let verdicts = match analyzer.analyze(&snapshot).await {
        Ok(v) => v,
        Err(e) => {
            warn!(error = %e, batch = snapshot.len(), "analysis failed, store unchanged");
            return Err(e);
        }
    };

    let mut by_id: HashMap<String, _> = verdicts
        .into_iter()
        .map(|v| (v.id.clone(), v.into_analysis()))
        .collect();

    // The parser guarantees one verdict per snapshot entry.
    let analyzed: Vec<Incident> = snapshot
        .into_iter()
        .filter_map(|inc| {
            by_id.remove(&inc.id).map(|analysis| Incident {
                analysis: Some(analysis),
                ..inc
            })
        })
        .collect();

    let count = analyzed.len();
    session.write().await.store_mut().commit_analysis(analyzed);
    info!(count, "analysis merged");
    Ok(AnalysisOutcome::Analyzed(count))
}
