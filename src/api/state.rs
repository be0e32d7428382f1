use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::analysis::{AnalysisError, Analyzer};
use crate::scheduler::AutoGenerator;
use crate::session::{self, AnalysisOutcome, SharedSession};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub session: SharedSession,
    pub analyzer: Arc<dyn Analyzer>,
    pub autogen: Arc<Mutex<AutoGenerator>>,
    /// In-flight guard: at most one analysis call at a time.
    pub analyzing: Arc<AtomicBool>,
}

/// Outcome of an analyze trigger at the API boundary.
pub enum TriggerOutcome {
    /// Another analysis is already in flight.
    Busy,
    Done(Result<AnalysisOutcome, AnalysisError>),
}

/// Clears the in-flight flag on drop, so the flag is released even when the
/// handler future is cancelled mid-await (client closed the connection).
struct InFlightGuard(Arc<AtomicBool>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl AppState {
    pub fn new(session: SharedSession, analyzer: Arc<dyn Analyzer>) -> Self {
        Self {
            session,
            analyzer,
            autogen: Arc::new(Mutex::new(AutoGenerator::new())),
            analyzing: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Run one analysis unless another is already in flight. The flag is
    /// held by a drop guard for the whole call; a cancelled request cannot
    /// leave it stuck.
    pub async fn trigger_analysis(&self) -> TriggerOutcome {
        if self
            .analyzing
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return TriggerOutcome::Busy;
        }
        let _guard = InFlightGuard(self.analyzing.clone());

        TriggerOutcome::Done(session::run_analysis(&self.session, self.analyzer.as_ref()).await)
    }
}
