//! Recurring auto-generation task.
//!
//! Enabling spawns a tokio task that ingests one synthetic batch every
//! 10 seconds; disabling (or dropping the controller) aborts the task, so a
//! turned-off timer can never keep firing.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::info;

use crate::session::SharedSession;

pub const GENERATION_INTERVAL: Duration = Duration::from_secs(10);

/// Controller for the periodic generation task.
#[derive(Debug, Default)]
pub struct AutoGenerator {
    handle: Option<JoinHandle<()>>,
}

impl AutoGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Start the recurring task. Idempotent: a second enable keeps the
    /// existing task.
    pub fn enable(&mut self, session: SharedSession) {
        if self.is_enabled() {
            return;
        }
        info!(interval = ?GENERATION_INTERVAL, "auto-generation enabled");
        self.handle = Some(tokio::spawn(run_generation_loop(session)));
    }

    /// Stop the recurring task. Idempotent.
    pub fn disable(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            info!("auto-generation disabled");
        }
    }
}

impl Drop for AutoGenerator {
    fn drop(&mut self) {
        self.disable();
    }
}

/// Generation loop body. First batch lands one full interval after enable.
async fn run_generation_loop(session: SharedSession) {
    let mut interval = tokio::time::interval(GENERATION_INTERVAL);
    // The first tick of a tokio interval completes immediately; consume it
    // so the loop matches the enable-then-wait contract.
    interval.tick().await;

    loop {
        interval.tick().await;
        session.write().await.generate();
    }
}
