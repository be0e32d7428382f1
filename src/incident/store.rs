//! In-memory session store: capped incident feed plus unbounded analyzed
//! history.

use super::Incident;

/// Maximum number of incidents retained in the display feed.
pub const FEED_CAP: usize = 20;

/// Session-local incident state.
///
/// The feed is newest-first and capped at [`FEED_CAP`]; the history keeps
/// every incident that completed analysis, unbounded, so an actor's record
/// survives eviction from the feed. All mutation goes through the three
/// entry points below.
#[derive(Debug, Default)]
pub struct SessionStore {
    feed: Vec<Incident>,
    history: Vec<Incident>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a freshly generated batch and evict the oldest entries past
    /// the cap.
    pub fn ingest_batch(&mut self, batch: Vec<Incident>) {
        let mut feed = batch;
        feed.append(&mut self.feed);
        feed.truncate(FEED_CAP);
        self.feed = feed;
    }

    /// Snapshot of the feed entries that have not been analyzed yet, in
    /// feed order.
    pub fn unanalyzed(&self) -> Vec<Incident> {
        self.feed
            .iter()
            .filter(|inc| !inc.is_analyzed())
            .cloned()
            .collect()
    }

    /// Merge a completed analysis batch: each incident replaces its feed
    /// entry by id (skipped if it was evicted mid-flight) and is appended
    /// to the history.
    ///
    /// Callers pass the full batch only after the whole response validated,
    /// so a failed analysis never reaches this point.
    pub fn commit_analysis(&mut self, analyzed: Vec<Incident>) {
        for incident in analyzed {
            debug_assert!(incident.is_analyzed());
            if let Some(slot) = self.feed.iter_mut().find(|i| i.id == incident.id) {
                *slot = incident.clone();
            }
            self.history.push(incident);
        }
    }

    pub fn feed(&self) -> &[Incident] {
        &self.feed
    }

    pub fn history(&self) -> &[Incident] {
        &self.history
    }

    pub fn unanalyzed_count(&self) -> usize {
        self.feed.iter().filter(|i| !i.is_analyzed()).count()
    }
}
