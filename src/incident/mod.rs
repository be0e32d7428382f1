//! Incident data model and session store.

pub mod store;

pub use self::store::SessionStore;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity levels assigned by the analysis step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Critical => write!(f, "CRITICAL"),
            Severity::High => write!(f, "HIGH"),
            Severity::Medium => write!(f, "MEDIUM"),
            Severity::Low => write!(f, "LOW"),
        }
    }
}

/// Classification fields attached to an incident once analysis completes.
///
/// Grouped into one struct so an incident is either fully analyzed or not
/// analyzed at all; there is no representable partial state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub severity: Severity,
    pub category: String,
    pub summary: String,
    pub action: String,
    /// 0-100, 100 = very naughty.
    pub naughty_score: u8,
}

/// A single security-event record for the session feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
    pub id: String,
    pub actor: String,
    pub event: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Analysis>,
}

impl Incident {
    pub fn is_analyzed(&self) -> bool {
        self.analysis.is_some()
    }
}
