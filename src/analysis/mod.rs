//! Incident classification via an external text-generation service.

pub mod client;
pub mod parse;
pub mod prompt;

pub use self::client::ClaudeAnalyzer;

use crate::incident::Severity;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures at the analysis boundary. None of these are fatal; the session
/// state is untouched whenever one occurs.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("request to analysis service failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("analysis service returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("analysis service returned no content")]
    EmptyResponse,

    #[error("could not parse analysis response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("response is missing a verdict for incident {id}")]
    MissingVerdict { id: String },

    #[error("response contains a verdict for unknown incident {id}")]
    UnknownVerdict { id: String },

    #[error("response contains duplicate verdicts for incident {id}")]
    DuplicateVerdict { id: String },

    #[error("naughty score {score} for incident {id} is outside 0-100")]
    ScoreOutOfRange { id: String, score: u8 },
}

/// One classification record returned by the service, keyed by the original
/// incident id. Unknown extra fields are tolerated; missing required fields
/// fail the whole batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    pub id: String,
    pub severity: Severity,
    pub category: String,
    pub summary: String,
    pub action: String,
    pub naughty_score: u8,
}

impl Verdict {
    /// Split off the classification fields for merging into an incident.
    pub fn into_analysis(self) -> crate::incident::Analysis {
        crate::incident::Analysis {
            severity: self.severity,
            category: self.category,
            summary: self.summary,
            action: self.action,
            naughty_score: self.naughty_score,
        }
    }
}

/// Seam for the external classifier. The production implementation is
/// [`ClaudeAnalyzer`]; tests substitute stubs.
#[async_trait::async_trait]
pub trait Analyzer: Send + Sync {
    /// Classify a batch of unanalyzed incidents. Must return exactly one
    /// verdict per input incident or fail the whole batch.
    async fn analyze(
        &self,
        incidents: &[crate::incident::Incident],
    ) -> Result<Vec<Verdict>, AnalysisError>;
}
