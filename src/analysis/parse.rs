//! Strict parsing of the service response.
//!
//! The payload is treated as untrusted text: incidental Markdown fencing is
//! stripped, the remainder must parse as a JSON array of verdicts, and the
//! batch is validated as a whole. Any violation fails closed; nothing is
//! merged from a partially valid response.

use super::{AnalysisError, Verdict};
use std::collections::HashSet;

/// Remove a decorative Markdown code fence around the payload, if present.
pub fn strip_fences(raw: &str) -> &str {
    let mut text = raw.trim();
    for opener in ["```json", "```"] {
        if let Some(rest) = text.strip_prefix(opener) {
            text = rest;
            break;
        }
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

/// Parse and validate the response text against the ids that were sent.
///
/// Every requested id must have exactly one verdict, no verdict may name an
/// id outside the request, and scores must be within 0-100.
pub fn parse_verdicts(raw: &str, expected_ids: &[String]) -> Result<Vec<Verdict>, AnalysisError> {
    let cleaned = strip_fences(raw);
    let verdicts: Vec<Verdict> = serde_json::from_str(cleaned)?;

    let expected: HashSet<&str> = expected_ids.iter().map(String::as_str).collect();
    let mut seen: HashSet<&str> = HashSet::new();

    for v in &verdicts {
        if !expected.contains(v.id.as_str()) {
            return Err(AnalysisError::UnknownVerdict { id: v.id.clone() });
        }
        if !seen.insert(v.id.as_str()) {
            return Err(AnalysisError::DuplicateVerdict { id: v.id.clone() });
        }
        if v.naughty_score > 100 {
            return Err(AnalysisError::ScoreOutOfRange {
                id: v.id.clone(),
                score: v.naughty_score,
            });
        }
    }

    for id in expected_ids {
        if !seen.contains(id.as_str()) {
            return Err(AnalysisError::MissingVerdict { id: id.clone() });
        }
    }

    Ok(verdicts)
}
