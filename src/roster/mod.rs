//! Naughty & Nice roster: per-actor aggregation over the analyzed history.
//!
//! Pure functions of the history slice; recomputed from scratch on every
//! request, never mutated incrementally.

use crate::incident::{Incident, Severity};
use serde::Serialize;

/// Naughtiness threshold: scores and averages at or above this are naughty.
pub const NAUGHTY_THRESHOLD: u8 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Standing {
    Naughty,
    Nice,
}

impl std::fmt::Display for Standing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Standing::Naughty => write!(f, "NAUGHTY"),
            Standing::Nice => write!(f, "NICE"),
        }
    }
}

/// Aggregated record for one actor.
#[derive(Debug, Clone, Serialize)]
pub struct ActorStanding {
    pub actor: String,
    pub incidents: Vec<Incident>,
    pub total_score: u32,
    pub naughty_count: usize,
    pub nice_count: usize,
    /// round(total_score / incident count)
    pub avg_score: u8,
    pub status: Standing,
}

/// Dashboard stat-card numbers derived from the history.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SummaryStats {
    pub total: usize,
    pub critical: usize,
    pub high: usize,
    pub avg_naughty: u8,
}

/// Group the analyzed history by actor and rank it, worst first.
///
/// Ties on `avg_score` order by actor name ascending, so the roster is
/// deterministic regardless of grouping traversal.
pub fn compile_roster(history: &[Incident]) -> Vec<ActorStanding> {
    let mut standings: Vec<ActorStanding> = Vec::new();

    for incident in history {
        let Some(analysis) = &incident.analysis else {
            continue;
        };
        let score = analysis.naughty_score;

        let entry = match standings.iter_mut().find(|s| s.actor == incident.actor) {
            Some(entry) => entry,
            None => {
                standings.push(ActorStanding {
                    actor: incident.actor.clone(),
                    incidents: Vec::new(),
                    total_score: 0,
                    naughty_count: 0,
                    nice_count: 0,
                    avg_score: 0,
                    status: Standing::Nice,
                });
                standings.last_mut().unwrap()
            }
        };

        entry.incidents.push(incident.clone());
        entry.total_score += u32::from(score);
        if score >= NAUGHTY_THRESHOLD {
            entry.naughty_count += 1;
        } else {
            entry.nice_count += 1;
        }
    }

    for entry in &mut standings {
        let count = entry.incidents.len() as f64;
        entry.avg_score = (f64::from(entry.total_score) / count).round() as u8;
        entry.status = if entry.avg_score >= NAUGHTY_THRESHOLD {
            Standing::Naughty
        } else {
            Standing::Nice
        };
    }

    standings.sort_by(|a, b| {
        b.avg_score
            .cmp(&a.avg_score)
            .then_with(|| a.actor.cmp(&b.actor))
    });
    standings
}

/// Totals for the dashboard stat cards.
pub fn summary_stats(history: &[Incident]) -> SummaryStats {
    let mut stats = SummaryStats {
        total: 0,
        critical: 0,
        high: 0,
        avg_naughty: 0,
    };
    let mut sum: u32 = 0;

    for incident in history {
        let Some(analysis) = &incident.analysis else {
            continue;
        };
        stats.total += 1;
        sum += u32::from(analysis.naughty_score);
        match analysis.severity {
            Severity::Critical => stats.critical += 1,
            Severity::High => stats.high += 1,
            _ => {}
        }
    }

    if stats.total > 0 {
        stats.avg_naughty = (f64::from(sum) / stats.total as f64).round() as u8;
    }
    stats
}
