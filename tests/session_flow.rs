//! Session lifecycle scenarios: generate, analyze with stub classifiers,
//! and verify merge atomicity.

use std::sync::atomic::{AtomicUsize, Ordering};

use sleighwatch::analysis::{AnalysisError, Analyzer, Verdict};
use sleighwatch::incident::{Incident, Severity};
use sleighwatch::session::{run_analysis, AnalysisOutcome, Session};

/// Returns a fixed verdict for every incident it is given, and counts calls.
#[derive(Default)]
struct ScriptedAnalyzer {
    calls: AtomicUsize,
    score: u8,
}

#[async_trait::async_trait]
impl Analyzer for ScriptedAnalyzer {
    async fn analyze(&self, incidents: &[Incident]) -> Result<Vec<Verdict>, AnalysisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(incidents
            .iter()
            .map(|inc| Verdict {
                id: inc.id.clone(),
                severity: Severity::Medium,
                category: "Insider Threat".to_string(),
                summary: "A festive mishap occurred.".to_string(),
                action: "Review with hot cocoa in hand.".to_string(),
                naughty_score: self.score,
            })
            .collect())
    }
}

/// Always fails, as an unreachable or misbehaving upstream would.
struct FailingAnalyzer;

#[async_trait::async_trait]
impl Analyzer for FailingAnalyzer {
    async fn analyze(&self, _incidents: &[Incident]) -> Result<Vec<Verdict>, AnalysisError> {
        Err(AnalysisError::Api {
            status: 500,
            body: "upstream unavailable".to_string(),
        })
    }
}

#[tokio::test]
async fn generate_reports_consistent_batch_and_feed_counts() {
    let session = Session::shared();
    let (generated, feed) = session.write().await.generate();
    assert!((3..=5).contains(&generated));
    assert_eq!(feed, generated);

    let (second, feed_after) = session.write().await.generate();
    assert_eq!(
        feed_after,
        (generated + second).min(sleighwatch::incident::store::FEED_CAP)
    );
}

#[tokio::test]
async fn empty_feed_is_a_noop_and_makes_no_call() {
    let session = Session::shared();
    let analyzer = ScriptedAnalyzer::default();

    let outcome = run_analysis(&session, &analyzer).await.unwrap();
    assert_eq!(outcome, AnalysisOutcome::NoOp);
    assert_eq!(analyzer.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn successful_analysis_converts_the_whole_feed() {
    let session = Session::shared();
    let (generated, _) = session.write().await.generate();
    let analyzer = ScriptedAnalyzer {
        score: 72,
        ..Default::default()
    };

    let outcome = run_analysis(&session, &analyzer).await.unwrap();
    assert_eq!(outcome, AnalysisOutcome::Analyzed(generated));

    let s = session.read().await;
    assert_eq!(s.store().unanalyzed_count(), 0);
    assert_eq!(s.store().history().len(), generated);
    for inc in s.store().feed() {
        let analysis = inc.analysis.as_ref().expect("feed entry analyzed");
        assert_eq!(analysis.naughty_score, 72);
    }
}

#[tokio::test]
async fn repeated_analysis_without_new_incidents_is_a_noop() {
    let session = Session::shared();
    session.write().await.generate();
    let analyzer = ScriptedAnalyzer::default();

    run_analysis(&session, &analyzer).await.unwrap();
    let outcome = run_analysis(&session, &analyzer).await.unwrap();
    assert_eq!(outcome, AnalysisOutcome::NoOp);
    assert_eq!(analyzer.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn failed_analysis_leaves_the_store_untouched() {
    let session = Session::shared();
    session.write().await.generate();
    let before: Vec<Incident> = session.read().await.store().feed().to_vec();

    let err = run_analysis(&session, &FailingAnalyzer).await.unwrap_err();
    assert!(matches!(err, AnalysisError::Api { status: 500, .. }));

    let s = session.read().await;
    assert_eq!(s.store().feed(), before.as_slice());
    assert!(s.store().history().is_empty());
    assert_eq!(s.store().unanalyzed_count(), before.len());
}

#[tokio::test]
async fn analysis_after_failure_can_succeed() {
    let session = Session::shared();
    let (generated, _) = session.write().await.generate();

    run_analysis(&session, &FailingAnalyzer).await.unwrap_err();
    let outcome = run_analysis(&session, &ScriptedAnalyzer::default())
        .await
        .unwrap();
    assert_eq!(outcome, AnalysisOutcome::Analyzed(generated));
}
