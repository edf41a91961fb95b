//! Tests for the simulated analysis task lifecycle.
//!
//! Verifies the single-pending-slot guarantee: invoking the analyzer twice
//! before the first run resolves must not produce two completions or reset
//! the running timer, and the slot frees up once the task completes.

use std::sync::Arc;
use std::time::Duration;

use lawgorithm::analysis::{
    AnalysisError, AnalyzerConfig, DocumentAnalyzer, DocumentInput, Priority,
};

fn analyzer_with_delay(delay: Duration) -> DocumentAnalyzer {
    DocumentAnalyzer::new(AnalyzerConfig {
        delay,
        ..AnalyzerConfig::default()
    })
}

#[tokio::test(start_paused = true)]
async fn second_invocation_while_pending_is_a_no_op() {
    let analyzer = Arc::new(analyzer_with_delay(Duration::from_secs(3)));

    let first = {
        let analyzer = analyzer.clone();
        tokio::spawn(async move { analyzer.analyze(DocumentInput::text("lease agreement")).await })
    };

    // Let the first invocation take the pending slot.
    tokio::task::yield_now().await;
    assert!(analyzer.is_pending());

    // The second invocation is rejected immediately, without queueing.
    let second = analyzer.analyze(DocumentInput::text("another document")).await;
    assert_eq!(second.unwrap_err(), AnalysisError::Busy);

    // Exactly one completion comes out of the cycle.
    let report = first.await.expect("task panicked").expect("first invocation should resolve");
    assert!(report.summary.contains("property sale agreement"));
    assert!(!analyzer.is_pending());
}

#[tokio::test(start_paused = true)]
async fn slot_frees_after_completion() {
    let analyzer = analyzer_with_delay(Duration::from_secs(3));

    let report = analyzer.analyze(DocumentInput::text("first")).await.unwrap();
    assert!(!analyzer.is_pending());
    assert_eq!(report.deadlines.len(), 3);

    // A fresh cycle starts cleanly once the previous one resolved.
    analyzer.analyze(DocumentInput::text("second")).await.unwrap();
    assert!(!analyzer.is_pending());
}

#[tokio::test]
async fn transition_is_strictly_pending_then_completed() {
    let analyzer = Arc::new(analyzer_with_delay(Duration::from_millis(30)));

    let task = {
        let analyzer = analyzer.clone();
        tokio::spawn(async move { analyzer.analyze(DocumentInput::text("agreement")).await })
    };
    tokio::task::yield_now().await;

    // Pending is observable for the whole delay window.
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(analyzer.is_pending());

    task.await.expect("task panicked").expect("analysis should resolve");
    assert!(!analyzer.is_pending());
}

#[tokio::test]
async fn rejected_input_never_occupies_the_slot() {
    let analyzer = analyzer_with_delay(Duration::from_secs(3));

    let err = analyzer.analyze(DocumentInput::text("   ")).await.unwrap_err();
    assert_eq!(err, AnalysisError::EmptyDocument);
    assert!(!analyzer.is_pending());

    let err = analyzer
        .analyze(DocumentInput::file("virus.exe", vec![1, 2, 3]))
        .await
        .unwrap_err();
    assert!(matches!(err, AnalysisError::UnsupportedFileType(_)));
    assert!(!analyzer.is_pending());
}

#[tokio::test]
async fn oversized_documents_are_rejected() {
    let analyzer = DocumentAnalyzer::new(AnalyzerConfig {
        delay: Duration::from_millis(1),
        max_document_bytes: 16,
    });

    let err = analyzer
        .analyze(DocumentInput::file("big.txt", vec![0; 17]))
        .await
        .unwrap_err();
    assert_eq!(err, AnalysisError::DocumentTooLarge { size: 17, limit: 16 });
}

#[tokio::test(start_paused = true)]
async fn report_carries_the_tagged_structure() {
    let analyzer = analyzer_with_delay(Duration::from_secs(3));
    let report = analyzer
        .analyze(DocumentInput::file("agreement.pdf", Vec::new()))
        .await
        .unwrap();

    assert_eq!(report.key_points.len(), 5);
    assert_eq!(report.legal_obligations.len(), 4);
    assert_eq!(report.risk_areas.len(), 3);

    let priorities: Vec<Priority> = report.deadlines.iter().map(|d| d.priority).collect();
    assert_eq!(priorities, [Priority::High, Priority::High, Priority::Medium]);
}
