//! Simulated document analysis.
//!
//! Stands in for the AI backend a real deployment would call: one pending
//! slot per analyzer, a fixed delay, then a canned structured report. The
//! lifecycle is strictly pending -> completed; there is no cancellation and
//! no failure path once a task is pending. Input validation happens before
//! the task starts, so a rejected document never occupies the slot.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Delay of the simulated backend round-trip.
pub const DEFAULT_ANALYSIS_DELAY_MS: u64 = 3000;

/// Upload limit advertised on the document input boundary.
pub const DEFAULT_MAX_DOCUMENT_BYTES: usize = 10 * 1024 * 1024;

/// MIME types accepted at the document input boundary (PDF, DOC, DOCX, TXT).
const ACCEPTED_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "text/plain",
];

/// Tuning for the simulated analyzer.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// How long the simulated backend takes to respond.
    pub delay: Duration,
    /// Maximum accepted document size in bytes.
    pub max_document_bytes: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(DEFAULT_ANALYSIS_DELAY_MS),
            max_document_bytes: DEFAULT_MAX_DOCUMENT_BYTES,
        }
    }
}

/// A document handed to the analyzer: a named file or pasted raw text.
///
/// Both shapes feed the same task. File content is whatever the caller had
/// available; there is no upload transport, so a file may arrive as a bare
/// name and the type and size checks apply to what was provided.
#[derive(Debug, Clone)]
pub enum DocumentInput {
    File { name: String, bytes: Vec<u8> },
    Text(String),
}

impl DocumentInput {
    pub fn text(text: impl Into<String>) -> Self {
        DocumentInput::Text(text.into())
    }

    pub fn file(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        DocumentInput::File { name: name.into(), bytes }
    }

    fn size(&self) -> usize {
        match self {
            DocumentInput::File { bytes, .. } => bytes.len(),
            DocumentInput::Text(text) => text.len(),
        }
    }

    fn label(&self) -> &str {
        match self {
            DocumentInput::File { name, .. } => name,
            DocumentInput::Text(_) => "pasted text",
        }
    }
}

/// Urgency attached to an extracted deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
        }
    }
}

/// A dated obligation extracted from the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deadline {
    pub item: String,
    pub due: String,
    pub priority: Priority,
}

/// The structured result of a completed analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub summary: String,
    pub key_points: Vec<String>,
    pub legal_obligations: Vec<String>,
    pub deadlines: Vec<Deadline>,
    pub risk_areas: Vec<String>,
}

/// Errors produced at the document input boundary or by the pending slot.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// A task is already pending on this analyzer; the invocation is a
    /// no-op, not queued.
    #[error("an analysis is already in progress")]
    Busy,
    #[error("document is empty")]
    EmptyDocument,
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),
    #[error("document is {size} bytes, over the {limit} byte limit")]
    DocumentTooLarge { size: usize, limit: usize },
}

/// Clears the pending flag when the task finishes (or its future is dropped).
struct PendingSlot<'a>(&'a AtomicBool);

impl Drop for PendingSlot<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// The simulated analysis service. One pending task per instance; callers
/// should disable their trigger while [`DocumentAnalyzer::is_pending`] holds.
pub struct DocumentAnalyzer {
    config: AnalyzerConfig,
    pending: AtomicBool,
}

impl DocumentAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config,
            pending: AtomicBool::new(false),
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Whether a task currently occupies the pending slot.
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::SeqCst)
    }

    /// Run the simulated analysis.
    ///
    /// Validates the input, takes the pending slot, waits out the configured
    /// delay, and resolves with the report. A second invocation while the
    /// slot is taken returns [`AnalysisError::Busy`] immediately without
    /// resetting the running task's timer.
    pub async fn analyze(&self, input: DocumentInput) -> Result<AnalysisReport, AnalysisError> {
        self.validate(&input)?;

        if self
            .pending
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(AnalysisError::Busy);
        }
        let _slot = PendingSlot(&self.pending);

        info!("analyzing {} ({} bytes)", input.label(), input.size());
        tokio::time::sleep(self.config.delay).await;

        Ok(sample_report())
    }

    fn validate(&self, input: &DocumentInput) -> Result<(), AnalysisError> {
        match input {
            DocumentInput::Text(text) => {
                if text.trim().is_empty() {
                    return Err(AnalysisError::EmptyDocument);
                }
            }
            DocumentInput::File { name, .. } => {
                if Path::new(name).extension().is_none() {
                    return Err(AnalysisError::UnsupportedFileType(name.clone()));
                }
                let mime = mime_guess::from_path(name).first_or_octet_stream();
                if !ACCEPTED_TYPES.contains(&mime.essence_str()) {
                    return Err(AnalysisError::UnsupportedFileType(mime.essence_str().to_string()));
                }
                debug!("accepted {} as {}", name, mime);
            }
        }

        if input.size() > self.config.max_document_bytes {
            return Err(AnalysisError::DocumentTooLarge {
                size: input.size(),
                limit: self.config.max_document_bytes,
            });
        }

        Ok(())
    }
}

impl Default for DocumentAnalyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

/// The canned report every completed analysis resolves to.
pub fn sample_report() -> AnalysisReport {
    AnalysisReport {
        summary: "This is a property sale agreement between John Smith (Seller) and Jane Doe \
                  (Buyer) for a residential property located at 123 Main Street, Mumbai. The \
                  total consideration amount is ₹50,00,000 with a security deposit of ₹5,00,000."
            .to_string(),
        key_points: vec![
            "Total Property Value: ₹50,00,000".to_string(),
            "Security Deposit: ₹5,00,000".to_string(),
            "Property Location: 123 Main Street, Mumbai".to_string(),
            "Registration Date: Within 30 days of agreement".to_string(),
            "Possession Date: December 31, 2024".to_string(),
        ],
        legal_obligations: vec![
            "Seller must provide clear title deed before possession".to_string(),
            "Buyer must pay remaining amount within 15 days".to_string(),
            "Both parties must be present for registration".to_string(),
            "Property tax clearance certificate required".to_string(),
        ],
        deadlines: vec![
            Deadline {
                item: "Registration completion".to_string(),
                due: "December 15, 2024".to_string(),
                priority: Priority::High,
            },
            Deadline {
                item: "Final payment".to_string(),
                due: "December 10, 2024".to_string(),
                priority: Priority::High,
            },
            Deadline {
                item: "Property inspection".to_string(),
                due: "December 5, 2024".to_string(),
                priority: Priority::Medium,
            },
        ],
        risk_areas: vec![
            "No mention of penalty for delayed possession".to_string(),
            "Property tax liability unclear".to_string(),
            "No specific clause for property defects".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick_analyzer() -> DocumentAnalyzer {
        DocumentAnalyzer::new(AnalyzerConfig {
            delay: Duration::from_millis(5),
            max_document_bytes: 64,
        })
    }

    #[test]
    fn rejects_blank_text_before_taking_the_slot() {
        let analyzer = quick_analyzer();
        let err = analyzer.validate(&DocumentInput::text("   \n\t"));
        assert_eq!(err, Err(AnalysisError::EmptyDocument));
        assert!(!analyzer.is_pending());
    }

    #[test]
    fn rejects_unknown_file_types() {
        let analyzer = quick_analyzer();
        let err = analyzer.validate(&DocumentInput::file("malware.exe", vec![0, 1]));
        assert!(matches!(err, Err(AnalysisError::UnsupportedFileType(_))));

        let err = analyzer.validate(&DocumentInput::file("no-extension", Vec::new()));
        assert!(matches!(err, Err(AnalysisError::UnsupportedFileType(_))));
    }

    #[test]
    fn accepts_the_advertised_file_types() {
        let analyzer = quick_analyzer();
        for name in ["a.pdf", "b.doc", "c.docx", "d.txt", "E.PDF"] {
            assert_eq!(analyzer.validate(&DocumentInput::file(name, vec![1])), Ok(()));
        }
    }

    #[test]
    fn enforces_the_size_limit() {
        let analyzer = quick_analyzer();
        let err = analyzer.validate(&DocumentInput::file("big.txt", vec![0; 65]));
        assert_eq!(
            err,
            Err(AnalysisError::DocumentTooLarge { size: 65, limit: 64 })
        );
    }

    #[test]
    fn report_shape_matches_the_contract() {
        let report = sample_report();
        assert_eq!(report.key_points.len(), 5);
        assert_eq!(report.legal_obligations.len(), 4);
        assert_eq!(report.deadlines.len(), 3);
        assert_eq!(report.risk_areas.len(), 3);
        assert_eq!(
            report.deadlines.iter().filter(|d| d.priority == Priority::High).count(),
            2
        );
    }
}
