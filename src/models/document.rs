//! Uploaded-document records as tracked by the admin panel.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle of a submitted document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingStatus {
    Pending,
    Processing,
    Processed,
}

impl ProcessingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProcessingStatus::Pending => "Pending",
            ProcessingStatus::Processing => "Processing",
            ProcessingStatus::Processed => "Processed",
        }
    }
}

/// A document submitted for simplification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub title: String,
    /// Name of the member who submitted it.
    pub owner: String,
    pub uploaded: NaiveDate,
    pub status: ProcessingStatus,
}
