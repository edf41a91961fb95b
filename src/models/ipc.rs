//! Indian Penal Code sections with simplified explanations.

use serde::{Deserialize, Serialize};

use crate::directory::DirectoryEntry;

/// One IPC section entry in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcSection {
    /// Section identifier as cited, e.g. "302" or "498A".
    pub section: String,
    /// Short title, e.g. "Murder".
    pub title: String,
    /// The statutory text as enacted.
    pub original_text: String,
    /// Plain-language explanation of the section.
    pub simplified_text: String,
    /// Punishment summary.
    pub punishment: String,
    /// Single offence category tag.
    pub category: String,
    /// Illustrative examples, in authored order.
    pub examples: Vec<String>,
}

impl DirectoryEntry for IpcSection {
    fn key(&self) -> &str {
        &self.section
    }

    /// The text query probes the identifier, title, and simplified text.
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.section, &self.title, &self.simplified_text]
    }

    fn categories(&self) -> &[String] {
        std::slice::from_ref(&self.category)
    }
}
