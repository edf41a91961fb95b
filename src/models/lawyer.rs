//! Lawyer profiles listed in the directory.

use serde::{Deserialize, Serialize};

use crate::directory::DirectoryEntry;

/// A verified lawyer profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lawyer {
    /// Stable identifier.
    pub id: String,
    /// Display name, e.g. "Adv. Priya Sharma".
    pub name: String,
    /// Practice areas; never empty, order is display order.
    pub specializations: Vec<String>,
    /// Years of practice.
    pub experience_years: u32,
    /// City the lawyer practices in.
    pub location: String,
    /// Average review rating out of 5.
    pub rating: f32,
    /// Number of reviews behind the rating.
    pub reviews: u32,
    /// Consultation rate in rupees per hour.
    pub hourly_rate: u32,
    /// Languages spoken.
    pub languages: Vec<String>,
    /// Free-text availability label, e.g. "Available today".
    pub availability: String,
    /// Short profile blurb.
    pub description: String,
}

impl DirectoryEntry for Lawyer {
    fn key(&self) -> &str {
        &self.id
    }

    /// The text query probes the name and each specialization tag.
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = Vec::with_capacity(1 + self.specializations.len());
        fields.push(self.name.as_str());
        fields.extend(self.specializations.iter().map(String::as_str));
        fields
    }

    fn categories(&self) -> &[String] {
        &self.specializations
    }

    fn location(&self) -> Option<&str> {
        Some(&self.location)
    }
}
