//! Case-process guide records.

use serde::{Deserialize, Serialize};

/// The two tracked kinds of court proceedings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseTrack {
    Criminal,
    Civil,
}

impl CaseTrack {
    pub fn label(&self) -> &'static str {
        match self {
            CaseTrack::Criminal => "Criminal Case",
            CaseTrack::Civil => "Civil Case",
        }
    }

    /// Parse a track from a route query value; anything unrecognized falls
    /// back to the criminal track, the view's default tab.
    pub fn from_query(value: &str) -> Self {
        match value {
            "civil" => CaseTrack::Civil,
            _ => CaseTrack::Criminal,
        }
    }
}

/// One stage in a case-process track.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseStep {
    pub title: String,
    pub description: String,
    /// Typical duration, free text ("60-90 days").
    pub duration: String,
    /// Documents involved at this stage.
    pub documents: Vec<String>,
    pub completed: bool,
    pub current: bool,
}

/// A practical tip shown alongside the guide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseTip {
    pub title: String,
    pub description: String,
}
