//! Read-only data access for platform records.
//!
//! Record collections sit behind narrow repository traits so a real backend
//! can replace the static seed data without touching the directory filtering
//! contract. The static providers here never fail; the error type exists as
//! the seam a fallible backend would use.

mod content;
mod ipc;
mod lawyers;

pub use content::{CaseGuide, PlatformContent, PlatformStats};
pub use ipc::{IpcCatalog, StaticIpcCatalog};
pub use lawyers::{LawyerDirectory, StaticLawyerDirectory};

use thiserror::Error;

/// Failures a backing store may surface. Static providers produce none.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("record store unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
