//! Domain models for platform records.
//!
//! Everything here is immutable for the lifetime of the process: records are
//! seeded once by the repositories and only ever read.

mod case;
mod document;
mod ipc;
mod lawyer;
mod user;

pub use case::{CaseStep, CaseTrack, CaseTip};
pub use document::{DocumentRecord, ProcessingStatus};
pub use ipc::IpcSection;
pub use lawyer::Lawyer;
pub use user::{PlatformUser, Role, User};
