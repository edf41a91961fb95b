//! Lawgorithm - legal assistance platform.
//!
//! Document simplification, a searchable lawyer directory, Indian Penal Code
//! lookup, and a case-process guide, served as plain HTML over axum. All
//! record collections are static seed data behind read-only repositories;
//! analysis and authentication are in-process stand-ins for real backends.

pub mod analysis;
pub mod config;
pub mod directory;
pub mod models;
pub mod repository;
pub mod server;
pub mod session;
