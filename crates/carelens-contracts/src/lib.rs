//! # carelens-contracts
//!
//! Shared types, schemas, and contracts for the Carelens health assistant
//! core.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate — only data definitions and error types.

pub mod error;
pub mod metrics;
pub mod patient;
pub mod report;
pub mod triage;
