//! # carelens-triage
//!
//! Keyword-driven symptom triage: the simulated "assistant" behind the chat
//! widget.
//!
//! ## Overview
//!
//! This crate provides two pure functions over a static symptom table:
//!
//! - [`analyze`] maps free text to matched symptom keys, a coarse severity
//!   label, an extracted duration, and the associated condition names.
//! - [`respond`] renders an analysis into the assistant's canned reply.
//!
//! There is no language model and no learned component — matching is
//! case-insensitive substring containment against fixed phrases, and severity
//! is a function of the match count alone.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use carelens_triage::{analyze, respond};
//!
//! let analysis = analyze("I've had a cough and fever for 3 days");
//! let reply = respond(&analysis);
//! ```

pub mod analyzer;
pub mod response;
pub mod symptoms;

pub use analyzer::analyze;
pub use response::respond;
pub use symptoms::{ConditionDetail, ConditionRef, SymptomEntry, SYMPTOM_TABLE};
