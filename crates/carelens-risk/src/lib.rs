//! # carelens-risk
//!
//! A TOML-driven risk scorer for lab-test bookings.
//!
//! ## Overview
//!
//! This crate provides [`RiskEngine`], which combines patient age, gender,
//! the selected test, and yes/no questionnaire answers into a bounded
//! numeric score, a three-tier category, and canned recommendations — all
//! driven by an [`AssessmentConfig`] declared in TOML. The rules are
//! editable business data, not code: weights, brackets, and catalog entries
//! live in `config/assessment.toml`.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use carelens_risk::{BookingRequest, RiskEngine};
//!
//! let engine = RiskEngine::builtin();
//! let report = engine.score(&booking)?;
//! println!("{}: {}", report.risk_score, report.risk_category.label());
//! ```

pub mod config;
pub mod engine;

pub use config::{AssessmentConfig, GenderModifiers, LabTest, Question, RiskProfile};
pub use engine::{BookingRequest, RiskEngine};
