//! Symptom-analysis result types.
//!
//! `SymptomAnalysis` is the ephemeral output of one `analyze` call — it is
//! created per user message, rendered into a response, and dropped.

use serde::{Deserialize, Serialize};

/// Coarse three-level severity derived purely from match count.
///
/// This is a table-driven label, not medical judgment: zero matched symptom
/// keys map to `Low`, exactly one to `Moderate`, two or more to `High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Moderate,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Moderate => "moderate",
            Severity::High => "high",
        }
    }

    /// Derive severity from the number of matched symptom keys.
    pub fn from_match_count(count: usize) -> Self {
        match count {
            0 => Severity::Low,
            1 => Severity::Moderate,
            _ => Severity::High,
        }
    }
}

/// The result of analyzing one free-text message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomAnalysis {
    /// Matched symptom keys, in symptom-table order (not relevance order).
    pub symptoms: Vec<String>,
    /// Severity label derived from the match count.
    pub severity: Severity,
    /// Extracted duration. The captured integer from the first duration
    /// phrase in the input; 1 when no phrase is present. The time unit is
    /// discarded, so "2 weeks" and "2 days" both yield 2.
    pub duration_days: u32,
    /// Display names of every condition associated with a matched symptom,
    /// flattened in table order. May contain duplicates.
    pub related_conditions: Vec<String>,
}
