//! The risk report generated once per lab-test booking.
//!
//! A report is held in memory for the current session only — it backs the
//! on-screen summary and the file exports, and is discarded afterwards.
//! Nothing here is persisted or shared across bookings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed disclaimer appended to every generated report.
pub const REPORT_DISCLAIMER: &str =
    "AI-generated preliminary report. Professional medical consultation is essential.";

/// Unique identifier for a single report generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportId(pub uuid::Uuid);

impl ReportId {
    /// Create a new, unique report ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for ReportId {
    fn default() -> Self {
        Self::new()
    }
}

/// Three-tier bucketing of the risk score.
///
/// Score thresholds: `<30 → Low`, `<60 → Moderate`, otherwise `High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskCategory {
    Low,
    Moderate,
    High,
}

impl RiskCategory {
    /// Bucket a clamped score into its category.
    pub fn from_score(score: u8) -> Self {
        if score < 30 {
            RiskCategory::Low
        } else if score < 60 {
            RiskCategory::Moderate
        } else {
            RiskCategory::High
        }
    }

    /// The display label used in reports ("Low Risk", "Moderate Risk",
    /// "High Risk").
    pub fn label(&self) -> &'static str {
        match self {
            RiskCategory::Low => "Low Risk",
            RiskCategory::Moderate => "Moderate Risk",
            RiskCategory::High => "High Risk",
        }
    }
}

/// The age-bracket profile fields echoed into a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskProfileSummary {
    /// Stable bracket id, e.g. "low_risk_young".
    pub age_group: String,
    /// Condition tags attached to the bracket.
    pub potential_conditions: Vec<String>,
    /// Risk-factor strings attached to the bracket.
    pub risk_factors: Vec<String>,
}

/// The exportable summary of one risk-scoring invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskReport {
    /// Identity of this generation; appears in logs, never shown to users.
    pub report_id: ReportId,
    /// Patient name as entered on the booking form.
    pub patient_name: String,
    /// Display name of the selected lab test.
    pub test_name: String,
    /// Additive rule-based score, clamped to [0, 100].
    pub risk_score: u8,
    /// Category bucket for `risk_score`.
    pub risk_category: RiskCategory,
    /// Canned recommendations, assembled deterministically from the
    /// category and the selected test.
    pub recommendations: Vec<String>,
    /// Echo of the matched age-bracket profile.
    pub risk_profile: RiskProfileSummary,
    /// Wall-clock generation time (UTC).
    pub generated_at: DateTime<Utc>,
    /// Always `REPORT_DISCLAIMER`; carried on the struct so serialized
    /// reports are self-contained.
    pub disclaimer: String,
}
