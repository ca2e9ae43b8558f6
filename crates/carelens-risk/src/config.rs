//! Assessment rule types and configuration schema.
//!
//! An `AssessmentConfig` is deserialized from TOML and holds the editable
//! business rules behind the risk scorer: age-bracket profiles, the lab-test
//! catalog, per-test gender score modifiers, and per-test questionnaires.
//! Profiles are matched in declaration order — the first bracket whose range
//! contains the patient's age wins, and out-of-range ages fall back to the
//! first bracket.

use serde::{Deserialize, Serialize};

use carelens_contracts::patient::Gender;

/// One age bracket with its associated condition tags and risk factors.
///
/// Brackets are inclusive on both ends. The default rules cover ages 18–100
/// contiguously, so the fallback path only fires for out-of-range input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskProfile {
    /// Stable identifier echoed into reports, e.g. "low_risk_young".
    pub id: String,
    /// Inclusive lower bound of the bracket.
    pub age_min: u32,
    /// Inclusive upper bound of the bracket.
    pub age_max: u32,
    /// Condition tags attached to the bracket.
    pub conditions: Vec<String>,
    /// Risk-factor strings attached to the bracket.
    pub risk_factors: Vec<String>,
}

impl RiskProfile {
    /// Return true if `age` falls inside this bracket.
    pub fn contains(&self, age: u32) -> bool {
        age >= self.age_min && age <= self.age_max
    }
}

/// Additive score bonuses applied when the patient's gender matches.
///
/// A combination absent from the rules contributes 0 — gender `other`
/// never matches a modifier.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GenderModifiers {
    #[serde(default)]
    pub female: u32,
    #[serde(default)]
    pub male: u32,
}

impl GenderModifiers {
    /// The bonus for the given gender.
    pub fn bonus_for(&self, gender: Gender) -> u32 {
        match gender {
            Gender::Female => self.female,
            Gender::Male => self.male,
            Gender::Other => 0,
        }
    }
}

/// The answer type a question expects. Only boolean questions exist today;
/// the variant is explicit so the TOML schema has room to grow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnswerKind {
    #[default]
    Boolean,
}

/// One questionnaire question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// The question as shown to the patient; also the key answers are
    /// submitted under.
    pub text: String,
    /// Expected answer type.
    #[serde(default)]
    pub kind: AnswerKind,
    /// Risk weight in [0, 1]. An affirmative answer contributes
    /// `weight * 30` points.
    pub weight: f64,
}

/// One bookable lab test with its scoring rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabTest {
    /// Stable id used in bookings, e.g. "cbc".
    pub id: String,
    /// Display name, e.g. "Complete Blood Count (CBC)".
    pub name: String,
    /// One-line description shown in the catalog.
    pub description: String,
    /// Whether automated analysis is offered for this test.
    #[serde(default)]
    pub ai_analysis: bool,
    /// Suggested repeat interval, free text.
    pub recommended_frequency: String,
    /// The test-specific recommendation appended to every report for this
    /// test.
    pub recommendation: String,
    /// Gender-conditional score bonuses.
    #[serde(default)]
    pub gender_modifiers: GenderModifiers,
    /// Ordered questionnaire for this test.
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// The top-level structure deserialized from a TOML assessment file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentConfig {
    /// Ordered age brackets. First containing bracket wins.
    pub profiles: Vec<RiskProfile>,
    /// The lab-test catalog.
    pub tests: Vec<LabTest>,
}
