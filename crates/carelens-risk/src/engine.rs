//! The rule-driven risk scoring engine.
//!
//! `RiskEngine` loads an `AssessmentConfig` from TOML and scores bookings.
//!
//! Scoring algorithm, per booking:
//!
//! 1. Validate the patient details; any missing required field aborts with
//!    a `Validation` error naming every missing field.
//! 2. Resolve the selected test against the catalog.
//! 3. Base risk from age: `<30 → 10`, `30–49 → 30`, `≥50 → 50`.
//! 4. Add the gender/test modifier when the rules define one.
//! 5. Add `weight * 30` for every question answered affirmatively.
//! 6. Clamp to [0, 100], bucket into a category, assemble recommendations
//!    and the report envelope.
//!
//! Scoring is single-shot and stateless: identical inputs produce identical
//! scores, and the loaded rules are never mutated.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::Utc;
use tracing::{debug, warn};

use carelens_contracts::{
    error::{CarelensError, CarelensResult},
    patient::{Gender, PatientDetails},
    report::{ReportId, RiskCategory, RiskProfileSummary, RiskReport, REPORT_DISCLAIMER},
};

use crate::config::{AssessmentConfig, LabTest, Question, RiskProfile};

/// The default assessment rules compiled into the crate.
const DEFAULT_ASSESSMENT_RULES: &str = include_str!("../config/assessment.toml");

/// Points contributed by an affirmative answer per unit of question weight.
const QUESTION_WEIGHT_SCALE: f64 = 30.0;

/// Everything the scorer needs for one booking.
///
/// `answers` is keyed by question text; questions absent from the map are
/// treated as answered "no". A `BTreeMap` keeps iteration deterministic.
#[derive(Debug, Clone, Default)]
pub struct BookingRequest {
    /// The booking form contents.
    pub details: PatientDetails,
    /// Catalog id of the selected test, e.g. "thyroid".
    pub test_id: String,
    /// Questionnaire answers, keyed by question text.
    pub answers: BTreeMap<String, bool>,
}

/// A risk scorer backed by TOML-declared assessment rules.
///
/// Construct via [`RiskEngine::builtin`] for the compiled-in rules, or
/// [`RiskEngine::from_toml_str`] / [`RiskEngine::from_file`] for a custom
/// rule set.
#[derive(Debug)]
pub struct RiskEngine {
    config: AssessmentConfig,
}

impl RiskEngine {
    /// Build an engine from the embedded default rules.
    ///
    /// # Panics
    ///
    /// Panics if the compiled-in rules document is malformed — which cannot
    /// happen for a released build; the document is covered by tests.
    pub fn builtin() -> Self {
        Self::from_toml_str(DEFAULT_ASSESSMENT_RULES)
            .expect("embedded assessment rules must parse")
    }

    /// Parse `s` as TOML and build an engine.
    ///
    /// Returns `CarelensError::Config` if the TOML is malformed, does not
    /// match the `AssessmentConfig` schema, or declares no profiles.
    pub fn from_toml_str(s: &str) -> CarelensResult<Self> {
        let config: AssessmentConfig =
            toml::from_str(s).map_err(|e| CarelensError::Config {
                reason: format!("failed to parse assessment TOML: {}", e),
            })?;

        if config.profiles.is_empty() {
            return Err(CarelensError::Config {
                reason: "assessment rules must declare at least one profile".to_string(),
            });
        }

        Ok(Self { config })
    }

    /// Read the file at `path` and parse it as TOML assessment rules.
    pub fn from_file(path: &Path) -> CarelensResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| CarelensError::Config {
            reason: format!("failed to read assessment file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// The lab-test catalog, in declaration order.
    pub fn tests(&self) -> &[LabTest] {
        &self.config.tests
    }

    /// Look up a catalog entry by id.
    pub fn find_test(&self, test_id: &str) -> Option<&LabTest> {
        self.config.tests.iter().find(|test| test.id == test_id)
    }

    /// The questionnaire for a test, or an error when the id is unknown.
    pub fn questions(&self, test_id: &str) -> CarelensResult<&[Question]> {
        self.find_test(test_id)
            .map(|test| test.questions.as_slice())
            .ok_or_else(|| CarelensError::UnknownTest {
                test_id: test_id.to_string(),
            })
    }

    /// Score one booking and assemble its report.
    ///
    /// # Errors
    ///
    /// - `Validation` when any required patient field is empty; the error
    ///   names every missing field and no partial state is retained.
    /// - `UnknownTest` when `test_id` is not in the catalog.
    pub fn score(&self, request: &BookingRequest) -> CarelensResult<RiskReport> {
        let missing = request.details.missing_fields();
        if !missing.is_empty() {
            warn!(missing = ?missing, "booking rejected: required fields empty");
            return Err(CarelensError::Validation { missing });
        }

        let test = self.find_test(&request.test_id).ok_or_else(|| {
            warn!(test_id = %request.test_id, "booking rejected: test id not in catalog");
            CarelensError::UnknownTest {
                test_id: request.test_id.clone(),
            }
        })?;

        // Validation guarantees gender is present.
        let gender = request.details.gender.unwrap_or(Gender::Other);
        let age = self.normalize_age(&request.details.age);
        let profile = self.profile_for(age);

        let base_risk = age_base_risk(age);
        let gender_bonus = test.gender_modifiers.bonus_for(gender);
        let questionnaire_risk = questionnaire_risk(&test.questions, &request.answers);

        let total = f64::from(base_risk) + f64::from(gender_bonus) + questionnaire_risk;
        // Ceiling only: every contribution is non-negative.
        let risk_score = total.min(100.0).round() as u8;
        let risk_category = RiskCategory::from_score(risk_score);

        debug!(
            test_id = %test.id,
            age,
            gender = %gender,
            base_risk,
            gender_bonus,
            questionnaire_risk,
            risk_score,
            category = risk_category.label(),
            "booking scored"
        );

        Ok(RiskReport {
            report_id: ReportId::new(),
            patient_name: request.details.name.clone(),
            test_name: test.name.clone(),
            risk_score,
            risk_category,
            recommendations: assemble_recommendations(risk_category, test),
            risk_profile: RiskProfileSummary {
                age_group: profile.id.clone(),
                potential_conditions: profile.conditions.clone(),
                risk_factors: profile.risk_factors.clone(),
            },
            generated_at: Utc::now(),
            disclaimer: REPORT_DISCLAIMER.to_string(),
        })
    }

    /// Parse the age the user typed, normalizing unparseable input to the
    /// youngest bracket's lower bound.
    fn normalize_age(&self, raw: &str) -> u32 {
        match raw.trim().parse::<u32>() {
            Ok(age) => age,
            Err(_) => {
                let fallback = self.config.profiles[0].age_min;
                warn!(age = %raw, fallback, "unparseable age, normalizing to youngest bracket");
                fallback
            }
        }
    }

    /// First bracket containing `age`, falling back to the first bracket for
    /// out-of-range ages. `from_toml_str` guarantees at least one profile.
    fn profile_for(&self, age: u32) -> &RiskProfile {
        self.config
            .profiles
            .iter()
            .find(|profile| profile.contains(age))
            .unwrap_or(&self.config.profiles[0])
    }
}

/// Age-based base risk: `<30 → 10`, `30–49 → 30`, `≥50 → 50`.
fn age_base_risk(age: u32) -> u32 {
    if age < 30 {
        10
    } else if age < 50 {
        30
    } else {
        50
    }
}

/// Sum of `weight * 30` over every question answered `true`.
///
/// Questions missing from `answers`, or answered `false`, contribute 0.
fn questionnaire_risk(questions: &[Question], answers: &BTreeMap<String, bool>) -> f64 {
    questions
        .iter()
        .filter(|question| answers.get(&question.text).copied().unwrap_or(false))
        .map(|question| question.weight * QUESTION_WEIGHT_SCALE)
        .sum()
}

/// Deterministic recommendation assembly.
///
/// High-risk reports lead with the urgent-consultation and follow-up
/// entries; every report ends with the test-specific recommendation.
fn assemble_recommendations(category: RiskCategory, test: &LabTest) -> Vec<String> {
    let mut recommendations = Vec::new();
    if category == RiskCategory::High {
        recommendations
            .push("Urgent consultation with a healthcare professional recommended.".to_string());
        recommendations.push("Consider comprehensive follow-up tests.".to_string());
    }
    recommendations.push(test.recommendation.clone());
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn details(name: &str, age: &str, gender: Gender) -> PatientDetails {
        PatientDetails {
            name: name.to_string(),
            age: age.to_string(),
            gender: Some(gender),
            email: "patient@example.com".to_string(),
            phone: "555-0100".to_string(),
            ..PatientDetails::default()
        }
    }

    fn request(age: &str, gender: Gender, test_id: &str) -> BookingRequest {
        BookingRequest {
            details: details("Test Patient", age, gender),
            test_id: test_id.to_string(),
            answers: BTreeMap::new(),
        }
    }

    /// Answer every questionnaire question for `test_id` with `true`.
    fn all_yes(engine: &RiskEngine, test_id: &str) -> BTreeMap<String, bool> {
        engine
            .questions(test_id)
            .unwrap()
            .iter()
            .map(|q| (q.text.clone(), true))
            .collect()
    }

    // ── Construction ──────────────────────────────────────────────────────────

    #[test]
    fn builtin_rules_parse_and_cover_the_catalog() {
        let engine = RiskEngine::builtin();
        assert_eq!(engine.tests().len(), 5);
        for id in ["cbc", "lipid", "thyroid", "diabetes", "liver"] {
            let test = engine.find_test(id).unwrap();
            assert_eq!(test.questions.len(), 3, "test '{}' needs 3 questions", id);
        }
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let result = RiskEngine::from_toml_str("this is not toml ][[[");
        match result {
            Err(CarelensError::Config { reason }) => {
                assert!(reason.contains("failed to parse assessment TOML"));
            }
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn empty_profiles_are_rejected() {
        let result = RiskEngine::from_toml_str("profiles = []\ntests = []\n");
        match result {
            Err(CarelensError::Config { reason }) => {
                assert!(reason.contains("at least one profile"));
            }
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    // ── Validation ────────────────────────────────────────────────────────────

    #[test]
    fn missing_fields_abort_scoring_and_are_all_named() {
        let engine = RiskEngine::builtin();
        let booking = BookingRequest {
            details: PatientDetails {
                name: "Only Name".to_string(),
                ..PatientDetails::default()
            },
            test_id: "cbc".to_string(),
            answers: BTreeMap::new(),
        };
        match engine.score(&booking) {
            Err(CarelensError::Validation { missing }) => {
                assert_eq!(missing, vec!["age", "gender", "email", "phone"]);
            }
            other => panic!("expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn unknown_test_id_is_rejected() {
        let engine = RiskEngine::builtin();
        match engine.score(&request("40", Gender::Male, "genome")) {
            Err(CarelensError::UnknownTest { test_id }) => assert_eq!(test_id, "genome"),
            other => panic!("expected UnknownTest error, got {:?}", other),
        }
    }

    // ── Scoring ───────────────────────────────────────────────────────────────

    /// Age 25, male, lipid test, no answers: base 10 + male/lipid 25 = 35.
    #[test]
    fn young_male_lipid_scores_moderate_35() {
        let engine = RiskEngine::builtin();
        let report = engine.score(&request("25", Gender::Male, "lipid")).unwrap();
        assert_eq!(report.risk_score, 35);
        assert_eq!(report.risk_category, RiskCategory::Moderate);
        assert_eq!(report.risk_category.label(), "Moderate Risk");
    }

    /// Age 60, female, thyroid, all answers yes:
    /// base 50 + female/thyroid 20 + (0.3 + 0.3 + 0.4) * 30 = 100 (clamped).
    #[test]
    fn senior_female_thyroid_all_yes_clamps_to_100() {
        let engine = RiskEngine::builtin();
        let mut booking = request("60", Gender::Female, "thyroid");
        booking.answers = all_yes(&engine, "thyroid");

        let report = engine.score(&booking).unwrap();
        assert_eq!(report.risk_score, 100);
        assert_eq!(report.risk_category, RiskCategory::High);
        assert_eq!(
            report.recommendations,
            vec![
                "Urgent consultation with a healthcare professional recommended.",
                "Consider comprehensive follow-up tests.",
                "Comprehensive thyroid hormone panel recommended.",
            ]
        );
        assert_eq!(report.risk_profile.age_group, "high_risk_senior");
    }

    #[test]
    fn gender_other_receives_no_modifier() {
        let engine = RiskEngine::builtin();
        let report = engine.score(&request("25", Gender::Other, "lipid")).unwrap();
        assert_eq!(report.risk_score, 10);
        assert_eq!(report.risk_category, RiskCategory::Low);
    }

    #[test]
    fn unanswered_and_negative_answers_contribute_nothing() {
        let engine = RiskEngine::builtin();
        let mut booking = request("25", Gender::Other, "cbc");
        booking.answers = engine
            .questions("cbc")
            .unwrap()
            .iter()
            .map(|q| (q.text.clone(), false))
            .collect();
        let report = engine.score(&booking).unwrap();
        assert_eq!(report.risk_score, 10);
    }

    #[test]
    fn score_is_clamped_for_every_test_and_age() {
        let engine = RiskEngine::builtin();
        for id in ["cbc", "lipid", "thyroid", "diabetes", "liver"] {
            for age in ["18", "45", "99"] {
                for gender in [Gender::Male, Gender::Female, Gender::Other] {
                    let mut booking = request(age, gender, id);
                    booking.answers = all_yes(&engine, id);
                    let report = engine.score(&booking).unwrap();
                    assert!(report.risk_score <= 100);
                }
            }
        }
    }

    // ── Age normalization ─────────────────────────────────────────────────────

    #[test]
    fn unparseable_age_uses_youngest_bracket() {
        let engine = RiskEngine::builtin();
        let report = engine
            .score(&request("not-a-number", Gender::Other, "cbc"))
            .unwrap();
        assert_eq!(report.risk_score, 10);
        assert_eq!(report.risk_profile.age_group, "low_risk_young");
    }

    #[test]
    fn out_of_range_ages_fall_back_to_first_bracket() {
        let engine = RiskEngine::builtin();

        // Below every bracket: base risk still follows the raw age.
        let minor = engine.score(&request("16", Gender::Other, "cbc")).unwrap();
        assert_eq!(minor.risk_profile.age_group, "low_risk_young");
        assert_eq!(minor.risk_score, 10);

        // Above every bracket.
        let centenarian = engine.score(&request("104", Gender::Other, "cbc")).unwrap();
        assert_eq!(centenarian.risk_profile.age_group, "low_risk_young");
        assert_eq!(centenarian.risk_score, 50);
    }

    // ── Report envelope ───────────────────────────────────────────────────────

    #[test]
    fn report_echoes_profile_and_carries_disclaimer() {
        let engine = RiskEngine::builtin();
        let report = engine.score(&request("40", Gender::Female, "cbc")).unwrap();
        assert_eq!(report.patient_name, "Test Patient");
        assert_eq!(report.test_name, "Complete Blood Count (CBC)");
        assert_eq!(report.risk_profile.age_group, "moderate_risk_middle_age");
        assert!(report
            .risk_profile
            .potential_conditions
            .contains(&"preventive_care".to_string()));
        assert_eq!(report.disclaimer, REPORT_DISCLAIMER);
    }

    #[test]
    fn scoring_is_idempotent_apart_from_the_envelope() {
        let engine = RiskEngine::builtin();
        let booking = request("40", Gender::Female, "diabetes");

        let first = engine.score(&booking).unwrap();
        let second = engine.score(&booking).unwrap();

        assert_eq!(first.risk_score, second.risk_score);
        assert_eq!(first.risk_category, second.risk_category);
        assert_eq!(first.recommendations, second.recommendations);
        assert_eq!(first.risk_profile, second.risk_profile);
    }
}
