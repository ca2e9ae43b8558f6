//! Free-text symptom analysis.
//!
//! `analyze` is a pure function over the static symptom table: lowercase the
//! input, test each symptom key by substring containment in table order,
//! derive severity from the match count, and pull a duration integer out of
//! the first duration phrase. It always returns a result — an input with no
//! recognized symptoms yields severity `Low` and empty lists.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use carelens_contracts::triage::{Severity, SymptomAnalysis};

use crate::symptoms::SYMPTOM_TABLE;

/// Matches phrases like "3 days", "2 weeks", "12 hours".
///
/// Only the numeral is kept; the unit is matched so the phrase is recognized
/// but its magnitude is discarded ("2 weeks" yields 2, same as "2 days").
static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*(day|week|month|hour)s?")
        .expect("duration regex is a checked literal")
});

/// Duration reported when the input contains no duration phrase.
const DEFAULT_DURATION_DAYS: u32 = 1;

/// Analyze one user message against the symptom table.
///
/// Matching is case-insensitive substring containment; matched keys are
/// collected in table order, not in order of appearance in the input.
/// Related conditions are flattened per match and may contain duplicates
/// when two matched symptoms share a condition.
pub fn analyze(text: &str) -> SymptomAnalysis {
    let input = text.to_lowercase();

    let matched: Vec<_> = SYMPTOM_TABLE
        .iter()
        .filter(|entry| input.contains(entry.key))
        .collect();

    let symptoms: Vec<String> = matched.iter().map(|entry| entry.key.to_string()).collect();
    let severity = Severity::from_match_count(matched.len());

    let related_conditions: Vec<String> = matched
        .iter()
        .flat_map(|entry| entry.conditions.iter())
        .map(|condition| condition.display_name().to_string())
        .collect();

    let duration_days = extract_duration(&input);

    debug!(
        matches = symptoms.len(),
        severity = severity.as_str(),
        duration_days,
        "symptom analysis complete"
    );

    SymptomAnalysis {
        symptoms,
        severity,
        duration_days,
        related_conditions,
    }
}

/// Pull the integer out of the first duration phrase in `input`.
///
/// `input` must already be lowercased. Returns `DEFAULT_DURATION_DAYS` when
/// no phrase is present or the numeral does not fit a `u32`.
fn extract_duration(input: &str) -> u32 {
    DURATION_RE
        .captures(input)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(DEFAULT_DURATION_DAYS)
}
