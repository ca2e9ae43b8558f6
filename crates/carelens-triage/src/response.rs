//! Canned response rendering for the chat assistant.
//!
//! `respond` selects a fixed sentence template per severity tier and
//! interpolates the analysis fields. There is no generation here — every
//! sentence a user can receive appears literally in this file.

use carelens_contracts::triage::{Severity, SymptomAnalysis};

/// Returned verbatim when the analysis matched no symptoms.
pub const CLARIFICATION_PROMPT: &str = "I noticed you haven't specified any clear symptoms. \
     Could you provide more details about what you're experiencing?";

/// Disclaimer appended to every non-empty assessment.
const RESPONSE_DISCLAIMER: &str = "Disclaimer: This is an AI-generated recommendation \
     and should not replace professional medical advice.";

fn severity_sentence(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => "Your symptoms appear mild.",
        Severity::Moderate => "Your symptoms suggest a potential health concern.",
        Severity::High => {
            "Your symptoms indicate a more serious condition that requires attention."
        }
    }
}

fn recommendation_sentence(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => "Consider rest, hydration, and over-the-counter remedies.",
        Severity::Moderate => {
            "Monitor your symptoms and consult a healthcare professional if they persist or worsen."
        }
        Severity::High => "Strongly recommend immediate medical consultation or emergency care.",
    }
}

/// Render an analysis into the assistant's reply.
///
/// When no symptoms matched, returns `CLARIFICATION_PROMPT`. Otherwise the
/// reply is assembled in fixed order: severity sentence, possible conditions
/// (comma-joined), duration line, severity-tier recommendation, disclaimer.
pub fn respond(analysis: &SymptomAnalysis) -> String {
    if analysis.symptoms.is_empty() {
        return CLARIFICATION_PROMPT.to_string();
    }

    let conditions = if analysis.related_conditions.is_empty() {
        "Unable to determine specific conditions.".to_string()
    } else {
        format!(
            "Possible conditions include: {}.",
            analysis.related_conditions.join(", ")
        )
    };

    format!(
        "{} {} Symptoms duration: {} day(s). {} {}",
        severity_sentence(analysis.severity),
        conditions,
        analysis.duration_days,
        recommendation_sentence(analysis.severity),
        RESPONSE_DISCLAIMER,
    )
}
