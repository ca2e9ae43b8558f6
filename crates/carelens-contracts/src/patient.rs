//! Patient identity and booking-form types.
//!
//! `PatientDetails` mirrors the booking form field-for-field, including the
//! three free-text medical-history answers. Age is deliberately kept as the
//! raw text the user typed — normalization happens inside the risk scorer,
//! which owns the fallback policy for unparseable values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Patient gender as selected on the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// The lowercase form used in storage and score-modifier lookups.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            other => Err(format!("unrecognized gender '{}'", other)),
        }
    }
}

/// Everything the booking form collects about a patient.
///
/// `gender` is `None` until a selection is made; the required-field check
/// reports it as missing alongside any empty text fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientDetails {
    /// Full name. Required.
    pub name: String,
    /// Age as typed, numeric-as-text. Required.
    pub age: String,
    /// Gender selection. Required.
    pub gender: Option<Gender>,
    /// Contact email. Required.
    pub email: String,
    /// Contact phone number. Required.
    pub phone: String,
    /// Free-text notes. Optional.
    pub additional_notes: String,
    /// Medical-history answer: "Do you experience frequent fatigue?". Optional.
    pub frequent_fatigue: String,
    /// Medical-history answer: "Have you noticed any unexplained bruising
    /// or bleeding?". Optional.
    pub unexplained_bruising: String,
    /// Medical-history answer: "Do you have a family history of blood
    /// disorders?". Optional.
    pub family_blood_disorders: String,
}

impl PatientDetails {
    /// Return the names of every required field that is still empty.
    ///
    /// An empty result means the details are complete enough to score a
    /// booking. Field names match the booking form so the validation message
    /// reads naturally to the user.
    pub fn missing_fields(&self) -> Vec<String> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name".to_string());
        }
        if self.age.trim().is_empty() {
            missing.push("age".to_string());
        }
        if self.gender.is_none() {
            missing.push("gender".to_string());
        }
        if self.email.trim().is_empty() {
            missing.push("email".to_string());
        }
        if self.phone.trim().is_empty() {
            missing.push("phone".to_string());
        }
        missing
    }
}
