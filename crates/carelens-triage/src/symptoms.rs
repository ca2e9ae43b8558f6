//! The static symptom database.
//!
//! Eleven symptom phrases, each carrying the conditions it may indicate and
//! its common risk factors. The table is an immutable process-wide constant:
//! it is compiled in, never mutated, and every lookup borrows from it.
//!
//! Condition entries come in two shapes. Most are a bare display name; a few
//! (headache, stomach pain, nausea) carry a full record with characteristic
//! symptoms, suggested solutions, a severity note, and diagnostic tests.
//! `ConditionRef` makes the two shapes explicit so consuming code pattern
//! matches instead of probing fields.

/// A fully described condition attached to a symptom entry.
#[derive(Debug, PartialEq, Eq)]
pub struct ConditionDetail {
    /// Display name, e.g. "migraine".
    pub name: &'static str,
    /// Characteristic presentation.
    pub symptoms: &'static [&'static str],
    /// Suggested management steps.
    pub solutions: &'static [&'static str],
    /// Free-text severity note, e.g. "moderate-high".
    pub severity: &'static str,
    /// Tests typically used to confirm the condition.
    pub diagnostic_tests: &'static [&'static str],
}

/// One condition associated with a symptom: either a bare name or a full
/// record. Consumers pattern-match on the shape explicitly.
#[derive(Debug, PartialEq, Eq)]
pub enum ConditionRef {
    Simple(&'static str),
    Detailed(&'static ConditionDetail),
}

impl ConditionRef {
    /// The display name, regardless of shape.
    pub fn display_name(&self) -> &'static str {
        match self {
            ConditionRef::Simple(name) => name,
            ConditionRef::Detailed(detail) => detail.name,
        }
    }

    /// The full record when this entry carries one.
    pub fn detail(&self) -> Option<&'static ConditionDetail> {
        match self {
            ConditionRef::Simple(_) => None,
            ConditionRef::Detailed(detail) => Some(detail),
        }
    }
}

/// One row of the symptom table.
#[derive(Debug)]
pub struct SymptomEntry {
    /// The phrase matched by substring containment against user input.
    pub key: &'static str,
    /// Conditions this symptom may indicate, in display order.
    pub conditions: &'static [ConditionRef],
    /// Common risk factors for this symptom.
    pub risk_factors: &'static [&'static str],
}

// ── Detailed condition records ────────────────────────────────────────────────

const MIGRAINE: ConditionDetail = ConditionDetail {
    name: "migraine",
    symptoms: &[
        "intense throbbing pain",
        "nausea",
        "light sensitivity",
        "visual disturbances",
    ],
    solutions: &[
        "Prescription migraine medications",
        "Preventive medications",
        "Stress management",
        "Regular sleep schedule",
        "Avoiding known triggers",
    ],
    severity: "moderate-high",
    diagnostic_tests: &["Neurological exam", "MRI", "CT scan"],
};

const TENSION_HEADACHE: ConditionDetail = ConditionDetail {
    name: "tension headache",
    symptoms: &[
        "dull, aching head pain",
        "pressure around forehead",
        "scalp tenderness",
    ],
    solutions: &[
        "Over-the-counter pain relievers",
        "Stress reduction techniques",
        "Massage",
        "Improved posture",
        "Regular exercise",
    ],
    severity: "low",
    diagnostic_tests: &["Physical examination", "Stress assessment"],
};

const GASTRITIS: ConditionDetail = ConditionDetail {
    name: "gastritis",
    symptoms: &["burning sensation in stomach", "nausea", "indigestion"],
    solutions: &[
        "Antacids and acid reducers",
        "Avoid spicy and acidic foods",
        "Stress management",
        "Antibiotics if H. pylori bacteria is present",
    ],
    severity: "moderate",
    diagnostic_tests: &["Endoscopy", "Blood tests", "Stool tests"],
};

const APPENDICITIS: ConditionDetail = ConditionDetail {
    name: "appendicitis",
    symptoms: &["severe right-side abdominal pain", "fever", "nausea"],
    solutions: &[
        "Immediate surgical intervention (appendectomy)",
        "Antibiotics",
        "Hospital observation",
    ],
    severity: "high",
    diagnostic_tests: &["CT scan", "Ultrasound", "Blood tests"],
};

const IBS: ConditionDetail = ConditionDetail {
    name: "irritable bowel syndrome (IBS)",
    symptoms: &["abdominal cramping", "bloating", "constipation", "diarrhea"],
    solutions: &[
        "Dietary modifications",
        "Stress reduction techniques",
        "Probiotics",
        "Fiber supplements",
        "Medication for symptom management",
    ],
    severity: "low-moderate",
    diagnostic_tests: &["Colonoscopy", "Blood tests", "Stool analysis"],
};

const FOOD_POISONING: ConditionDetail = ConditionDetail {
    name: "food poisoning",
    symptoms: &["vomiting", "diarrhea", "abdominal cramps", "fever"],
    solutions: &[
        "Hydration",
        "Oral rehydration solutions",
        "Rest",
        "Bland diet",
        "Antibiotics in severe cases",
    ],
    severity: "moderate",
    diagnostic_tests: &["Stool culture", "Blood tests"],
};

const PREGNANCY_NAUSEA: ConditionDetail = ConditionDetail {
    name: "pregnancy-related nausea",
    symptoms: &["morning sickness", "food aversions", "fatigue"],
    solutions: &[
        "Small, frequent meals",
        "Ginger supplements",
        "Vitamin B6",
        "Avoid triggers",
        "Medication under doctor's guidance",
    ],
    severity: "low",
    diagnostic_tests: &["Pregnancy test", "Blood hormone levels"],
};

const MIGRAINE_NAUSEA: ConditionDetail = ConditionDetail {
    name: "migraine-induced nausea",
    symptoms: &["intense headache", "sensitivity to light", "vomiting"],
    solutions: &[
        "Prescription migraine medications",
        "Preventive medications",
        "Stress management",
        "Identifying and avoiding triggers",
        "Relaxation techniques",
    ],
    severity: "moderate-high",
    diagnostic_tests: &["Neurological examination", "MRI", "CT scan"],
};

// ── The symptom table ─────────────────────────────────────────────────────────

/// All known symptom phrases, grouped by body system.
///
/// Match order is declaration order; `analyze` reports matches in this order
/// regardless of where they appear in the input.
pub const SYMPTOM_TABLE: &[SymptomEntry] = &[
    // Respiratory system
    SymptomEntry {
        key: "cough",
        conditions: &[
            ConditionRef::Simple("common cold"),
            ConditionRef::Simple("flu"),
            ConditionRef::Simple("bronchitis"),
            ConditionRef::Simple("pneumonia"),
            ConditionRef::Simple("asthma"),
            ConditionRef::Simple("chronic obstructive pulmonary disease (COPD)"),
            ConditionRef::Simple("lung cancer"),
            ConditionRef::Simple("tuberculosis"),
            ConditionRef::Simple("COVID-19"),
        ],
        risk_factors: &[
            "smoking",
            "air pollution",
            "weak immune system",
            "age",
            "chronic conditions",
        ],
    },
    SymptomEntry {
        key: "shortness of breath",
        conditions: &[
            ConditionRef::Simple("asthma"),
            ConditionRef::Simple("COPD"),
            ConditionRef::Simple("heart failure"),
            ConditionRef::Simple("pneumonia"),
            ConditionRef::Simple("pulmonary embolism"),
            ConditionRef::Simple("anxiety disorder"),
            ConditionRef::Simple("lung cancer"),
        ],
        risk_factors: &["obesity", "smoking", "high altitude", "heart conditions"],
    },
    // Neurological system
    SymptomEntry {
        key: "headache",
        conditions: &[
            ConditionRef::Detailed(&MIGRAINE),
            ConditionRef::Detailed(&TENSION_HEADACHE),
        ],
        risk_factors: &[
            "stress",
            "dehydration",
            "lack of sleep",
            "genetics",
            "hormonal changes",
        ],
    },
    SymptomEntry {
        key: "dizziness",
        conditions: &[
            ConditionRef::Simple("vertigo"),
            ConditionRef::Simple("inner ear infection"),
            ConditionRef::Simple("low blood pressure"),
            ConditionRef::Simple("anemia"),
            ConditionRef::Simple("multiple sclerosis"),
            ConditionRef::Simple("brain tumor"),
            ConditionRef::Simple("stroke"),
        ],
        risk_factors: &["age", "medications", "dehydration", "blood sugar fluctuations"],
    },
    // Cardiovascular system
    SymptomEntry {
        key: "chest pain",
        conditions: &[
            ConditionRef::Simple("heart attack"),
            ConditionRef::Simple("angina"),
            ConditionRef::Simple("myocarditis"),
            ConditionRef::Simple("pericarditis"),
            ConditionRef::Simple("pulmonary embolism"),
            ConditionRef::Simple("costochondritis"),
            ConditionRef::Simple("anxiety"),
        ],
        risk_factors: &[
            "high cholesterol",
            "smoking",
            "obesity",
            "diabetes",
            "family history",
        ],
    },
    SymptomEntry {
        key: "irregular heartbeat",
        conditions: &[
            ConditionRef::Simple("arrhythmia"),
            ConditionRef::Simple("atrial fibrillation"),
            ConditionRef::Simple("heart valve disease"),
            ConditionRef::Simple("thyroid disorders"),
            ConditionRef::Simple("electrolyte imbalance"),
        ],
        risk_factors: &["age", "heart disease", "high blood pressure", "caffeine", "stress"],
    },
    // Digestive system
    SymptomEntry {
        key: "stomach pain",
        conditions: &[
            ConditionRef::Detailed(&GASTRITIS),
            ConditionRef::Detailed(&APPENDICITIS),
            ConditionRef::Detailed(&IBS),
        ],
        risk_factors: &["diet", "stress", "bacterial infections", "autoimmune conditions"],
    },
    SymptomEntry {
        key: "nausea",
        conditions: &[
            ConditionRef::Detailed(&FOOD_POISONING),
            ConditionRef::Detailed(&PREGNANCY_NAUSEA),
            ConditionRef::Detailed(&MIGRAINE_NAUSEA),
        ],
        risk_factors: &["diet", "medications", "pregnancy", "travel", "chemotherapy"],
    },
    // Infectious diseases
    SymptomEntry {
        key: "fever",
        conditions: &[
            ConditionRef::Simple("viral infection"),
            ConditionRef::Simple("bacterial infection"),
            ConditionRef::Simple("flu"),
            ConditionRef::Simple("COVID-19"),
            ConditionRef::Simple("malaria"),
            ConditionRef::Simple("dengue"),
            ConditionRef::Simple("typhoid"),
            ConditionRef::Simple("autoimmune disorders"),
        ],
        risk_factors: &[
            "low immunity",
            "recent travel",
            "exposure to sick people",
            "poor hygiene",
            "chronic conditions",
        ],
    },
    // Endocrine system
    SymptomEntry {
        key: "weight changes",
        conditions: &[
            ConditionRef::Simple("thyroid disorders"),
            ConditionRef::Simple("diabetes"),
            ConditionRef::Simple("metabolic syndrome"),
            ConditionRef::Simple("Cushing's syndrome"),
            ConditionRef::Simple("hormonal imbalance"),
        ],
        risk_factors: &["genetics", "diet", "lifestyle", "stress", "medications"],
    },
    // Musculoskeletal system
    SymptomEntry {
        key: "joint pain",
        conditions: &[
            ConditionRef::Simple("arthritis"),
            ConditionRef::Simple("rheumatoid arthritis"),
            ConditionRef::Simple("osteoarthritis"),
            ConditionRef::Simple("lupus"),
            ConditionRef::Simple("fibromyalgia"),
            ConditionRef::Simple("gout"),
            ConditionRef::Simple("bursitis"),
        ],
        risk_factors: &["age", "obesity", "previous injuries", "genetics", "repetitive stress"],
    },
];

/// Look up a table entry by its exact symptom key.
pub fn lookup(key: &str) -> Option<&'static SymptomEntry> {
    SYMPTOM_TABLE.iter().find(|entry| entry.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_handles_both_shapes() {
        assert_eq!(ConditionRef::Simple("flu").display_name(), "flu");
        assert_eq!(ConditionRef::Detailed(&MIGRAINE).display_name(), "migraine");
    }

    #[test]
    fn detail_is_present_only_for_detailed_entries() {
        assert!(ConditionRef::Simple("flu").detail().is_none());
        let detail = ConditionRef::Detailed(&GASTRITIS).detail().unwrap();
        assert_eq!(detail.severity, "moderate");
        assert!(detail.diagnostic_tests.contains(&"Endoscopy"));
    }

    #[test]
    fn lookup_finds_known_keys() {
        let entry = lookup("headache").unwrap();
        assert_eq!(entry.conditions.len(), 2);
        assert!(entry.risk_factors.contains(&"dehydration"));
        assert!(lookup("telepathy").is_none());
    }

    #[test]
    fn every_key_is_lowercase() {
        // Matching lowercases the input once; keys must already be lowercase
        // or they can never match.
        for entry in SYMPTOM_TABLE {
            assert_eq!(entry.key, entry.key.to_lowercase());
        }
    }
}
