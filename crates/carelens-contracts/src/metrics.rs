//! The health-metrics record entered through the metrics dialog.
//!
//! One flat record of six numeric-as-text values. The record is persisted
//! under a single fixed storage name and fully overwritten on every save —
//! never merged. Field names on the wire are camelCase to stay compatible
//! with what the web dashboard stored and what the prediction endpoint
//! expects in its request body.

use serde::{Deserialize, Serialize};

/// File name the store persists the record under.
pub const METRICS_STORE_NAME: &str = "health_metrics.json";

/// The six metrics collected by the dashboard dialog, as typed.
///
/// Values stay as text until a consumer needs numbers — the trend forecaster
/// parses them and treats anything unparseable as 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetrics {
    /// Beats per minute.
    pub heart_rate: String,
    /// Systolic pressure, mmHg.
    pub blood_pressure_systolic: String,
    /// Diastolic pressure, mmHg.
    pub blood_pressure_diastolic: String,
    /// Blood sugar level, mg/dL.
    pub blood_sugar: String,
    /// Weight in kg.
    pub weight: String,
    /// Height in cm.
    pub height: String,
}

impl HealthMetrics {
    /// Return the camelCase names of every field that is still empty.
    ///
    /// The store refuses to save until this is empty; the names feed the
    /// user-visible validation message.
    pub fn missing_fields(&self) -> Vec<String> {
        let fields: [(&str, &str); 6] = [
            ("heartRate", &self.heart_rate),
            ("bloodPressureSystolic", &self.blood_pressure_systolic),
            ("bloodPressureDiastolic", &self.blood_pressure_diastolic),
            ("bloodSugar", &self.blood_sugar),
            ("weight", &self.weight),
            ("height", &self.height),
        ];
        fields
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| (*name).to_string())
            .collect()
    }
}
