//! The weekly trend forecast.
//!
//! A toy randomized walk, not a model: day 0 carries the actual stored
//! sample, and each subsequent day perturbs the previous one by a bounded
//! random variation, floored at zero. Day labels are rotated so the current
//! day comes first.

use chrono::Weekday;
use rand::Rng;
use serde::Serialize;
use tracing::warn;

use carelens_contracts::metrics::HealthMetrics;

/// Per-metric variability of the walk, in the metric's own unit.
const HEART_RATE_VARIABILITY: f64 = 5.0;
const SYSTOLIC_VARIABILITY: f64 = 3.0;
const DIASTOLIC_VARIABILITY: f64 = 3.0;
const BLOOD_SUGAR_VARIABILITY: f64 = 2.0;

/// Short day labels, Sunday first.
const DAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// The four charted metrics as numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricSample {
    pub heart_rate: f64,
    pub blood_pressure_systolic: f64,
    pub blood_pressure_diastolic: f64,
    pub blood_sugar: f64,
}

impl MetricSample {
    /// Parse the charted fields out of a stored record.
    ///
    /// Values that fail to parse chart as 0, with a warning — the stored
    /// record is text and the dialog does not enforce numeric input.
    pub fn from_metrics(metrics: &HealthMetrics) -> Self {
        Self {
            heart_rate: parse_or_zero("heartRate", &metrics.heart_rate),
            blood_pressure_systolic: parse_or_zero(
                "bloodPressureSystolic",
                &metrics.blood_pressure_systolic,
            ),
            blood_pressure_diastolic: parse_or_zero(
                "bloodPressureDiastolic",
                &metrics.blood_pressure_diastolic,
            ),
            blood_sugar: parse_or_zero("bloodSugar", &metrics.blood_sugar),
        }
    }
}

fn parse_or_zero(field: &str, raw: &str) -> f64 {
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            warn!(field, value = raw, "metric value unparseable, charting as 0");
            0.0
        }
    }
}

/// One day of the forecast.
#[derive(Debug, Clone, Serialize)]
pub struct DayForecast {
    /// Short day label, e.g. "Wed".
    pub day: &'static str,
    /// Actual sample on day 0, predicted values afterwards.
    pub metrics: MetricSample,
}

/// Perturb one value by a bounded random variation, floored at zero.
fn predict_next(value: f64, variability: f64, rng: &mut impl Rng) -> f64 {
    let variation = (rng.gen::<f64>() - 0.5) * variability;
    (value + variation).max(0.0)
}

/// Produce the seven-day forecast starting from `start`.
///
/// The label sequence is the week rotated so `start` comes first. Day 0 is
/// `sample` unchanged; each later day applies the randomized walk to the
/// previous day's values, so uncertainty compounds across the week.
pub fn weekly_forecast(
    start: Weekday,
    sample: &MetricSample,
    rng: &mut impl Rng,
) -> Vec<DayForecast> {
    let start_index = start.num_days_from_sunday() as usize;

    let mut previous = *sample;
    (0..DAY_LABELS.len())
        .map(|offset| {
            let day = DAY_LABELS[(start_index + offset) % DAY_LABELS.len()];
            let metrics = if offset == 0 {
                *sample
            } else {
                let next = MetricSample {
                    heart_rate: predict_next(previous.heart_rate, HEART_RATE_VARIABILITY, rng),
                    blood_pressure_systolic: predict_next(
                        previous.blood_pressure_systolic,
                        SYSTOLIC_VARIABILITY,
                        rng,
                    ),
                    blood_pressure_diastolic: predict_next(
                        previous.blood_pressure_diastolic,
                        DIASTOLIC_VARIABILITY,
                        rng,
                    ),
                    blood_sugar: predict_next(previous.blood_sugar, BLOOD_SUGAR_VARIABILITY, rng),
                };
                previous = next;
                next
            };
            DayForecast { day, metrics }
        })
        .collect()
}
