//! # carelens-predict
//!
//! The "prediction" features around the metrics record:
//!
//! - [`weekly_forecast`] — the dashboard's seven-day trend series: the
//!   stored sample first, then a bounded randomized walk. Simulation, not
//!   inference.
//! - [`PredictionClient`] — the one real network call in the system, a POST
//!   of the metrics record to an external endpoint returning a
//!   `{summary, details}` body.

pub mod client;
pub mod forecast;

pub use client::{HealthPrediction, PredictionClient, PREDICT_PATH};
pub use forecast::{weekly_forecast, DayForecast, MetricSample};
