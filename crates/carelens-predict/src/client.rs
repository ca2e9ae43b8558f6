//! Client for the remote health-prediction endpoint.
//!
//! One request shape, one response shape: the six metrics go out as
//! camelCase JSON, and a successful reply must carry `summary` and
//! `details` strings. Any non-success status or body that does not decode
//! is a `Prediction` error — the caller surfaces it as a notification and
//! does not retry.

use serde::Deserialize;
use tracing::{debug, warn};

use carelens_contracts::{
    error::{CarelensError, CarelensResult},
    metrics::HealthMetrics,
};

/// Path of the prediction endpoint, relative to the configured base URL.
pub const PREDICT_PATH: &str = "/api/predict-health";

/// The fields a prediction reply must carry. Extra fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthPrediction {
    /// One-line prediction headline.
    pub summary: String,
    /// Longer explanation shown under the headline.
    pub details: String,
}

/// A blocking client for the prediction endpoint.
pub struct PredictionClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl PredictionClient {
    /// Create a client for the given base URL, e.g. `http://localhost:8000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::blocking::Client::new(),
        }
    }

    /// POST the metrics record and decode the prediction.
    ///
    /// # Errors
    ///
    /// `CarelensError::Prediction` for transport failures, non-success
    /// statuses, and bodies missing the expected fields.
    pub fn predict(&self, metrics: &HealthMetrics) -> CarelensResult<HealthPrediction> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), PREDICT_PATH);
        debug!(%url, "requesting health prediction");

        let response = self
            .http
            .post(&url)
            .json(metrics)
            .send()
            .map_err(|e| CarelensError::Prediction {
                reason: format!("request error: {}", e),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            warn!(%status, "prediction endpoint returned failure");
            return Err(CarelensError::Prediction {
                reason: format!("server returned {}: {}", status, body),
            });
        }

        response
            .json::<HealthPrediction>()
            .map_err(|e| CarelensError::Prediction {
                reason: format!("malformed prediction body: {}", e),
            })
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    use super::*;

    /// Serve exactly one canned HTTP response on an ephemeral port and
    /// return the base URL to reach it.
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            // Drain the request headers; the content is irrelevant here.
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
        });

        format!("http://{}", addr)
    }

    fn full_metrics() -> HealthMetrics {
        HealthMetrics {
            heart_rate: "72".to_string(),
            blood_pressure_systolic: "120".to_string(),
            blood_pressure_diastolic: "80".to_string(),
            blood_sugar: "90".to_string(),
            weight: "70".to_string(),
            height: "175".to_string(),
        }
    }

    #[test]
    fn successful_reply_decodes_summary_and_details() {
        let base = serve_once(
            "HTTP/1.1 200 OK",
            r#"{"summary":"Stable","details":"All metrics within expected ranges."}"#,
        );
        let client = PredictionClient::new(base);
        let prediction = client.predict(&full_metrics()).unwrap();
        assert_eq!(prediction.summary, "Stable");
        assert_eq!(prediction.details, "All metrics within expected ranges.");
    }

    #[test]
    fn non_success_status_is_a_prediction_error() {
        let base = serve_once("HTTP/1.1 503 Service Unavailable", "overloaded");
        let client = PredictionClient::new(base);
        match client.predict(&full_metrics()) {
            Err(CarelensError::Prediction { reason }) => {
                assert!(reason.contains("503"), "reason: {}", reason);
            }
            other => panic!("expected Prediction error, got {:?}", other),
        }
    }

    #[test]
    fn body_missing_required_fields_is_a_prediction_error() {
        let base = serve_once("HTTP/1.1 200 OK", r#"{"summary":"only half"}"#);
        let client = PredictionClient::new(base);
        match client.predict(&full_metrics()) {
            Err(CarelensError::Prediction { reason }) => {
                assert!(reason.contains("malformed prediction body"), "reason: {}", reason);
            }
            other => panic!("expected Prediction error, got {:?}", other),
        }
    }

    #[test]
    fn unreachable_endpoint_is_a_prediction_error() {
        // Nothing listens on this port.
        let client = PredictionClient::new("http://127.0.0.1:9");
        match client.predict(&full_metrics()) {
            Err(CarelensError::Prediction { reason }) => {
                assert!(reason.contains("request error"), "reason: {}", reason);
            }
            other => panic!("expected Prediction error, got {:?}", other),
        }
    }
}
