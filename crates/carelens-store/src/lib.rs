//! # carelens-store
//!
//! Persistence for the health-metrics record: one flat record of six
//! numeric-as-text values, kept under a single fixed file name, fully
//! overwritten on every save.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use carelens_store::{MetricsStore, MetricsObserver};
//!
//! let store = MetricsStore::new(&data_dir);
//! store.subscribe(chart_refresher);
//! store.save(&metrics)?;            // validates, overwrites, notifies
//! let last = store.load()?;         // Ok(None) before the first save
//! ```

pub mod store;

pub use store::{MetricsObserver, MetricsStore};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use carelens_contracts::{error::CarelensError, metrics::HealthMetrics};

    use super::{MetricsObserver, MetricsStore};

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn full_metrics(heart_rate: &str) -> HealthMetrics {
        HealthMetrics {
            heart_rate: heart_rate.to_string(),
            blood_pressure_systolic: "120".to_string(),
            blood_pressure_diastolic: "80".to_string(),
            blood_sugar: "90".to_string(),
            weight: "70".to_string(),
            height: "175".to_string(),
        }
    }

    /// An observer that records every notification for later inspection.
    struct RecordingObserver {
        seen: Arc<Mutex<Vec<HealthMetrics>>>,
    }

    impl MetricsObserver for RecordingObserver {
        fn metrics_updated(&self, metrics: &HealthMetrics) {
            self.seen.lock().unwrap().push(metrics.clone());
        }
    }

    // ── Tests ─────────────────────────────────────────────────────────────────

    #[test]
    fn load_before_first_save_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = MetricsStore::new(dir.path());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = MetricsStore::new(dir.path());

        let metrics = full_metrics("72");
        store.save(&metrics).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, metrics);
    }

    #[test]
    fn save_overwrites_rather_than_merges() {
        let dir = tempfile::tempdir().unwrap();
        let store = MetricsStore::new(dir.path());

        store.save(&full_metrics("72")).unwrap();
        store.save(&full_metrics("81")).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.heart_rate, "81");
    }

    #[test]
    fn incomplete_record_is_rejected_with_field_names() {
        let dir = tempfile::tempdir().unwrap();
        let store = MetricsStore::new(dir.path());

        let mut metrics = full_metrics("72");
        metrics.blood_sugar.clear();
        metrics.height.clear();

        match store.save(&metrics) {
            Err(CarelensError::Validation { missing }) => {
                assert_eq!(missing, vec!["bloodSugar", "height"]);
            }
            other => panic!("expected Validation error, got {:?}", other),
        }

        // Nothing was written.
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn observers_are_notified_after_each_save() {
        let dir = tempfile::tempdir().unwrap();
        let store = MetricsStore::new(dir.path());

        let seen = Arc::new(Mutex::new(Vec::new()));
        store.subscribe(Arc::new(RecordingObserver { seen: seen.clone() }));

        store.save(&full_metrics("72")).unwrap();
        store.save(&full_metrics("81")).unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].heart_rate, "72");
        assert_eq!(seen[1].heart_rate, "81");
    }

    #[test]
    fn failed_validation_does_not_notify() {
        let dir = tempfile::tempdir().unwrap();
        let store = MetricsStore::new(dir.path());

        let seen = Arc::new(Mutex::new(Vec::new()));
        store.subscribe(Arc::new(RecordingObserver { seen: seen.clone() }));

        let _ = store.save(&HealthMetrics::default());
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn malformed_file_is_a_read_error_and_left_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let store = MetricsStore::new(dir.path());

        std::fs::write(store.path(), "{ not json").unwrap();

        match store.load() {
            Err(CarelensError::StoreRead { reason }) => {
                assert!(reason.contains("failed to parse"));
            }
            other => panic!("expected StoreRead error, got {:?}", other),
        }

        // The malformed file is preserved for inspection, not deleted.
        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(raw, "{ not json");
    }
}
