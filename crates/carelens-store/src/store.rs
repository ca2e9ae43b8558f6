//! The file-backed metrics store.
//!
//! One fixed file holds the last-entered metrics record as camelCase JSON.
//! Every save fully overwrites the file — records are never merged — and
//! then notifies every registered observer so other open views can refresh.
//! Observer registration is explicit; there are no ambient global events.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::{info, warn};

use carelens_contracts::{
    error::{CarelensError, CarelensResult},
    metrics::{HealthMetrics, METRICS_STORE_NAME},
};

/// Receives a callback after every successful save.
///
/// Notification is synchronous and in-process. Observers must not call back
/// into the store from `metrics_updated`.
pub trait MetricsObserver: Send + Sync {
    fn metrics_updated(&self, metrics: &HealthMetrics);
}

/// The mutable interior of a `MetricsStore`: the observer registry.
struct StoreState {
    observers: Vec<Arc<dyn MetricsObserver>>,
}

/// A single-record metrics store persisted under one fixed file name.
///
/// # Thread safety
///
/// `save`, `load`, and `subscribe` may be called from any thread; the
/// observer registry sits behind a `Mutex` and file writes are whole-record
/// replacements.
pub struct MetricsStore {
    path: PathBuf,
    state: Arc<Mutex<StoreState>>,
}

impl MetricsStore {
    /// Create a store rooted at `dir`, persisting under the fixed storage
    /// name (`health_metrics.json`). The file is created on first save.
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(METRICS_STORE_NAME),
            state: Arc::new(Mutex::new(StoreState {
                observers: Vec::new(),
            })),
        }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Register an observer to be notified after every successful save.
    pub fn subscribe(&self, observer: Arc<dyn MetricsObserver>) {
        let mut state = self.state.lock().expect("store state lock poisoned");
        state.observers.push(observer);
    }

    /// Validate and persist `metrics`, then notify observers.
    ///
    /// The previous record is fully overwritten. Returns
    /// `CarelensError::Validation` naming every empty field when the record
    /// is incomplete — nothing is written in that case — or
    /// `CarelensError::StoreWrite` when the file cannot be replaced.
    pub fn save(&self, metrics: &HealthMetrics) -> CarelensResult<()> {
        let missing = metrics.missing_fields();
        if !missing.is_empty() {
            warn!(missing = ?missing, "metrics save rejected: required fields empty");
            return Err(CarelensError::Validation { missing });
        }

        let json = serde_json::to_string_pretty(metrics).map_err(|e| {
            CarelensError::StoreWrite {
                reason: format!("failed to serialize metrics: {}", e),
            }
        })?;

        std::fs::write(&self.path, json).map_err(|e| CarelensError::StoreWrite {
            reason: format!("failed to write '{}': {}", self.path.display(), e),
        })?;

        info!(path = %self.path.display(), "metrics record saved");

        // Snapshot the registry so observer callbacks run without the lock.
        let observers: Vec<Arc<dyn MetricsObserver>> = {
            let state = self.state.lock().map_err(|e| CarelensError::StoreWrite {
                reason: format!("store state lock poisoned: {}", e),
            })?;
            state.observers.clone()
        };
        for observer in observers {
            observer.metrics_updated(metrics);
        }

        Ok(())
    }

    /// Load the last-saved record.
    ///
    /// Returns `Ok(None)` when nothing has been saved yet. A file that
    /// exists but cannot be read or parsed is logged and surfaced as
    /// `CarelensError::StoreRead`; callers are expected to skip their update
    /// and keep whatever they were previously displaying. The file itself is
    /// left untouched.
    pub fn load(&self) -> CarelensResult<Option<HealthMetrics>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents =
            std::fs::read_to_string(&self.path).map_err(|e| {
                warn!(path = %self.path.display(), error = %e, "metrics file unreadable");
                CarelensError::StoreRead {
                    reason: format!("failed to read '{}': {}", self.path.display(), e),
                }
            })?;

        serde_json::from_str(&contents).map(Some).map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "metrics file malformed, update skipped");
            CarelensError::StoreRead {
                reason: format!("failed to parse '{}': {}", self.path.display(), e),
            }
        })
    }
}
