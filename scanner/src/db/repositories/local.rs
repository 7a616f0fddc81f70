//! In-memory local repository implementation.
//!
//! Stores observations in a `Vec` behind an `RwLock`, giving fast,
//! deterministic, isolated execution. Used for unit and integration tests
//! and for local development runs without a database.

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use log::debug;

use crate::db::repository::{ObservationRepository, RepositoryError, RepositoryResult};
use crate::observation::Observation;

/// In-memory repository.
///
/// Cloning is cheap and clones share the same underlying store.
///
/// # Example
/// ```
/// use aspect_scan::db::{LocalRepository, ObservationRepository};
///
/// let repo = LocalRepository::new();
/// assert_eq!(repo.count().unwrap(), 0);
/// ```
#[derive(Clone, Default)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    observations: Vec<Observation>,
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            observations: Vec::new(),
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the health status, for exercising connection-failure paths.
    /// While unhealthy, `record` fails with a connection error.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().unwrap().is_healthy = healthy;
    }

    /// Drop all stored observations.
    pub fn clear(&self) {
        self.data.write().unwrap().observations.clear();
    }

    /// Snapshot of everything stored, in insertion order.
    pub fn observations(&self) -> Vec<Observation> {
        self.data.read().unwrap().observations.clone()
    }
}

impl ObservationRepository for LocalRepository {
    fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().unwrap().is_healthy)
    }

    fn record(&self, observation: &Observation) -> RepositoryResult<()> {
        let mut data = self.data.write().unwrap();
        if !data.is_healthy {
            return Err(RepositoryError::ConnectionError(
                "local repository marked unhealthy".to_string(),
            ));
        }
        data.observations.push(observation.clone());
        debug!("recorded observation for {}", observation.at);
        Ok(())
    }

    fn fetch_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> RepositoryResult<Vec<Observation>> {
        let data = self.data.read().unwrap();
        let mut matches: Vec<Observation> = data
            .observations
            .iter()
            .filter(|obs| obs.at >= start && obs.at <= end)
            .cloned()
            .collect();
        matches.sort_by_key(|obs| obs.at);
        Ok(matches)
    }

    fn count(&self) -> RepositoryResult<u64> {
        Ok(self.data.read().unwrap().observations.len() as u64)
    }
}
