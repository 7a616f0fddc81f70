//! No-op repository for visualizer-only runs.

use chrono::{DateTime, Utc};

use crate::db::repository::{ObservationRepository, RepositoryResult};
use crate::observation::Observation;

/// Repository that acknowledges every write and stores nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRepository;

impl ObservationRepository for NullRepository {
    fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }

    fn record(&self, _observation: &Observation) -> RepositoryResult<()> {
        Ok(())
    }

    fn fetch_range(
        &self,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> RepositoryResult<Vec<Observation>> {
        Ok(Vec::new())
    }

    fn count(&self) -> RepositoryResult<u64> {
        Ok(0)
    }
}
