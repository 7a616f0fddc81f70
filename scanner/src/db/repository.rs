//! Repository trait for abstracting observation persistence.
//!
//! The trait defines the interface the scan loop and the CLI talk to,
//! allowing different implementations (Postgres, in-memory, no-op) to be
//! swapped via dependency injection.

use chrono::{DateTime, Utc};

use crate::observation::Observation;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<String> for RepositoryError {
    fn from(s: String) -> Self {
        RepositoryError::InternalError(s)
    }
}

impl From<&str> for RepositoryError {
    fn from(s: &str) -> Self {
        RepositoryError::InternalError(s.to_string())
    }
}

/// Repository trait for flagged-observation storage.
///
/// The scan loop only inserts; `fetch_range` and `count` serve the `history`
/// command and the tests.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` so a single handle can be shared
/// for the whole run.
///
/// # Error Handling
/// All methods return `RepositoryResult<T>` which wraps either the expected
/// return type or a `RepositoryError` describing what went wrong. The scan
/// loop treats a `record` failure as non-fatal: it is logged and the run
/// continues.
pub trait ObservationRepository: Send + Sync {
    /// Check if the backend is reachable and healthy.
    fn health_check(&self) -> RepositoryResult<bool>;

    /// Persist one flagged observation. Insert-only; never updates.
    fn record(&self, observation: &Observation) -> RepositoryResult<()>;

    /// Observations with `start <= at <= end`, ordered by timestamp.
    fn fetch_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> RepositoryResult<Vec<Observation>>;

    /// Total number of stored observations.
    fn count(&self) -> RepositoryResult<u64>;
}
