//! Observation persistence via the repository pattern.
//!
//! The scan loop writes flagged observations through the
//! [`ObservationRepository`] trait, allowing storage backends to be swapped
//! without touching the loop:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Scan loop (scan::run)                      │
//! └───────────────────┬─────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────┐
//! │  Repository trait (repository.rs)           │
//! └───────────────────┬─────────────────────────┘
//!                     │
//!     ┌───────────────┼────────────────┐
//!     │               │                │
//! ┌───▼────────┐ ┌────▼─────────┐ ┌────▼─────┐
//! │ Postgres   │ │ Local        │ │ Null     │
//! │ (diesel)   │ │ (in-memory)  │ │ (no-op)  │
//! └────────────┘ └──────────────┘ └──────────┘
//! ```
//!
//! The local backend always compiles — it doubles as the test fixture. The
//! feature flags select which backend the factory offers by default.

#[cfg(all(feature = "postgres-repo", feature = "local-repo"))]
compile_error!("Enable only one repository backend feature at a time.");
#[cfg(not(any(feature = "postgres-repo", feature = "local-repo")))]
compile_error!("Enable exactly one repository backend feature.");

pub mod factory;
pub mod repositories;
pub mod repository;

// Postgres config is colocated with the repository implementation.
#[cfg(feature = "postgres-repo")]
pub use repositories::postgres::PostgresConfig;
#[cfg(not(feature = "postgres-repo"))]
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    _private: (),
}

pub use factory::{RepositoryFactory, RepositoryType};
pub use repositories::{LocalRepository, NullRepository};
#[cfg(feature = "postgres-repo")]
pub use repositories::PostgresRepository;
pub use repository::{ObservationRepository, RepositoryError, RepositoryResult};
