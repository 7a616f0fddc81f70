//! Repository factory for dependency injection.
//!
//! Creates repository instances from runtime configuration so the binary
//! never names a concrete backend type.

use std::str::FromStr;
use std::sync::Arc;

use super::repositories::{LocalRepository, NullRepository};
use super::repository::{ObservationRepository, RepositoryError, RepositoryResult};
use super::PostgresConfig;

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// PostgreSQL (production)
    Postgres,
    /// In-memory repository
    Local,
    /// Discards every write; visualizer-only runs
    Null,
}

impl FromStr for RepositoryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgres" | "pg" => Ok(Self::Postgres),
            "local" | "memory" => Ok(Self::Local),
            "null" | "none" => Ok(Self::Null),
            other => Err(format!("unknown repository type: {other}")),
        }
    }
}

impl Default for RepositoryType {
    /// The backend selected by the compiled feature set.
    fn default() -> Self {
        if cfg!(feature = "postgres-repo") {
            RepositoryType::Postgres
        } else {
            RepositoryType::Local
        }
    }
}

impl RepositoryType {
    /// Repository type from the `REPOSITORY_TYPE` environment variable,
    /// falling back to the compiled default.
    pub fn from_env() -> Self {
        std::env::var("REPOSITORY_TYPE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }
}

/// Factory for creating repository instances.
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository instance based on type.
    ///
    /// # Arguments
    /// * `repo_type` - Type of repository to create
    /// * `config` - Postgres connection configuration; when `None` the
    ///   postgres backend falls back to the environment
    ///
    /// # Returns
    /// * `Ok(Arc<dyn ObservationRepository>)` - Boxed repository instance
    /// * `Err(RepositoryError)` - If creation fails
    pub fn create(
        repo_type: RepositoryType,
        config: Option<&PostgresConfig>,
    ) -> RepositoryResult<Arc<dyn ObservationRepository>> {
        match repo_type {
            RepositoryType::Local => Ok(Arc::new(LocalRepository::new())),
            RepositoryType::Null => Ok(Arc::new(NullRepository)),
            RepositoryType::Postgres => Self::create_postgres(config),
        }
    }

    #[cfg(feature = "postgres-repo")]
    fn create_postgres(
        config: Option<&PostgresConfig>,
    ) -> RepositoryResult<Arc<dyn ObservationRepository>> {
        use super::repositories::PostgresRepository;

        let config = match config {
            Some(config) => config.clone(),
            None => PostgresConfig::from_env().map_err(RepositoryError::ConfigurationError)?,
        };
        Ok(Arc::new(PostgresRepository::new(config)?))
    }

    #[cfg(not(feature = "postgres-repo"))]
    fn create_postgres(
        _config: Option<&PostgresConfig>,
    ) -> RepositoryResult<Arc<dyn ObservationRepository>> {
        Err(RepositoryError::ConfigurationError(
            "postgres backend requires building with the postgres-repo feature".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_type_parses_known_names() {
        assert_eq!("postgres".parse(), Ok(RepositoryType::Postgres));
        assert_eq!("pg".parse(), Ok(RepositoryType::Postgres));
        assert_eq!("local".parse(), Ok(RepositoryType::Local));
        assert_eq!("memory".parse(), Ok(RepositoryType::Local));
        assert_eq!("null".parse(), Ok(RepositoryType::Null));
        assert!("sqlite".parse::<RepositoryType>().is_err());
    }

    #[test]
    fn local_and_null_need_no_configuration() {
        assert!(RepositoryFactory::create(RepositoryType::Local, None).is_ok());
        assert!(RepositoryFactory::create(RepositoryType::Null, None).is_ok());
    }
}
