//! Repository implementations.

pub mod local;
pub mod null;
#[cfg(feature = "postgres-repo")]
pub mod postgres;

pub use local::LocalRepository;
pub use null::NullRepository;
#[cfg(feature = "postgres-repo")]
pub use postgres::{PostgresConfig, PostgresRepository};
