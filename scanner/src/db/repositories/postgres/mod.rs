//! Postgres repository implementation using Diesel.
//!
//! Persists flagged observations into the `planet_angles` table: one row per
//! flagged date with nullable per-planet columns. Pending migrations run
//! once at construction.

use chrono::{DateTime, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::sql_query;
use diesel_migrations::{FileBasedMigrations, MigrationHarness};
use log::{info, warn};

use crate::db::repository::{ObservationRepository, RepositoryError, RepositoryResult};
use crate::ephemeris::Body;
use crate::observation::{BodyAngle, Observation};

mod models;
mod schema;

use models::{NewPlanetAngleRow, PlanetAngleRow};
use schema::planet_angles;

type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Configuration for connecting to Postgres.
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub database_url: String,
    pub max_pool_size: u32,
}

impl PostgresConfig {
    /// Build the configuration from environment variables.
    ///
    /// `DATABASE_URL` wins when set; otherwise the URL is composed from
    /// `DB_HOST`, `DB_NAME`, `DB_USER`, and `DB_PASSWORD`. `PG_POOL_MAX`
    /// optionally bounds the connection pool (default 10).
    pub fn from_env() -> Result<Self, String> {
        let database_url = match std::env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                let host = std::env::var("DB_HOST")
                    .map_err(|_| "DATABASE_URL or DB_HOST must be set".to_string())?;
                let name =
                    std::env::var("DB_NAME").map_err(|_| "DB_NAME must be set".to_string())?;
                let user =
                    std::env::var("DB_USER").map_err(|_| "DB_USER must be set".to_string())?;
                let password = std::env::var("DB_PASSWORD")
                    .map_err(|_| "DB_PASSWORD must be set".to_string())?;
                format!("postgres://{user}:{password}@{host}/{name}")
            }
        };

        let max_pool_size = std::env::var("PG_POOL_MAX")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(10);

        Ok(Self {
            database_url,
            max_pool_size,
        })
    }
}

/// Diesel-backed repository for Postgres.
#[derive(Clone)]
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Create a new repository and run pending migrations.
    pub fn new(config: PostgresConfig) -> RepositoryResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(config.database_url);
        let pool = Pool::builder()
            .max_size(config.max_pool_size)
            .build(manager)
            .map_err(|e| RepositoryError::ConnectionError(e.to_string()))?;

        // Run migrations once during initialization.
        {
            let mut conn = pool
                .get()
                .map_err(|e| RepositoryError::ConnectionError(e.to_string()))?;
            Self::run_migrations(&mut conn)?;
        }

        Ok(Self { pool })
    }

    fn run_migrations(conn: &mut PgConnection) -> RepositoryResult<()> {
        let migrations =
            FileBasedMigrations::from_path(format!("{}/migrations", env!("CARGO_MANIFEST_DIR")))
                .map_err(|e| {
                    RepositoryError::InternalError(format!("Migrations not found: {e}"))
                })?;

        conn.run_pending_migrations(migrations)
            .map_err(|e| RepositoryError::InternalError(format!("Migration error: {e}")))?;
        Ok(())
    }

    fn conn(&self) -> RepositoryResult<PooledConnection<ConnectionManager<PgConnection>>> {
        self.pool
            .get()
            .map_err(|e| RepositoryError::ConnectionError(e.to_string()))
    }
}

fn map_diesel_error(err: diesel::result::Error) -> RepositoryError {
    match err {
        diesel::result::Error::NotFound => RepositoryError::NotFound("Record not found".into()),
        other => RepositoryError::QueryError(other.to_string()),
    }
}

fn observation_to_row(observation: &Observation) -> NewPlanetAngleRow {
    let mut row = NewPlanetAngleRow {
        recorded_at: observation.at,
        venus: None,
        mars: None,
        jupiter: None,
        saturn: None,
    };
    for angle in &observation.angles {
        match angle.body {
            Body::Venus => row.venus = Some(angle.separation_deg),
            Body::Mars => row.mars = Some(angle.separation_deg),
            Body::JupiterBarycenter => row.jupiter = Some(angle.separation_deg),
            Body::SaturnBarycenter => row.saturn = Some(angle.separation_deg),
            // The legacy table has no column for anything else.
            other => warn!("planet_angles has no column for {other}; skipping"),
        }
    }
    row
}

fn row_to_observation(row: PlanetAngleRow) -> Observation {
    let mut angles = Vec::new();
    for (body, value) in [
        (Body::Venus, row.venus),
        (Body::Mars, row.mars),
        (Body::JupiterBarycenter, row.jupiter),
        (Body::SaturnBarycenter, row.saturn),
    ] {
        if let Some(separation_deg) = value {
            angles.push(BodyAngle {
                body,
                separation_deg,
            });
        }
    }
    Observation {
        at: row.recorded_at,
        angles,
    }
}

impl ObservationRepository for PostgresRepository {
    fn health_check(&self) -> RepositoryResult<bool> {
        let mut conn = self.conn()?;
        sql_query("SELECT 1")
            .execute(&mut conn)
            .map_err(map_diesel_error)?;
        Ok(true)
    }

    fn record(&self, observation: &Observation) -> RepositoryResult<()> {
        let mut conn = self.conn()?;
        diesel::insert_into(planet_angles::table)
            .values(observation_to_row(observation))
            .execute(&mut conn)
            .map_err(map_diesel_error)?;
        info!("Planet angles for {} inserted successfully", observation.at);
        Ok(())
    }

    fn fetch_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> RepositoryResult<Vec<Observation>> {
        let mut conn = self.conn()?;
        let rows: Vec<PlanetAngleRow> = planet_angles::table
            .filter(planet_angles::recorded_at.between(start, end))
            .order(planet_angles::recorded_at.asc())
            .load(&mut conn)
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(row_to_observation).collect())
    }

    fn count(&self) -> RepositoryResult<u64> {
        let mut conn = self.conn()?;
        let total: i64 = planet_angles::table
            .count()
            .get_result(&mut conn)
            .map_err(map_diesel_error)?;
        Ok(total as u64)
    }
}
