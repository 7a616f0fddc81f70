//! Diesel row types for the `planet_angles` table.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::planet_angles;

/// A stored row: one flagged date with its per-planet separations.
/// Field order matches the table's column order.
#[derive(Debug, Queryable)]
pub struct PlanetAngleRow {
    pub id: i64,
    pub recorded_at: DateTime<Utc>,
    pub venus: Option<f64>,
    pub mars: Option<f64>,
    pub jupiter: Option<f64>,
    pub saturn: Option<f64>,
}

/// Insertable row; the id is assigned by the database.
#[derive(Debug, Insertable)]
#[diesel(table_name = planet_angles)]
pub struct NewPlanetAngleRow {
    pub recorded_at: DateTime<Utc>,
    pub venus: Option<f64>,
    pub mars: Option<f64>,
    pub jupiter: Option<f64>,
    pub saturn: Option<f64>,
}
