//! Integration tests for the repository implementations.

use chrono::{TimeZone, Utc};

use aspect_scan::db::{
    LocalRepository, NullRepository, ObservationRepository, RepositoryError,
};
use aspect_scan::ephemeris::Body;
use aspect_scan::{BodyAngle, Observation};

fn observation(year: i32, month: u32, day: u32, venus_deg: f64) -> Observation {
    Observation {
        at: Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap(),
        angles: vec![
            BodyAngle {
                body: Body::Venus,
                separation_deg: venus_deg,
            },
            BodyAngle {
                body: Body::Mars,
                separation_deg: 45.0,
            },
        ],
    }
}

#[test]
fn local_repository_is_healthy_by_default() {
    let repo = LocalRepository::new();
    assert!(repo.health_check().unwrap());
}

#[test]
fn record_and_fetch_round_trip() {
    let repo = LocalRepository::new();
    let stored = observation(1950, 3, 14, 90.2);

    repo.record(&stored).unwrap();

    assert_eq!(repo.count().unwrap(), 1);
    let fetched = repo
        .fetch_range(
            Utc.with_ymd_and_hms(1950, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(1950, 12, 31, 0, 0, 0).unwrap(),
        )
        .unwrap();
    assert_eq!(fetched, vec![stored]);
}

#[test]
fn fetch_range_is_inclusive_and_ordered() {
    let repo = LocalRepository::new();
    let feb = observation(1950, 2, 1, 0.5);
    let jan = observation(1950, 1, 1, 89.9);
    let mar = observation(1950, 3, 1, 179.4);
    for obs in [&feb, &jan, &mar] {
        repo.record(obs).unwrap();
    }

    let fetched = repo
        .fetch_range(jan.at, feb.at)
        .unwrap();
    assert_eq!(fetched, vec![jan, feb]);
}

#[test]
fn unhealthy_repository_rejects_writes() {
    let repo = LocalRepository::new();
    repo.set_healthy(false);

    assert!(!repo.health_check().unwrap());
    let result = repo.record(&observation(2000, 1, 1, 90.0));
    assert!(matches!(result, Err(RepositoryError::ConnectionError(_))));
    assert_eq!(repo.count().unwrap(), 0);

    // Recovering restores writes.
    repo.set_healthy(true);
    repo.record(&observation(2000, 1, 1, 90.0)).unwrap();
    assert_eq!(repo.count().unwrap(), 1);
}

#[test]
fn clear_resets_the_store() {
    let repo = LocalRepository::new();
    repo.record(&observation(2000, 1, 1, 90.0)).unwrap();
    repo.clear();
    assert_eq!(repo.count().unwrap(), 0);
}

#[test]
fn clones_share_the_same_store() {
    let repo = LocalRepository::new();
    let clone = repo.clone();
    repo.record(&observation(2000, 1, 1, 90.0)).unwrap();
    assert_eq!(clone.count().unwrap(), 1);
}

#[test]
fn null_repository_acknowledges_and_drops_everything() {
    let repo = NullRepository;
    assert!(repo.health_check().unwrap());
    repo.record(&observation(2000, 1, 1, 90.0)).unwrap();
    assert_eq!(repo.count().unwrap(), 0);
    let fetched = repo
        .fetch_range(
            Utc.with_ymd_and_hms(1900, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2035, 12, 31, 0, 0, 0).unwrap(),
        )
        .unwrap();
    assert!(fetched.is_empty());
}
