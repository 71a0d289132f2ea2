//! Test helpers for common test setup and utilities.

use bevy_ecs::prelude::Entity;

use crate::ecs::{Ride, RideKind};
use crate::store::RideStore;

/// Absolute tolerance for comparing computed fares.
pub const FARE_EPSILON: f64 = 1e-9;

/// Build a ride with placeholder locations.
///
/// # Panics
///
/// Panics if `distance_miles` is negative or not finite.
pub fn test_ride(id: u32, kind: RideKind, distance_miles: f64) -> Ride {
    Ride::new(id, kind, "Pickup", "Dropoff", distance_miles)
        .expect("test ride distance should be valid")
}

/// Default-priced store holding one ride per `(kind, miles)` pair, ids starting at 1.
///
/// # Panics
///
/// Panics if any distance is invalid.
pub fn store_with_rides(rides: &[(RideKind, f64)]) -> (RideStore, Vec<Entity>) {
    let mut store = RideStore::new();
    let handles = rides
        .iter()
        .enumerate()
        .map(|(index, (kind, miles))| {
            store
                .insert_ride(test_ride(index as u32 + 1, *kind, *miles))
                .expect("test ride ids are unique")
        })
        .collect();
    (store, handles)
}

pub fn assert_fare_eq(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < FARE_EPSILON,
        "fare {actual} differs from expected {expected}"
    );
}
