#![allow(dead_code)]

use bevy_ecs::prelude::Entity;
use fare_core::ecs::{Ride, RideKind};
use fare_core::pricing::FareSchedule;
use fare_core::store::RideStore;

/// Builder for ride stores used across integration tests.
#[derive(Debug, Default)]
pub struct TestStoreBuilder {
    fares: FareSchedule,
    rides: Vec<(RideKind, f64)>,
    price_on_build: bool,
}

impl TestStoreBuilder {
    /// Create a new builder with the default fare schedule and no rides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Price rides with a custom schedule.
    pub fn with_fares(mut self, fares: FareSchedule) -> Self {
        self.fares = fares;
        self
    }

    /// Add a ride; ids are assigned in insertion order starting at 1.
    pub fn with_ride(mut self, kind: RideKind, distance_miles: f64) -> Self {
        self.rides.push((kind, distance_miles));
        self
    }

    /// Run the pricing schedule once after inserting the rides.
    pub fn priced(mut self) -> Self {
        self.price_on_build = true;
        self
    }

    /// Build the store and return the ride handles in insertion order.
    pub fn build(self) -> (RideStore, Vec<Entity>) {
        let mut store = RideStore::with_fares(self.fares).expect("valid fare schedule");
        let handles = self
            .rides
            .iter()
            .enumerate()
            .map(|(index, (kind, miles))| {
                let ride = Ride::new(
                    index as u32 + 1,
                    *kind,
                    format!("Pickup {}", index + 1),
                    format!("Dropoff {}", index + 1),
                    *miles,
                )
                .expect("valid ride");
                store.insert_ride(ride).expect("unique ride id")
            })
            .collect();
        if self.price_on_build {
            store.compute_all_fares();
        }
        (store, handles)
    }
}
