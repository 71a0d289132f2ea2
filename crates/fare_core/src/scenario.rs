//! Scenario setup: the rides, driver and rider used by the demo report.
//!
//! [ScenarioParams::default] reproduces the fixed demo data; tests and benchmarks
//! swap in their own rides or fare schedule with the `with_*` builders.

use bevy_ecs::prelude::Entity;

use crate::agents::{Driver, Rider};
use crate::ecs::{Ride, RideKind};
use crate::error::RideResult;
use crate::pricing::FareSchedule;
use crate::store::RideStore;

/// Construction parameters for one ride.
#[derive(Debug, Clone, PartialEq)]
pub struct RideSpec {
    pub id: u32,
    pub kind: RideKind,
    pub pickup: String,
    pub dropoff: String,
    pub distance_miles: f64,
}

impl RideSpec {
    pub fn new(
        id: u32,
        kind: RideKind,
        pickup: impl Into<String>,
        dropoff: impl Into<String>,
        distance_miles: f64,
    ) -> Self {
        Self {
            id,
            kind,
            pickup: pickup.into(),
            dropoff: dropoff.into(),
            distance_miles,
        }
    }

    pub fn build(&self) -> RideResult<Ride> {
        Ride::new(
            self.id,
            self.kind,
            self.pickup.clone(),
            self.dropoff.clone(),
            self.distance_miles,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DriverSpec {
    pub id: u32,
    pub name: String,
    pub rating: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RiderSpec {
    pub id: u32,
    pub name: String,
}

/// Parameters for building a scenario.
#[derive(Debug, Clone)]
pub struct ScenarioParams {
    pub rides: Vec<RideSpec>,
    pub driver: DriverSpec,
    pub rider: RiderSpec,
    pub fares: FareSchedule,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            rides: vec![
                RideSpec::new(1, RideKind::Standard, "University", "City Center", 4.3),
                RideSpec::new(
                    2,
                    RideKind::Premium,
                    "International Airport",
                    "Hotel District",
                    12.0,
                ),
                RideSpec::new(3, RideKind::Standard, "Tech Park", "Student Housing", 3.1),
            ],
            driver: DriverSpec {
                id: 101,
                name: "Anushka Driver".to_string(),
                rating: 4.8,
            },
            rider: RiderSpec {
                id: 201,
                name: "Anushka Rider".to_string(),
            },
            fares: FareSchedule::default(),
        }
    }
}

impl ScenarioParams {
    pub fn with_rides(mut self, rides: Vec<RideSpec>) -> Self {
        self.rides = rides;
        self
    }

    pub fn with_fares(mut self, fares: FareSchedule) -> Self {
        self.fares = fares;
        self
    }

    pub fn with_driver(mut self, id: u32, name: impl Into<String>, rating: f64) -> Self {
        self.driver = DriverSpec {
            id,
            name: name.into(),
            rating,
        };
        self
    }

    pub fn with_rider(mut self, id: u32, name: impl Into<String>) -> Self {
        self.rider = RiderSpec {
            id,
            name: name.into(),
        };
        self
    }
}

/// A populated store plus the aggregates that will reference its rides.
///
/// The driver and rider start empty; attaching rides is left to the caller.
pub struct Scenario {
    pub store: RideStore,
    pub rides: Vec<Entity>,
    pub driver: Driver,
    pub rider: Rider,
}

impl Scenario {
    /// Attach every ride to both the driver and the rider, in ride order.
    pub fn attach_all(&mut self) {
        for handle in &self.rides {
            self.driver.add_completed_ride(*handle);
            self.rider.request_ride(*handle);
        }
    }
}

pub fn build_scenario(params: ScenarioParams) -> RideResult<Scenario> {
    let ScenarioParams {
        rides,
        driver,
        rider,
        fares,
    } = params;

    let mut store = RideStore::with_fares(fares)?;
    let mut handles = Vec::with_capacity(rides.len());
    for spec in &rides {
        handles.push(store.insert_ride(spec.build()?)?);
    }
    tracing::debug!(rides = handles.len(), "scenario built");

    Ok(Scenario {
        store,
        rides: handles,
        driver: Driver::new(driver.id, driver.name, driver.rating),
        rider: Rider::new(rider.id, rider.name),
    })
}
