use std::fmt;

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

use crate::error::{RideError, RideResult};
use crate::pricing::{calculate_fare, FareBreakdown, FareSchedule};
use crate::report::format_number;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RideKind {
    Standard,
    Premium,
}

impl RideKind {
    /// Tag shown at the start of a ride's details line.
    pub fn tag(self) -> &'static str {
        match self {
            RideKind::Standard => "Standard",
            RideKind::Premium => "Premium",
        }
    }
}

impl fmt::Display for RideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One ride. Lives in the [crate::store::RideStore] world; drivers and riders hold its `Entity`.
///
/// `fare_total` stays at zero until a fare is computed and is overwritten on every
/// computation.
#[derive(Debug, Clone, PartialEq, Component)]
pub struct Ride {
    id: u32,
    kind: RideKind,
    pickup: String,
    dropoff: String,
    distance_miles: f64,
    fare_total: f64,
}

impl Ride {
    pub fn new(
        id: u32,
        kind: RideKind,
        pickup: impl Into<String>,
        dropoff: impl Into<String>,
        distance_miles: f64,
    ) -> RideResult<Self> {
        validate_distance(id, distance_miles)?;
        Ok(Self {
            id,
            kind,
            pickup: pickup.into(),
            dropoff: dropoff.into(),
            distance_miles,
            fare_total: 0.0,
        })
    }

    pub fn standard(
        id: u32,
        pickup: impl Into<String>,
        dropoff: impl Into<String>,
        distance_miles: f64,
    ) -> RideResult<Self> {
        Self::new(id, RideKind::Standard, pickup, dropoff, distance_miles)
    }

    pub fn premium(
        id: u32,
        pickup: impl Into<String>,
        dropoff: impl Into<String>,
        distance_miles: f64,
    ) -> RideResult<Self> {
        Self::new(id, RideKind::Premium, pickup, dropoff, distance_miles)
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn kind(&self) -> RideKind {
        self.kind
    }

    pub fn pickup(&self) -> &str {
        &self.pickup
    }

    pub fn dropoff(&self) -> &str {
        &self.dropoff
    }

    pub fn distance_miles(&self) -> f64 {
        self.distance_miles
    }

    /// Last computed fare, or zero if no fare has been computed yet.
    pub fn fare_total(&self) -> f64 {
        self.fare_total
    }

    /// Change the distance. The stored fare is left as-is until the next computation.
    pub fn set_distance_miles(&mut self, distance_miles: f64) -> RideResult<()> {
        validate_distance(self.id, distance_miles)?;
        self.distance_miles = distance_miles;
        Ok(())
    }

    /// Compute the fare with the default rates, store it and return it.
    pub fn compute_fare(&mut self) -> f64 {
        self.compute_fare_with(&FareSchedule::default())
    }

    pub fn compute_fare_with(&mut self, schedule: &FareSchedule) -> f64 {
        self.fare_total = calculate_fare(self.kind, self.distance_miles, schedule);
        tracing::trace!(
            ride_id = self.id,
            kind = %self.kind,
            distance_miles = self.distance_miles,
            fare = self.fare_total,
            "fare computed"
        );
        self.fare_total
    }

    pub fn fare_breakdown(&self, schedule: &FareSchedule) -> FareBreakdown {
        schedule.rates(self.kind).breakdown(self.distance_miles)
    }

    /// One-line summary: variant, id, route, distance and current fare.
    pub fn printable_details(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Ride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // "[Premium]" is padded to the width of "[Standard]" so the columns line up.
        let tag = format!("[{}]", self.kind.tag());
        write!(
            f,
            "{tag:<10} Ride ID: {} | From: {} | To: {} | Distance: {} miles | Fare: ${}",
            self.id,
            self.pickup,
            self.dropoff,
            format_number(self.distance_miles),
            format_number(self.fare_total),
        )
    }
}

fn validate_distance(ride_id: u32, miles: f64) -> RideResult<()> {
    if !miles.is_finite() || miles < 0.0 {
        return Err(RideError::InvalidDistance { ride_id, miles });
    }
    Ok(())
}
