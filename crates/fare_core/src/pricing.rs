//! Fare schedule and the per-variant fare formula.
//!
//! Every variant prices a ride the same way:
//! `fare = base_fare + per_mile * distance_miles + surcharge`.
//! Variants differ only in their [FareRates].

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::ecs::RideKind;
use crate::error::{RideError, RideResult};

/// Standard ride: flat base fare.
pub const STANDARD_BASE_FARE: f64 = 1.5;
/// Standard ride: rate per mile.
pub const STANDARD_PER_MILE: f64 = 1.8;

/// Premium ride: flat base fare.
pub const PREMIUM_BASE_FARE: f64 = 4.0;
/// Premium ride: rate per mile.
pub const PREMIUM_PER_MILE: f64 = 3.2;
/// Premium ride: flat luxury surcharge added on top of base and distance.
pub const PREMIUM_LUXURY_FEE: f64 = 1.5;

/// Coefficients for one ride variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FareRates {
    pub base_fare: f64,
    pub per_mile: f64,
    #[serde(default)]
    pub surcharge: f64,
}

impl FareRates {
    pub const fn standard() -> Self {
        Self {
            base_fare: STANDARD_BASE_FARE,
            per_mile: STANDARD_PER_MILE,
            surcharge: 0.0,
        }
    }

    pub const fn premium() -> Self {
        Self {
            base_fare: PREMIUM_BASE_FARE,
            per_mile: PREMIUM_PER_MILE,
            surcharge: PREMIUM_LUXURY_FEE,
        }
    }

    /// Split a fare for `distance_miles` into its named parts.
    pub fn breakdown(&self, distance_miles: f64) -> FareBreakdown {
        FareBreakdown {
            base_fare: self.base_fare,
            distance_charge: self.per_mile * distance_miles,
            surcharge: self.surcharge,
        }
    }

    fn validate(&self, names: [&'static str; 3]) -> RideResult<()> {
        let values = [self.base_fare, self.per_mile, self.surcharge];
        for (field, value) in names.into_iter().zip(values) {
            if !value.is_finite() || value < 0.0 {
                return Err(RideError::InvalidRate { field, value });
            }
        }
        Ok(())
    }
}

/// Named parts of a computed fare.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FareBreakdown {
    pub base_fare: f64,
    pub distance_charge: f64,
    pub surcharge: f64,
}

impl FareBreakdown {
    /// Sum in formula order (base, then distance, then surcharge).
    pub fn total(&self) -> f64 {
        self.base_fare + self.distance_charge + self.surcharge
    }
}

/// Rates for every ride variant. Inserted into the ride store's world as a resource
/// and read by the fare calculation system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Resource)]
pub struct FareSchedule {
    #[serde(default = "FareRates::standard")]
    pub standard: FareRates,
    #[serde(default = "FareRates::premium")]
    pub premium: FareRates,
}

impl Default for FareSchedule {
    fn default() -> Self {
        Self {
            standard: FareRates::standard(),
            premium: FareRates::premium(),
        }
    }
}

impl FareSchedule {
    pub fn with_standard(mut self, rates: FareRates) -> Self {
        self.standard = rates;
        self
    }

    pub fn with_premium(mut self, rates: FareRates) -> Self {
        self.premium = rates;
        self
    }

    /// Parse a schedule from JSON. Missing variants fall back to the default rates.
    pub fn from_json(json: &str) -> RideResult<Self> {
        let schedule: Self = serde_json::from_str(json)?;
        schedule.validate()?;
        Ok(schedule)
    }

    pub fn validate(&self) -> RideResult<()> {
        self.standard
            .validate(["standard.base_fare", "standard.per_mile", "standard.surcharge"])?;
        self.premium
            .validate(["premium.base_fare", "premium.per_mile", "premium.surcharge"])
    }

    pub fn rates(&self, kind: RideKind) -> &FareRates {
        match kind {
            RideKind::Standard => &self.standard,
            RideKind::Premium => &self.premium,
        }
    }
}

/// Fare for a ride of `kind` covering `distance_miles`.
pub fn calculate_fare(kind: RideKind, distance_miles: f64, schedule: &FareSchedule) -> f64 {
    schedule.rates(kind).breakdown(distance_miles).total()
}
