//! Error type shared by the ride store, fare schedule and report flow.

use bevy_ecs::prelude::Entity;
use thiserror::Error;

pub type RideResult<T> = Result<T, RideError>;

#[derive(Debug, Error)]
pub enum RideError {
    /// Distance is negative, NaN or infinite.
    #[error("ride {ride_id}: distance {miles} miles must be a finite, non-negative number")]
    InvalidDistance { ride_id: u32, miles: f64 },

    /// A fare schedule coefficient is negative, NaN or infinite.
    #[error("fare rate '{field}' value {value} must be a finite, non-negative number")]
    InvalidRate { field: &'static str, value: f64 },

    #[error("ride id {0} is already registered")]
    DuplicateRideId(u32),

    /// An aggregate holds a handle whose ride is no longer in the store.
    #[error("ride {0:?} is not in the store")]
    MissingRide(Entity),

    #[error("failed to parse fare schedule: {0}")]
    Config(#[from] serde_json::Error),

    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}
