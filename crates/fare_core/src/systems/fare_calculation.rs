use bevy_ecs::prelude::{Query, Res};

use crate::ecs::Ride;
use crate::pricing::FareSchedule;

/// Recomputes the fare of every ride with the current [FareSchedule].
pub fn fare_calculation_system(fares: Res<FareSchedule>, mut rides: Query<&mut Ride>) {
    let mut priced = 0usize;
    for mut ride in rides.iter_mut() {
        ride.compute_fare_with(&fares);
        priced += 1;
    }
    tracing::debug!(rides = priced, "fare calculation pass finished");
}
