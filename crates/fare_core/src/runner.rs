//! Pricing schedule: the ECS systems run by [crate::store::RideStore::compute_all_fares].

use bevy_ecs::prelude::Schedule;

use crate::systems::fare_calculation::fare_calculation_system;

pub fn pricing_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(fare_calculation_system);
    schedule
}
