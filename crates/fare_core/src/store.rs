//! Ride store: the single owner of every ride.
//!
//! Rides are ECS entities in a private [World]. Drivers and riders keep the
//! [Entity] handed out by [RideStore::insert_ride] and read the ride back
//! through the store, so every aggregate sees the current fare.

use std::collections::HashMap;

use bevy_ecs::prelude::{Entity, Mut, Schedule, World};

use crate::ecs::Ride;
use crate::error::{RideError, RideResult};
use crate::pricing::FareSchedule;
use crate::runner::pricing_schedule;

pub struct RideStore {
    world: World,
    schedule: Schedule,
    order: Vec<Entity>,
    by_id: HashMap<u32, Entity>,
}

impl Default for RideStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RideStore {
    /// Store priced with the default fare schedule.
    pub fn new() -> Self {
        Self::build(FareSchedule::default())
    }

    pub fn with_fares(fares: FareSchedule) -> RideResult<Self> {
        fares.validate()?;
        Ok(Self::build(fares))
    }

    fn build(fares: FareSchedule) -> Self {
        let mut world = World::new();
        world.insert_resource(fares);
        Self {
            world,
            schedule: pricing_schedule(),
            order: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    pub fn fares(&self) -> &FareSchedule {
        self.world.resource::<FareSchedule>()
    }

    /// Take ownership of `ride` and return its handle. Ride ids must be unique per store.
    pub fn insert_ride(&mut self, ride: Ride) -> RideResult<Entity> {
        if self.by_id.contains_key(&ride.id()) {
            return Err(RideError::DuplicateRideId(ride.id()));
        }
        let id = ride.id();
        let entity = self.world.spawn(ride).id();
        self.order.push(entity);
        self.by_id.insert(id, entity);
        tracing::debug!(ride_id = id, entity = ?entity, "ride registered");
        Ok(entity)
    }

    /// Remove a ride. Aggregates still holding its handle will see [RideError::MissingRide].
    pub fn remove_ride(&mut self, handle: Entity) -> Option<Ride> {
        let ride = self.world.get_entity_mut(handle)?.take::<Ride>()?;
        self.world.despawn(handle);
        self.order.retain(|entity| *entity != handle);
        self.by_id.remove(&ride.id());
        tracing::debug!(ride_id = ride.id(), "ride removed");
        Some(ride)
    }

    pub fn ride(&self, handle: Entity) -> RideResult<&Ride> {
        self.world
            .get::<Ride>(handle)
            .ok_or(RideError::MissingRide(handle))
    }

    // Private so stored rides are only repriced with the store's own schedule.
    fn ride_mut(&mut self, handle: Entity) -> RideResult<Mut<'_, Ride>> {
        self.world
            .get_mut::<Ride>(handle)
            .ok_or(RideError::MissingRide(handle))
    }

    pub fn find_by_id(&self, ride_id: u32) -> Option<Entity> {
        self.by_id.get(&ride_id).copied()
    }

    /// Handles in insertion order.
    pub fn handles(&self) -> &[Entity] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Change a stored ride's distance. Its fare is unchanged until the next computation.
    pub fn set_distance_miles(&mut self, handle: Entity, distance_miles: f64) -> RideResult<()> {
        self.ride_mut(handle)?.set_distance_miles(distance_miles)
    }

    /// Compute and store the fare of one ride with the store's schedule.
    pub fn compute_fare(&mut self, handle: Entity) -> RideResult<f64> {
        let fares = *self.fares();
        Ok(self.ride_mut(handle)?.compute_fare_with(&fares))
    }

    /// Run the pricing schedule once over every ride in the store.
    pub fn compute_all_fares(&mut self) {
        self.schedule.run(&mut self.world);
    }
}
