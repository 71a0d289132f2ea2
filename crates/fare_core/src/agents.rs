//! Drivers and riders: aggregates that reference rides without owning them.
//!
//! Both keep ride handles in insertion order and derive their statistics from the
//! fares currently stored in the [RideStore], never from values copied at attach time.

use std::io::Write;

use bevy_ecs::prelude::Entity;

use crate::error::RideResult;
use crate::report::format_number;
use crate::store::RideStore;

#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    id: u32,
    name: String,
    rating: f64,
    completed_rides: Vec<Entity>,
}

impl Driver {
    pub fn new(id: u32, name: impl Into<String>, rating: f64) -> Self {
        Self {
            id,
            name: name.into(),
            rating,
            completed_rides: Vec::new(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    /// Append a ride. The same ride may be added more than once.
    pub fn add_completed_ride(&mut self, ride: Entity) {
        self.completed_rides.push(ride);
    }

    pub fn completed_rides(&self) -> &[Entity] {
        &self.completed_rides
    }

    pub fn ride_count(&self) -> usize {
        self.completed_rides.len()
    }

    /// Sum of the current fare of every completed ride; zero when there are none.
    pub fn calculate_total_earnings(&self, store: &RideStore) -> RideResult<f64> {
        let total = sum_fares(&self.completed_rides, store)?;
        tracing::debug!(driver_id = self.id, rides = self.ride_count(), total, "driver earnings");
        Ok(total)
    }

    pub fn driver_info(&self) -> String {
        format!(
            "Driver ID: {} | Name: {} | Rating: {} | Total rides: {}",
            self.id,
            self.name,
            format_number(self.rating),
            self.ride_count()
        )
    }

    pub fn print_driver_info<W: Write>(&self, out: &mut W) -> RideResult<()> {
        writeln!(out, "{}", self.driver_info())?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rider {
    id: u32,
    name: String,
    history: Vec<Entity>,
}

impl Rider {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            history: Vec::new(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn request_ride(&mut self, ride: Entity) {
        self.history.push(ride);
    }

    /// Requested rides, oldest first.
    pub fn history(&self) -> &[Entity] {
        &self.history
    }

    pub fn ride_count(&self) -> usize {
        self.history.len()
    }

    /// Mean of the current fares in the history; zero for an empty history.
    pub fn compute_average_fare(&self, store: &RideStore) -> RideResult<f64> {
        if self.history.is_empty() {
            return Ok(0.0);
        }
        let average = sum_fares(&self.history, store)? / self.history.len() as f64;
        tracing::debug!(rider_id = self.id, rides = self.ride_count(), average, "rider average fare");
        Ok(average)
    }

    /// Header lines followed by every ride's details line in request order.
    pub fn ride_history(&self, store: &RideStore) -> RideResult<Vec<String>> {
        let mut lines = Vec::with_capacity(self.history.len() + 2);
        lines.push(format!("Rider ID: {} | Name: {}", self.id, self.name));
        lines.push("Ride history:".to_string());
        for handle in &self.history {
            lines.push(store.ride(*handle)?.printable_details());
        }
        Ok(lines)
    }

    pub fn print_ride_history<W: Write>(&self, store: &RideStore, out: &mut W) -> RideResult<()> {
        for line in self.ride_history(store)? {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

fn sum_fares(handles: &[Entity], store: &RideStore) -> RideResult<f64> {
    let mut total = 0.0;
    for handle in handles {
        total += store.ride(*handle)?.fare_total();
    }
    Ok(total)
}
