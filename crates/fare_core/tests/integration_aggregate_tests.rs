mod support;

use fare_core::agents::{Driver, Rider};
use fare_core::ecs::RideKind;
use fare_core::pricing::{FareRates, FareSchedule};
use fare_core::test_helpers::assert_fare_eq;
use support::store::TestStoreBuilder;

#[test]
fn earnings_and_average_over_three_rides() {
    let (store, handles) = TestStoreBuilder::new()
        .with_ride(RideKind::Standard, 4.3)
        .with_ride(RideKind::Premium, 12.0)
        .with_ride(RideKind::Standard, 3.1)
        .priced()
        .build();

    let mut driver = Driver::new(101, "Anushka Driver", 4.8);
    let mut rider = Rider::new(201, "Anushka Rider");
    for handle in &handles {
        driver.add_completed_ride(*handle);
        rider.request_ride(*handle);
    }

    let fares: Vec<f64> = handles
        .iter()
        .map(|h| store.ride(*h).expect("ride").fare_total())
        .collect();
    let sum = fares[0] + fares[1] + fares[2];

    assert_eq!(driver.calculate_total_earnings(&store).expect("earnings"), sum);
    assert_eq!(rider.compute_average_fare(&store).expect("average"), sum / 3.0);
    assert_fare_eq(sum, 60.22);
}

#[test]
fn empty_aggregates_yield_zero() {
    let (store, _) = TestStoreBuilder::new()
        .with_ride(RideKind::Premium, 1.0)
        .priced()
        .build();
    assert_eq!(
        Driver::new(1, "Idle", 5.0)
            .calculate_total_earnings(&store)
            .expect("earnings"),
        0.0
    );
    assert_eq!(
        Rider::new(2, "New").compute_average_fare(&store).expect("average"),
        0.0
    );
}

#[test]
fn statistics_read_fares_live_not_at_attach_time() {
    let (mut store, handles) = TestStoreBuilder::new()
        .with_ride(RideKind::Standard, 10.0)
        .build();
    let ride = handles[0];

    let mut driver = Driver::new(101, "Driver", 4.8);
    let mut rider = Rider::new(201, "Rider");
    driver.add_completed_ride(ride);
    rider.request_ride(ride);

    // Attached before any fare was computed.
    assert_eq!(driver.calculate_total_earnings(&store).expect("earnings"), 0.0);
    assert_eq!(rider.compute_average_fare(&store).expect("average"), 0.0);

    store.compute_fare(ride).expect("fare");
    assert_fare_eq(driver.calculate_total_earnings(&store).expect("earnings"), 19.5);
    assert_fare_eq(rider.compute_average_fare(&store).expect("average"), 19.5);
}

#[test]
fn recomputing_a_shared_ride_updates_both_aggregates() {
    let (mut store, handles) = TestStoreBuilder::new()
        .with_ride(RideKind::Premium, 2.0)
        .with_ride(RideKind::Standard, 1.0)
        .priced()
        .build();

    let mut driver = Driver::new(101, "Driver", 4.8);
    let mut rider = Rider::new(201, "Rider");
    for handle in &handles {
        driver.add_completed_ride(*handle);
        rider.request_ride(*handle);
    }

    store
        .set_distance_miles(handles[0], 20.0)
        .expect("valid distance");
    let premium = store.compute_fare(handles[0]).expect("fare");
    let standard = store.ride(handles[1]).expect("ride").fare_total();
    assert_fare_eq(premium, 69.5);

    let earnings = driver.calculate_total_earnings(&store).expect("earnings");
    let average = rider.compute_average_fare(&store).expect("average");
    assert_eq!(earnings, premium + standard);
    assert_eq!(average, earnings / 2.0);
}

#[test]
fn driver_info_counts_duplicate_attachments() {
    let (store, handles) = TestStoreBuilder::new()
        .with_ride(RideKind::Standard, 1.0)
        .priced()
        .build();
    let mut driver = Driver::new(7, "Repeat", 3.25);
    driver.add_completed_ride(handles[0]);
    driver.add_completed_ride(handles[0]);

    assert_eq!(
        driver.driver_info(),
        "Driver ID: 7 | Name: Repeat | Rating: 3.25 | Total rides: 2"
    );
    assert_fare_eq(driver.calculate_total_earnings(&store).expect("earnings"), 6.6);
}

#[test]
fn custom_schedule_store_reprices_shared_ride_with_its_own_rates() {
    let flat = FareSchedule::default().with_standard(FareRates {
        base_fare: 10.0,
        per_mile: 0.0,
        surcharge: 0.0,
    });
    let (mut store, handles) = TestStoreBuilder::new()
        .with_fares(flat)
        .with_ride(RideKind::Standard, 1.0)
        .priced()
        .build();
    let ride = handles[0];

    let mut driver = Driver::new(101, "Driver", 4.8);
    let mut rider = Rider::new(201, "Rider");
    driver.add_completed_ride(ride);
    rider.request_ride(ride);

    store.set_distance_miles(ride, 40.0).expect("valid distance");
    store.compute_fare(ride).expect("fare");

    // Default standard rates would give 1.5 + 1.8 * 40 = 73.5.
    assert_eq!(driver.calculate_total_earnings(&store).expect("earnings"), 10.0);
    assert_eq!(rider.compute_average_fare(&store).expect("average"), 10.0);
}
