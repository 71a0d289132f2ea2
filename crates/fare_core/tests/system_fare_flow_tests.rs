mod support;

use fare_core::ecs::{Ride, RideKind};
use fare_core::pricing::{calculate_fare, FareRates, FareSchedule};
use fare_core::test_helpers::{assert_fare_eq, test_ride};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use support::store::TestStoreBuilder;

const SAMPLES: usize = 500;

#[test]
fn standard_fare_matches_formula_for_sampled_distances() {
    let mut rng = StdRng::seed_from_u64(42);
    for id in 0..SAMPLES as u32 {
        let miles: f64 = rng.gen_range(0.0..500.0);
        let mut ride = test_ride(id, RideKind::Standard, miles);
        let fare = ride.compute_fare();
        assert!(
            (fare - (1.5 + 1.8 * miles)).abs() < 1e-9,
            "standard fare for {miles} miles was {fare}"
        );
    }
}

#[test]
fn premium_fare_matches_formula_for_sampled_distances() {
    let mut rng = StdRng::seed_from_u64(7);
    for id in 0..SAMPLES as u32 {
        let miles: f64 = rng.gen_range(0.0..500.0);
        let mut ride = test_ride(id, RideKind::Premium, miles);
        let fare = ride.compute_fare();
        assert!(
            (fare - (5.5 + 3.2 * miles)).abs() < 1e-9,
            "premium fare for {miles} miles was {fare}"
        );
    }
}

#[test]
fn repeated_computation_leaves_fare_unchanged() {
    let mut rng = StdRng::seed_from_u64(99);
    for id in 0..50u32 {
        let kind = if rng.gen_bool(0.5) {
            RideKind::Standard
        } else {
            RideKind::Premium
        };
        let mut ride = test_ride(id, kind, rng.gen_range(0.0..100.0));
        let first = ride.compute_fare();
        for _ in 0..3 {
            assert_eq!(ride.compute_fare(), first);
        }
        assert_eq!(ride.fare_total(), first);
    }
}

#[test]
fn zero_distance_charges_flat_fees_only() {
    let mut standard = Ride::standard(1, "Here", "Here", 0.0).expect("ride");
    let mut premium = Ride::premium(2, "Here", "Here", 0.0).expect("ride");
    assert_eq!(standard.compute_fare(), 1.5);
    assert_fare_eq(premium.compute_fare(), 5.5);
}

#[test]
fn pricing_pass_matches_per_ride_computation() {
    let (mut store, handles) = TestStoreBuilder::new()
        .with_ride(RideKind::Standard, 4.3)
        .with_ride(RideKind::Premium, 12.0)
        .with_ride(RideKind::Standard, 3.1)
        .build();

    for handle in &handles {
        assert_eq!(store.ride(*handle).expect("ride").fare_total(), 0.0);
    }

    store.compute_all_fares();

    let schedule = FareSchedule::default();
    for handle in &handles {
        let ride = store.ride(*handle).expect("ride");
        assert_eq!(
            ride.fare_total(),
            calculate_fare(ride.kind(), ride.distance_miles(), &schedule)
        );
    }
}

#[test]
fn pricing_pass_uses_store_schedule() {
    let fares = FareSchedule::default().with_standard(FareRates {
        base_fare: 2.0,
        per_mile: 1.0,
        surcharge: 0.5,
    });
    let (store, handles) = TestStoreBuilder::new()
        .with_fares(fares)
        .with_ride(RideKind::Standard, 4.0)
        .with_ride(RideKind::Premium, 1.0)
        .priced()
        .build();

    assert_eq!(store.ride(handles[0]).expect("ride").fare_total(), 6.5);
    assert_fare_eq(store.ride(handles[1]).expect("ride").fare_total(), 8.7);
}
