//! The console report: price each ride, attach the rides to a driver and a rider,
//! then print their statistics.

use std::io::Write;

use crate::error::RideResult;
use crate::report::{format_number, write_separator};
use crate::scenario::{build_scenario, ScenarioParams};

/// Values printed by [run_report], returned for callers that want to check them.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    /// Fare of each ride, in ride order.
    pub fares: Vec<f64>,
    pub total_earnings: f64,
    pub average_fare: f64,
}

/// Run the fixed demo scenario and write the report to `out`.
pub fn run_demo<W: Write>(out: &mut W) -> RideResult<ReportSummary> {
    run_report(ScenarioParams::default(), out)
}

pub fn run_report<W: Write>(params: ScenarioParams, out: &mut W) -> RideResult<ReportSummary> {
    let mut scenario = build_scenario(params)?;

    write_separator(out)?;
    writeln!(out, "Calculating fares for all rides (polymorphism demo)")?;
    write_separator(out)?;

    let mut fares = Vec::with_capacity(scenario.rides.len());
    for handle in &scenario.rides {
        fares.push(scenario.store.compute_fare(*handle)?);
        writeln!(out, "{}", scenario.store.ride(*handle)?.printable_details())?;
    }

    write_separator(out)?;

    scenario.attach_all();

    writeln!(out, "Driver info:")?;
    scenario.driver.print_driver_info(out)?;
    let total_earnings = scenario.driver.calculate_total_earnings(&scenario.store)?;
    writeln!(out, "Total driver earnings: ${}", format_number(total_earnings))?;

    write_separator(out)?;

    writeln!(out, "Rider info and history:")?;
    scenario.rider.print_ride_history(&scenario.store, out)?;
    let average_fare = scenario.rider.compute_average_fare(&scenario.store)?;
    writeln!(out, "Average fare paid by rider: ${}", format_number(average_fare))?;

    write_separator(out)?;
    writeln!(out, "Program finished.")?;

    tracing::info!(rides = fares.len(), total_earnings, average_fare, "report finished");

    Ok(ReportSummary {
        fares,
        total_earnings,
        average_fare,
    })
}
