//! Print the fare report for the built-in demo rides.
//!
//! Run with: cargo run -p fare_core --bin fare_demo

use std::io::Write;

use fare_core::demo::run_demo;

fn main() -> anyhow::Result<()> {
    fare_core::logging::init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_demo(&mut out)?;
    out.flush()?;
    Ok(())
}
