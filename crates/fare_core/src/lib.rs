pub mod agents;
pub mod demo;
pub mod ecs;
pub mod error;
pub mod logging;
pub mod pricing;
pub mod report;
pub mod runner;
pub mod scenario;
pub mod store;
pub mod systems;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;
