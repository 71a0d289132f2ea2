pub mod fare_calculation;
