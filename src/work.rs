pub mod aggregate;
pub mod calendar;
pub mod clock;

mod aggregate_tests;
