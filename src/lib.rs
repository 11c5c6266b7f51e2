//! Appliance-slot electricity consumption estimator.

pub mod catalog;
pub mod config;
pub mod estimator;
/// CSV export module.
pub mod io;
pub mod report;
