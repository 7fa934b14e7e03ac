//! Data models for the DryRock report engine
//!
//! This module contains the core domain models organized by concern:
//! - Measurement: named, unit-tagged weather readings
//! - Interval: half-open time slices carrying measurements
//! - Forecast: interval sequences for one place and their queries
//! - Place: places and the areas grouping them

pub mod forecast;
pub mod interval;
pub mod measurement;
pub mod place;

// Re-export all public types for convenient access
pub use forecast::Forecast;
pub use interval::Interval;
pub use measurement::Measurement;
pub use place::{Area, Place};
