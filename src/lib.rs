//! `DryRock` - Weather forecast aggregation for rock-climbing reports
//!
//! This library turns hourly place forecasts into per-day, per-daypart
//! summaries of rain, temperature and wind for groups of places, in metric
//! and imperial units, ready for a page renderer.

pub mod analysis;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod report;
pub mod timing;
pub mod units;

// Re-export core types for public API
pub use analysis::{CardinalDirection, Severity};
pub use config::{DryRockConfig, ReportSettings};
pub use error::DryRockError;
pub use input::ReportInput;
pub use models::{Area, Forecast, Interval, Measurement, Place};
pub use report::{AreaForecastContext, DaySummary, UnitSystemContexts, build_all_contexts};
pub use timing::{Daypart, get_time_delta};
pub use units::UnitSystem;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, DryRockError>;
