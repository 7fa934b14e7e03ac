//! Forecast analysis
//!
//! Pure functions over forecast intervals:
//! - Aggregates: rain totals and temperature/wind extremes
//! - Compass names for wind directions
//! - Rain severity relative to duration

pub mod aggregate;
pub mod direction;
pub mod severity;

pub use aggregate::{max_temp_of, max_wind_speed_of, min_temp_of, sum_rain};
pub use direction::{CardinalDirection, cardinal_name_of};
pub use severity::{Severity, classify_rain, classify_rain_between};
