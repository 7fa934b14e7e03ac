//! Rain severity relative to how long it falls

use crate::error::DryRockError;
use crate::models::Measurement;
use crate::timing::get_time_delta;
use crate::units::{MILLIMETRES, PRECIPITATION_AMOUNT};
use crate::Result;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rain above this many mm per hour is at least `Okay`
pub const OKAY_MM_PER_HOUR: f64 = 0.5;
/// Rain above this many mm per hour is `Bad`
pub const BAD_MM_PER_HOUR: f64 = 2.0;

/// Qualitative rain level shown in reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Good,
    Okay,
    Bad,
}

impl Severity {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Good => "good",
            Severity::Okay => "okay",
            Severity::Bad => "bad",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify a millimetre rain total that fell over `hours` whole hours
///
/// Thresholds scale linearly with the hour count. A total must exceed the
/// okay threshold to be `Okay` and reach the bad threshold to be `Bad`.
pub fn classify_rain(rain: &Measurement, hours: u32) -> Result<Severity> {
    if rain.name() != PRECIPITATION_AMOUNT {
        return Err(DryRockError::invalid_measurement(format!(
            "severity needs {PRECIPITATION_AMOUNT}, got {}",
            rain.name()
        )));
    }
    if rain.unit() != MILLIMETRES {
        return Err(DryRockError::invalid_measurement(format!(
            "severity needs rain in {MILLIMETRES}, got {}",
            rain.unit()
        )));
    }

    let hours = f64::from(hours);
    let total = rain.value();
    let okay = OKAY_MM_PER_HOUR * hours;
    let severity = if total > okay && total >= BAD_MM_PER_HOUR * hours {
        Severity::Bad
    } else if total > okay {
        Severity::Okay
    } else {
        Severity::Good
    };
    Ok(severity)
}

/// Classify a rain total over the clock span `start..end`, rounded to whole hours
pub fn classify_rain_between(rain: &Measurement, start: NaiveTime, end: NaiveTime) -> Result<Severity> {
    let hours = u32::try_from(get_time_delta(start, end).num_hours()).unwrap_or(0);
    classify_rain(rain, hours)
}
