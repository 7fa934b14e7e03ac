//! Forecast intervals: half-open time spans carrying measurements

use super::Measurement;
use crate::error::DryRockError;
use crate::Result;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One slice `[start_time, end_time)` of a forecast
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Interval {
    pub start_time: DateTime<Utc>,
    /// Exclusive end of the interval
    pub end_time: DateTime<Utc>,
    /// Measurements keyed by their name
    pub variables: BTreeMap<String, Measurement>,
}

impl Interval {
    /// Create an interval, keying each measurement by its name
    ///
    /// Fails when `end_time` is not after `start_time`.
    pub fn new(
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        measurements: impl IntoIterator<Item = Measurement>,
    ) -> Result<Self> {
        let interval = Self {
            start_time,
            end_time,
            variables: measurements
                .into_iter()
                .map(|m| (m.name().to_string(), m))
                .collect(),
        };
        interval.validate()?;
        Ok(interval)
    }

    /// Check the `end_time > start_time` invariant, e.g. after deserializing
    pub fn validate(&self) -> Result<()> {
        if self.end_time <= self.start_time {
            return Err(DryRockError::invalid_interval(format!(
                "end {} is not after start {}",
                self.end_time, self.start_time
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }

    /// Look up a measurement by name
    pub fn variable(&self, name: &str) -> Result<&Measurement> {
        self.variables
            .get(name)
            .ok_or_else(|| DryRockError::missing_variable(name))
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Forecast between: {} and {}", self.start_time, self.end_time)?;
        for variable in self.variables.values() {
            write!(f, "\n{variable}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{AIR_TEMPERATURE, CELSIUS, MILLIMETRES, PRECIPITATION_AMOUNT};
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 8, 7, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_new_keys_variables_by_name() {
        let interval = Interval::new(
            at(6),
            at(7),
            [
                Measurement::new(PRECIPITATION_AMOUNT, 0.1, MILLIMETRES),
                Measurement::new(AIR_TEMPERATURE, 14.6, CELSIUS),
            ],
        )
        .unwrap();

        assert_eq!(interval.variables.len(), 2);
        assert_eq!(interval.variable(AIR_TEMPERATURE).unwrap().value(), 14.6);
        assert_eq!(interval.duration(), Duration::hours(1));
    }

    #[test]
    fn test_rejects_empty_or_inverted_span() {
        assert!(matches!(
            Interval::new(at(6), at(6), []),
            Err(DryRockError::InvalidInterval { .. })
        ));
        assert!(matches!(
            Interval::new(at(7), at(6), []),
            Err(DryRockError::InvalidInterval { .. })
        ));
    }

    #[test]
    fn test_missing_variable() {
        let interval = Interval::new(at(6), at(7), []).unwrap();
        assert!(matches!(
            interval.variable(PRECIPITATION_AMOUNT),
            Err(DryRockError::MissingVariable { .. })
        ));
    }

    #[test]
    fn test_display_lists_variables() {
        let interval = Interval::new(
            at(6),
            at(7),
            [Measurement::new(PRECIPITATION_AMOUNT, 0.1, MILLIMETRES)],
        )
        .unwrap();

        let text = interval.to_string();
        assert!(text.starts_with("Forecast between: 2020-08-07 06:00:00 UTC"));
        assert!(text.ends_with("precipitation_amount: 0.1 mm"));
    }
}
