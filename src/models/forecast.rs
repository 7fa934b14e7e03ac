//! Forecast model and interval queries

use super::{Interval, Place};
use crate::units::UnitSystem;
use crate::Result;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Forecast for one place: intervals sorted ascending by start time
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Forecast {
    /// Place this forecast was issued for
    pub place: Place,
    /// When the provider last updated this forecast
    pub updated_at: DateTime<Utc>,
    pub intervals: Vec<Interval>,
}

impl Forecast {
    /// Create new forecast
    #[must_use]
    pub fn new(place: Place, updated_at: DateTime<Utc>, intervals: Vec<Interval>) -> Self {
        Self {
            place,
            updated_at,
            intervals,
        }
    }

    /// Intervals whose start falls on `day`
    ///
    /// With a time zone the start is projected into it before taking the date;
    /// otherwise the UTC date is used. Forecast order is preserved.
    #[must_use]
    pub fn intervals_for(&self, day: NaiveDate, tz: Option<Tz>) -> Vec<&Interval> {
        self.intervals
            .iter()
            .filter(|interval| match tz {
                Some(tz) => interval.start_time.with_timezone(&tz).date_naive() == day,
                None => interval.start_time.date_naive() == day,
            })
            .collect()
    }

    /// Intervals whose start lies in `[start, end)`
    #[must_use]
    pub fn intervals_between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<&Interval> {
        self.intervals
            .iter()
            .filter(|interval| interval.start_time >= start && interval.start_time < end)
            .collect()
    }

    /// Convert every convertible measurement to `unit_system`'s display units
    ///
    /// Measurements without a display unit (wind direction, for one) are left as they are.
    pub fn convert_units(&mut self, unit_system: UnitSystem) -> Result<()> {
        for interval in &mut self.intervals {
            for measurement in interval.variables.values_mut() {
                if let Some(target) = unit_system.display_unit_for(measurement.name()) {
                    measurement.convert_to(target)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Measurement;
    use crate::units::{
        AIR_TEMPERATURE, CELSIUS, DEGREES, FAHRENHEIT, INCHES, METRES_PER_SECOND, MILES_PER_HOUR,
        MILLIMETRES, PRECIPITATION_AMOUNT, WIND_FROM_DIRECTION, WIND_SPEED,
    };
    use chrono::TimeZone;

    fn hourly(start: DateTime<Utc>, hours: i64) -> Vec<Interval> {
        (0..hours)
            .map(|h| {
                let start_time = start + chrono::Duration::hours(h);
                Interval::new(
                    start_time,
                    start_time + chrono::Duration::hours(1),
                    [
                        Measurement::new(PRECIPITATION_AMOUNT, 1.0, MILLIMETRES),
                        Measurement::new(AIR_TEMPERATURE, 10.0, CELSIUS),
                        Measurement::new(WIND_SPEED, 4.0, METRES_PER_SECOND),
                        Measurement::new(WIND_FROM_DIRECTION, 270.0, DEGREES),
                    ],
                )
                .unwrap()
            })
            .collect()
    }

    fn forecast(intervals: Vec<Interval>) -> Forecast {
        let place = Place::new("Dalkey Quarry", 53.271, -6.107, Some(95.0));
        let updated_at = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        Forecast::new(place, updated_at, intervals)
    }

    #[test]
    fn test_intervals_for_utc_day() {
        let start = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let forecast = forecast(hourly(start, 48));

        let day1 = forecast.intervals_for(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(), None);
        let day2 = forecast.intervals_for(NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(), None);
        let day3 = forecast.intervals_for(NaiveDate::from_ymd_opt(2020, 1, 3).unwrap(), None);

        assert_eq!(day1.len(), 24);
        assert_eq!(day2.len(), 24);
        assert!(day3.is_empty());
        assert!(day1.windows(2).all(|w| w[0].start_time < w[1].start_time));
    }

    #[test]
    fn test_intervals_for_projects_into_time_zone() {
        // from 12:00 UTC on 30 June it is already 1 July in Auckland (UTC+12)
        let start = Utc.with_ymd_and_hms(2020, 6, 30, 10, 0, 0).unwrap();
        let forecast = forecast(hourly(start, 14));
        let july_first = NaiveDate::from_ymd_opt(2020, 7, 1).unwrap();

        assert!(forecast.intervals_for(july_first, None).is_empty());

        let local = forecast.intervals_for(july_first, Some(chrono_tz::Pacific::Auckland));
        assert_eq!(local.len(), 12);
        assert_eq!(
            local[0].start_time,
            Utc.with_ymd_and_hms(2020, 6, 30, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_intervals_between_is_half_open() {
        let start = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let forecast = forecast(hourly(start, 24));

        let window = forecast.intervals_between(
            Utc.with_ymd_and_hms(2020, 1, 1, 6, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2020, 1, 1, 11, 59, 0).unwrap(),
        );
        assert_eq!(window.len(), 6);
        assert_eq!(window[0].start_time.format("%H:%M").to_string(), "06:00");
        assert_eq!(window[5].start_time.format("%H:%M").to_string(), "11:00");

        let noon = Utc.with_ymd_and_hms(2020, 1, 1, 12, 0, 0).unwrap();
        assert!(forecast.intervals_between(noon, noon).is_empty());
    }

    #[test]
    fn test_queries_tolerate_unsorted_intervals() {
        let start = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let mut intervals = hourly(start, 4);
        intervals.reverse();
        let forecast = forecast(intervals);

        let found = forecast.intervals_between(start, start + chrono::Duration::hours(2));
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].start_time, start + chrono::Duration::hours(1));
    }

    #[test]
    fn test_convert_units_imperial() {
        let start = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let mut forecast = forecast(hourly(start, 2));
        forecast.convert_units(UnitSystem::Imperial).unwrap();

        let interval = &forecast.intervals[0];
        assert_eq!(interval.variable(PRECIPITATION_AMOUNT).unwrap().unit(), INCHES);
        assert_eq!(interval.variable(AIR_TEMPERATURE).unwrap().unit(), FAHRENHEIT);
        assert!((interval.variable(AIR_TEMPERATURE).unwrap().value() - 50.0).abs() < 1e-9);
        assert_eq!(interval.variable(WIND_SPEED).unwrap().unit(), MILES_PER_HOUR);
        assert_eq!(
            interval.variable(WIND_FROM_DIRECTION).unwrap(),
            &Measurement::new(WIND_FROM_DIRECTION, 270.0, DEGREES)
        );
    }
}
