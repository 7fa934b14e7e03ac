//! Sums and extremes over a run of forecast intervals
//!
//! Every aggregate needs at least one interval and fails with
//! [`DryRockError::EmptyInput`] otherwise; callers decide what an empty
//! bucket means before asking for a summary of it.

use crate::error::DryRockError;
use crate::models::{Interval, Measurement};
use crate::units::{AIR_TEMPERATURE, PRECIPITATION_AMOUNT, WIND_FROM_DIRECTION, WIND_SPEED};
use crate::Result;
use std::borrow::Borrow;

fn first_of<'a, I: Borrow<Interval>>(intervals: &'a [I], operation: &str) -> Result<&'a Interval> {
    intervals
        .first()
        .map(I::borrow)
        .ok_or_else(|| DryRockError::empty_input(operation))
}

/// Total precipitation, summed left to right starting from the first interval
pub fn sum_rain<I: Borrow<Interval>>(intervals: &[I]) -> Result<Measurement> {
    let first = first_of(intervals, "sum_rain")?;

    intervals[1..]
        .iter()
        .try_fold(first.variable(PRECIPITATION_AMOUNT)?.clone(), |total, interval| {
            let interval: &Interval = interval.borrow();
            total.checked_add(interval.variable(PRECIPITATION_AMOUNT)?)
        })
}

/// Scan for the extreme `name` value; `replaces(best, candidate)` must be strict
/// so the earliest interval keeps ties.
fn extreme_by<'a, I, F>(intervals: &'a [I], name: &str, operation: &str, replaces: F) -> Result<&'a Interval>
where
    I: Borrow<Interval>,
    F: Fn(f64, f64) -> bool,
{
    let mut best = first_of(intervals, operation)?;
    let mut best_value = best.variable(name)?.value();

    for interval in &intervals[1..] {
        let interval: &Interval = interval.borrow();
        let value = interval.variable(name)?.value();
        if replaces(best_value, value) {
            best = interval;
            best_value = value;
        }
    }
    Ok(best)
}

/// Highest air temperature
pub fn max_temp_of<I: Borrow<Interval>>(intervals: &[I]) -> Result<Measurement> {
    let hottest = extreme_by(intervals, AIR_TEMPERATURE, "max_temp_of", |best, v| best < v)?;
    Ok(hottest.variable(AIR_TEMPERATURE)?.clone())
}

/// Lowest air temperature
pub fn min_temp_of<I: Borrow<Interval>>(intervals: &[I]) -> Result<Measurement> {
    let coldest = extreme_by(intervals, AIR_TEMPERATURE, "min_temp_of", |best, v| best > v)?;
    Ok(coldest.variable(AIR_TEMPERATURE)?.clone())
}

/// Highest wind speed together with the wind direction of that same interval
pub fn max_wind_speed_of<I: Borrow<Interval>>(intervals: &[I]) -> Result<(Measurement, Measurement)> {
    let windiest = extreme_by(intervals, WIND_SPEED, "max_wind_speed_of", |best, v| best < v)?;
    Ok((
        windiest.variable(WIND_SPEED)?.clone(),
        windiest.variable(WIND_FROM_DIRECTION)?.clone(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{CELSIUS, DEGREES, INCHES, METRES_PER_SECOND, MILLIMETRES};
    use chrono::{Duration, TimeZone, Utc};

    /// (rain mm, temperature celsius, wind m/s, wind direction degrees) per hour
    fn intervals(rows: &[(f64, f64, f64, f64)]) -> Vec<Interval> {
        let start = Utc.with_ymd_and_hms(2020, 8, 7, 0, 0, 0).unwrap();
        rows.iter()
            .enumerate()
            .map(|(i, &(rain, temp, speed, direction))| {
                let start_time = start + Duration::hours(i as i64);
                Interval::new(
                    start_time,
                    start_time + Duration::hours(1),
                    [
                        Measurement::new(PRECIPITATION_AMOUNT, rain, MILLIMETRES),
                        Measurement::new(AIR_TEMPERATURE, temp, CELSIUS),
                        Measurement::new(WIND_SPEED, speed, METRES_PER_SECOND),
                        Measurement::new(WIND_FROM_DIRECTION, direction, DEGREES),
                    ],
                )
                .unwrap()
            })
            .collect()
    }

    fn dalkey_day() -> Vec<Interval> {
        intervals(&[
            (0.0, 14.6, 2.1, 240.0),
            (0.1, 16.0, 3.4, 251.0),
            (0.0, 21.0, 5.1, 183.3),
            (0.1, 19.2, 4.0, 350.0),
            (0.1, 15.5, 2.2, 200.0),
        ])
    }

    #[test]
    fn test_sum_rain_keeps_float_accumulation() {
        let expected = Measurement::new(PRECIPITATION_AMOUNT, 0.30000000000000004, MILLIMETRES);
        assert_eq!(sum_rain(&dalkey_day()).unwrap(), expected);
    }

    #[test]
    fn test_sum_rain_of_identical_readings() {
        let day = intervals(&[(0.5, 0.0, 0.0, 0.0); 8]);
        let total = sum_rain(&day).unwrap();
        assert_eq!(total.unit(), MILLIMETRES);
        assert!((total.value() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_sum_rain_accepts_borrowed_intervals() {
        let day = dalkey_day();
        let refs: Vec<&Interval> = day.iter().skip(3).collect();
        assert!((sum_rain(&refs).unwrap().value() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_sum_rain_rejects_mixed_units() {
        let mut day = dalkey_day();
        day[1]
            .variables
            .insert(
                PRECIPITATION_AMOUNT.to_string(),
                Measurement::new(PRECIPITATION_AMOUNT, 0.1, INCHES),
            );
        assert!(matches!(sum_rain(&day), Err(DryRockError::UnitMismatch { .. })));
    }

    #[test]
    fn test_temperature_extremes() {
        let day = dalkey_day();
        assert_eq!(
            max_temp_of(&day).unwrap(),
            Measurement::new(AIR_TEMPERATURE, 21.0, CELSIUS)
        );
        assert_eq!(
            min_temp_of(&day).unwrap(),
            Measurement::new(AIR_TEMPERATURE, 14.6, CELSIUS)
        );
    }

    #[test]
    fn test_max_wind_speed_pairs_direction_from_same_interval() {
        let day = dalkey_day();
        let (speed, direction) = max_wind_speed_of(&day).unwrap();

        assert_eq!(speed, Measurement::new(WIND_SPEED, 5.1, METRES_PER_SECOND));
        // 350 degrees elsewhere in the day does not leak into the pairing
        assert_eq!(direction, Measurement::new(WIND_FROM_DIRECTION, 183.3, DEGREES));
    }

    #[test]
    fn test_ties_keep_earliest_interval() {
        let day = intervals(&[(0.0, 18.0, 6.0, 90.0), (0.0, 18.0, 6.0, 180.0)]);

        let (_, direction) = max_wind_speed_of(&day).unwrap();
        assert_eq!(direction.value(), 90.0);

        let hottest = extreme_by(&day, AIR_TEMPERATURE, "max_temp_of", |best, v| best < v).unwrap();
        assert_eq!(hottest.start_time, day[0].start_time);
    }

    #[test]
    fn test_empty_input() {
        let none: Vec<Interval> = Vec::new();
        assert!(matches!(sum_rain(&none), Err(DryRockError::EmptyInput { .. })));
        assert!(matches!(max_temp_of(&none), Err(DryRockError::EmptyInput { .. })));
        assert!(matches!(min_temp_of(&none), Err(DryRockError::EmptyInput { .. })));
        assert!(matches!(max_wind_speed_of(&none), Err(DryRockError::EmptyInput { .. })));
    }

    #[test]
    fn test_missing_measurement() {
        let start = Utc.with_ymd_and_hms(2020, 8, 7, 0, 0, 0).unwrap();
        let bare = vec![Interval::new(start, start + Duration::hours(1), []).unwrap()];
        assert!(matches!(sum_rain(&bare), Err(DryRockError::MissingVariable { .. })));
    }
}
