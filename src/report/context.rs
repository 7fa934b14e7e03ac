//! Report contexts: per-area, per-day forecast summaries for page templates
//!
//! For each unit system the forecasts are cloned and converted to that
//! system's display units, then every area gets one context holding a
//! summary (or an explicit absence) for each place and report day. Index,
//! about and news pages reuse the same navigation bar.

use super::nav::{NavBar, NavLink, sanitize_name};
use crate::analysis::{
    CardinalDirection, Severity, cardinal_name_of, classify_rain_between, max_temp_of,
    max_wind_speed_of, min_temp_of, sum_rain,
};
use crate::config::ReportSettings;
use crate::error::DryRockError;
use crate::models::{Area, Forecast, Interval, Measurement, Place};
use crate::timing::{Daypart, report_days, today_in, whole_day};
use crate::units::{
    AIR_TEMPERATURE, MILLIMETRES, PRECIPITATION_AMOUNT, UnitSystem, WIND_FROM_DIRECTION, WIND_SPEED,
};
use crate::Result;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use sunrise::{Coordinates, SolarDay, SolarEvent};
use tracing::{debug, info, warn};

/// One forecast interval as shown in a day's detail table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntervalRow {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub rain: Measurement,
    pub temp: Measurement,
    pub wind_speed: Measurement,
    pub wind_from_direction: CardinalDirection,
}

impl IntervalRow {
    fn from_interval(interval: &Interval) -> Result<Self> {
        Ok(Self {
            start_time: interval.start_time,
            end_time: interval.end_time,
            rain: interval.variable(PRECIPITATION_AMOUNT)?.clone(),
            temp: interval.variable(AIR_TEMPERATURE)?.clone(),
            wind_speed: interval.variable(WIND_SPEED)?.clone(),
            wind_from_direction: cardinal_name_of(interval.variable(WIND_FROM_DIRECTION)?)?,
        })
    }
}

/// Rain total over part of a day and how heavy it is for that span
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodRain {
    pub total: Measurement,
    pub severity: Severity,
}

/// Everything shown for one place on one day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummary {
    pub total_rain: Measurement,
    pub rain_severity: Severity,
    pub max_temp: Measurement,
    pub min_temp: Measurement,
    pub max_wind_speed: Measurement,
    pub max_wind_speed_direction: CardinalDirection,
    pub morning: Option<PeriodRain>,
    pub afternoon: Option<PeriodRain>,
    pub evening: Option<PeriodRain>,
    /// Local sunrise; absent during polar day or night
    pub sunrise: Option<NaiveTime>,
    pub sunset: Option<NaiveTime>,
    pub intervals: Vec<IntervalRow>,
}

impl DaySummary {
    #[must_use]
    pub fn daypart(&self, daypart: Daypart) -> Option<&PeriodRain> {
        match daypart {
            Daypart::Morning => self.morning.as_ref(),
            Daypart::Afternoon => self.afternoon.as_ref(),
            Daypart::Evening => self.evening.as_ref(),
        }
    }
}

/// Context of one area's forecast page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaForecastContext {
    pub area_name: String,
    pub slug: String,
    pub unit_system: UnitSystem,
    pub days: Vec<NaiveDate>,
    pub places: Vec<Place>,
    /// place name -> day -> summary, `None` when the forecast has no data that day
    pub forecasts: BTreeMap<String, BTreeMap<NaiveDate, Option<DaySummary>>>,
    /// place name -> when its forecast was last updated
    pub updated_at: BTreeMap<String, DateTime<Utc>>,
    /// day -> the place with the least rain, `None` when no place has data
    pub driest_place: BTreeMap<NaiveDate, Option<String>>,
    pub nav_links: Vec<NavLink>,
}

impl AreaForecastContext {
    /// Summary for `place` on `day`; `None` for an unknown place or an absent day
    #[must_use]
    pub fn summary(&self, place: &str, day: NaiveDate) -> Option<&DaySummary> {
        self.forecasts.get(place)?.get(&day)?.as_ref()
    }
}

/// Context of a page that only carries navigation (about, news)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageContext {
    pub unit_system: UnitSystem,
    pub nav_links: Vec<NavLink>,
}

/// All page contexts for one unit system
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitSystemContexts {
    pub unit_system: UnitSystem,
    /// One per area, in area order
    pub forecast_pages: Vec<AreaForecastContext>,
    /// Copy of the first area's page
    pub index: Option<AreaForecastContext>,
    pub about: PageContext,
    pub news: PageContext,
}

/// Check that every area has one forecast per place, in place order
fn validate_inputs(areas: &[Area], area_forecasts: &[Vec<Forecast>]) -> Result<()> {
    if areas.len() != area_forecasts.len() {
        return Err(DryRockError::configuration_mismatch(format!(
            "{} areas but {} forecast lists",
            areas.len(),
            area_forecasts.len()
        )));
    }

    areas
        .iter()
        .zip(area_forecasts)
        .try_for_each(|(area, forecasts)| validate_area(area, forecasts))
}

/// One forecast per place, matching by name in place order, no place twice
fn validate_area(area: &Area, forecasts: &[Forecast]) -> Result<()> {
    if area.places.len() != forecasts.len() {
        return Err(DryRockError::configuration_mismatch(format!(
            "area '{}' has {} places but {} forecasts",
            area.name,
            area.places.len(),
            forecasts.len()
        )));
    }

    let mut seen = HashSet::new();
    for (place, forecast) in area.places.iter().zip(forecasts) {
        if place.name != forecast.place.name {
            return Err(DryRockError::configuration_mismatch(format!(
                "area '{}' lists place '{}' where the forecast is for '{}'",
                area.name, place.name, forecast.place.name
            )));
        }
        if !seen.insert(place.name.as_str()) {
            return Err(DryRockError::configuration_mismatch(format!(
                "area '{}' lists place '{}' more than once",
                area.name, place.name
            )));
        }
    }
    Ok(())
}

/// Build every page context for both unit systems, metric first
///
/// Fails before any aggregation when areas, places and forecasts do not line up.
#[tracing::instrument(skip(areas, area_forecasts, settings), fields(area_count = areas.len()))]
pub fn build_all_contexts(
    areas: &[Area],
    area_forecasts: &[Vec<Forecast>],
    now: DateTime<Utc>,
    settings: &ReportSettings,
) -> Result<Vec<UnitSystemContexts>> {
    validate_inputs(areas, area_forecasts)?;

    UnitSystem::ALL
        .iter()
        .map(|&unit_system| build_unit_system(areas, area_forecasts, unit_system, now, settings))
        .collect()
}

/// Build the page contexts of a single unit system
#[tracing::instrument(skip(areas, area_forecasts, now, settings))]
pub fn build_unit_system(
    areas: &[Area],
    area_forecasts: &[Vec<Forecast>],
    unit_system: UnitSystem,
    now: DateTime<Utc>,
    settings: &ReportSettings,
) -> Result<UnitSystemContexts> {
    validate_inputs(areas, area_forecasts)?;

    let mut converted = area_forecasts.to_vec();
    for forecast in converted.iter_mut().flatten() {
        forecast.convert_units(unit_system)?;
    }

    let nav = NavBar::new(areas, unit_system, &settings.base_path);
    let forecast_pages = areas
        .iter()
        .zip(&converted)
        .enumerate()
        .map(|(index, (area, forecasts))| {
            let days = report_days(today_in(area.time_zone, now), settings.days_ahead);
            let mut context = build_area_context(area, forecasts, &days, unit_system)?;
            context.nav_links = nav.with_active(index);
            Ok(context)
        })
        .collect::<Result<Vec<_>>>()?;

    if forecast_pages.is_empty() {
        warn!("No areas configured, index page has no forecast");
    }

    info!(
        pages = forecast_pages.len(),
        "Built {} report contexts",
        unit_system
    );

    Ok(UnitSystemContexts {
        unit_system,
        index: forecast_pages.first().cloned(),
        forecast_pages,
        about: PageContext {
            unit_system,
            nav_links: nav.for_about(),
        },
        news: PageContext {
            unit_system,
            nav_links: nav.for_news(),
        },
    })
}

/// Context for one area over `days`; forecasts must already be in `unit_system`
///
/// Navigation links are left empty for the caller to fill in.
pub fn build_area_context(
    area: &Area,
    forecasts: &[Forecast],
    days: &[NaiveDate],
    unit_system: UnitSystem,
) -> Result<AreaForecastContext> {
    validate_area(area, forecasts)?;

    let mut context_forecasts = BTreeMap::new();
    let mut updated_at = BTreeMap::new();
    for forecast in forecasts {
        let mut by_day = BTreeMap::new();
        for &day in days {
            let summary = summarise_day(forecast, day, area.time_zone)?;
            if summary.is_none() {
                debug!(place = %forecast.place.name, %day, "No forecast data");
            }
            by_day.insert(day, summary);
        }
        context_forecasts.insert(forecast.place.name.clone(), by_day);
        updated_at.insert(forecast.place.name.clone(), forecast.updated_at);
    }

    let driest_place = days
        .iter()
        .map(|&day| (day, driest_place_on(&area.places, &context_forecasts, day)))
        .collect();

    Ok(AreaForecastContext {
        area_name: area.name.clone(),
        slug: sanitize_name(&area.name),
        unit_system,
        days: days.to_vec(),
        places: area.places.clone(),
        forecasts: context_forecasts,
        updated_at,
        driest_place,
        nav_links: Vec::new(),
    })
}

/// Summary of `forecast` for the local calendar `day`, `None` without intervals
pub fn summarise_day(forecast: &Forecast, day: NaiveDate, tz: Tz) -> Result<Option<DaySummary>> {
    let day_intervals = forecast.intervals_for(day, Some(tz));
    if day_intervals.is_empty() {
        return Ok(None);
    }

    let total_rain = sum_rain(&day_intervals)?;
    let (day_start, day_end) = covered_span(&day_intervals, tz);
    let rain_severity = rain_severity(&total_rain, day_start, day_end)?;
    let (max_wind_speed, max_wind_direction) = max_wind_speed_of(&day_intervals)?;

    let [morning, afternoon, evening] = Daypart::ALL.map(|daypart| daypart_rain(forecast, day, tz, daypart));
    let (sunrise, sunset) = sun_times(&forecast.place, day, tz);

    Ok(Some(DaySummary {
        total_rain,
        rain_severity,
        max_temp: max_temp_of(&day_intervals)?,
        min_temp: min_temp_of(&day_intervals)?,
        max_wind_speed,
        max_wind_speed_direction: cardinal_name_of(&max_wind_direction)?,
        morning: morning?,
        afternoon: afternoon?,
        evening: evening?,
        sunrise,
        sunset,
        intervals: day_intervals
            .iter()
            .map(|interval| IntervalRow::from_interval(interval))
            .collect::<Result<_>>()?,
    }))
}

/// Rain over one daypart window of `day`, `None` when no interval starts in it
fn daypart_rain(forecast: &Forecast, day: NaiveDate, tz: Tz, daypart: Daypart) -> Result<Option<PeriodRain>> {
    let (start, end) = daypart.bounds(day, tz);
    let intervals = forecast.intervals_between(start, end);
    if intervals.is_empty() {
        return Ok(None);
    }

    let total = sum_rain(&intervals)?;
    let (window_start, window_end) = daypart.window();
    let severity = rain_severity(&total, window_start, window_end)?;
    Ok(Some(PeriodRain { total, severity }))
}

/// Local clock span `day_intervals` cover, ending a minute before the last one ends
///
/// A full day spans 00:00 to 23:59 (24 hours); a partial first day only
/// counts the hours actually forecast.
fn covered_span(day_intervals: &[&Interval], tz: Tz) -> (NaiveTime, NaiveTime) {
    let start = day_intervals.iter().map(|interval| interval.start_time).min();
    let end = day_intervals.iter().map(|interval| interval.end_time).max();
    match (start, end) {
        (Some(start), Some(end)) => (
            start.with_timezone(&tz).time(),
            (end - Duration::minutes(1)).with_timezone(&tz).time(),
        ),
        _ => whole_day(),
    }
}

/// Severity thresholds are in millimetres whatever the display units
fn rain_severity(total: &Measurement, start: NaiveTime, end: NaiveTime) -> Result<Severity> {
    classify_rain_between(&total.converted_to(MILLIMETRES)?, start, end)
}

/// Place with the smallest rain total on `day`; earlier places win ties
fn driest_place_on(
    places: &[Place],
    forecasts: &BTreeMap<String, BTreeMap<NaiveDate, Option<DaySummary>>>,
    day: NaiveDate,
) -> Option<String> {
    let mut driest: Option<(&str, f64)> = None;
    for place in places {
        let Some(summary) = forecasts.get(&place.name).and_then(|days| days.get(&day)).and_then(Option::as_ref)
        else {
            continue;
        };
        let rain = summary.total_rain.value();
        if driest.is_none_or(|(_, least)| rain < least) {
            driest = Some((place.name.as_str(), rain));
        }
    }
    driest.map(|(name, _)| name.to_string())
}

/// Local sunrise and sunset clock times at `place` on `day`
fn sun_times(place: &Place, day: NaiveDate, tz: Tz) -> (Option<NaiveTime>, Option<NaiveTime>) {
    let Some(coordinates) = Coordinates::new(place.latitude, place.longitude) else {
        warn!(
            place = %place.name,
            coordinates = %place.format_coordinates(),
            "Invalid coordinates, no sunrise or sunset"
        );
        return (None, None);
    };

    let solar_day = SolarDay::new(coordinates, day);
    let local = |event: SolarEvent| {
        solar_day
            .event_time(event)
            .map(|time| time.with_timezone(&tz).time())
    };
    (local(SolarEvent::Sunrise), local(SolarEvent::Sunset))
}
