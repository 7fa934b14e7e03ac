//! Day selection, daypart windows and clock-time spans
//!
//! Report days and dayparts are local to an area's time zone, while forecast
//! intervals are stamped in UTC. Windows are built from local wall-clock
//! times and then converted to UTC instants for querying.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whole hours from `start` to `end`, each rounded to the nearest hour
///
/// Thirty minutes or more rounds up. When `end` is earlier on the clock than
/// `start` it is taken to fall on the next day, so the span only runs forward:
/// `(23:00, 05:00)` is six hours and `(00:00, 23:59)` is twenty-four.
#[must_use]
pub fn get_time_delta(start: NaiveTime, end: NaiveTime) -> Duration {
    let rounded = |time: NaiveTime| i64::from(time.hour()) + i64::from(time.minute() >= 30);

    let start_hour = rounded(start);
    let mut end_hour = rounded(end);
    if end < start {
        end_hour += 24;
    }
    Duration::hours(end_hour - start_hour)
}

/// Calendar date `now` falls on in `tz`
#[must_use]
pub fn today_in(tz: Tz, now: DateTime<Utc>) -> NaiveDate {
    now.with_timezone(&tz).date_naive()
}

/// `count` consecutive dates starting at `first`
#[must_use]
pub fn report_days(first: NaiveDate, count: u32) -> Vec<NaiveDate> {
    first.iter_days().take(count as usize).collect()
}

/// UTC instant of a local wall-clock time
///
/// Ambiguous times (clocks going back) resolve to the earlier instant. Times
/// skipped by a spring-forward gap resolve to the first valid instant after
/// the gap.
#[must_use]
pub fn local_to_utc(tz: Tz, day: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
    let local = day.and_time(time);
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        LocalResult::None => {
            // Gaps are at most an hour in IANA data; step past in whole minutes
            let mut probe = local;
            loop {
                probe += Duration::minutes(1);
                if let Some(dt) = tz.from_local_datetime(&probe).earliest() {
                    return dt.with_timezone(&Utc);
                }
            }
        }
    }
}

/// Fixed local-time windows used for sub-day rain totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Daypart {
    Morning,
    Afternoon,
    Evening,
}

impl Daypart {
    pub const ALL: [Daypart; 3] = [Daypart::Morning, Daypart::Afternoon, Daypart::Evening];

    /// Local clock bounds `(start, end)` of this daypart; intervals are
    /// selected when they start in `[start, end)`
    #[must_use]
    pub fn window(self) -> (NaiveTime, NaiveTime) {
        let (start, end) = match self {
            Daypart::Morning => ((6, 0), (11, 59)),
            Daypart::Afternoon => ((12, 0), (17, 59)),
            Daypart::Evening => ((18, 0), (23, 59)),
        };
        (clock(start.0, start.1), clock(end.0, end.1))
    }

    /// UTC bounds of this daypart on `day` in `tz`
    #[must_use]
    pub fn bounds(self, day: NaiveDate, tz: Tz) -> (DateTime<Utc>, DateTime<Utc>) {
        let (start, end) = self.window();
        (local_to_utc(tz, day, start), local_to_utc(tz, day, end))
    }

    /// Length of the window in rounded whole hours
    #[must_use]
    pub fn hours(self) -> u32 {
        let (start, end) = self.window();
        u32::try_from(get_time_delta(start, end).num_hours()).unwrap_or(0)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Daypart::Morning => "morning",
            Daypart::Afternoon => "afternoon",
            Daypart::Evening => "evening",
        }
    }
}

impl fmt::Display for Daypart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Local clock span of a whole report day
#[must_use]
pub fn whole_day() -> (NaiveTime, NaiveTime) {
    (clock(0, 0), clock(23, 59))
}

fn clock(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}
