//! Unit families, the conversion table and the two display unit systems
//!
//! Every convertible measurement belongs to a family keyed by its name. A family
//! has a base unit and a fixed linear rule (`base = value * scale + offset`) for
//! each of its other units, so any pair inside a family converts through the
//! base. Names or units outside the table are not convertible.

use crate::error::DryRockError;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const PRECIPITATION_AMOUNT: &str = "precipitation_amount";
pub const AIR_TEMPERATURE: &str = "air_temperature";
pub const WIND_SPEED: &str = "wind_speed";
pub const WIND_FROM_DIRECTION: &str = "wind_from_direction";

pub const MILLIMETRES: &str = "mm";
pub const INCHES: &str = "inches";
pub const CELSIUS: &str = "celsius";
pub const FAHRENHEIT: &str = "fahrenheit";
pub const METRES_PER_SECOND: &str = "m/s";
pub const KILOMETRES_PER_HOUR: &str = "km/h";
pub const MILES_PER_HOUR: &str = "mph";
pub const DEGREES: &str = "degrees";

/// Linear rule taking a value in some unit to the family's base unit
#[derive(Debug, Clone, Copy)]
struct ToBase {
    scale: f64,
    offset: f64,
}

impl ToBase {
    const IDENTITY: ToBase = ToBase {
        scale: 1.0,
        offset: 0.0,
    };

    fn apply(self, value: f64) -> f64 {
        value * self.scale + self.offset
    }

    fn invert(self, base: f64) -> f64 {
        (base - self.offset) / self.scale
    }
}

const PRECIPITATION_UNITS: &[(&str, ToBase)] = &[
    (MILLIMETRES, ToBase::IDENTITY),
    (
        INCHES,
        ToBase {
            scale: 25.4,
            offset: 0.0,
        },
    ),
];

const TEMPERATURE_UNITS: &[(&str, ToBase)] = &[
    (CELSIUS, ToBase::IDENTITY),
    (
        FAHRENHEIT,
        ToBase {
            scale: 5.0 / 9.0,
            offset: -32.0 * 5.0 / 9.0,
        },
    ),
];

const SPEED_UNITS: &[(&str, ToBase)] = &[
    (METRES_PER_SECOND, ToBase::IDENTITY),
    (
        KILOMETRES_PER_HOUR,
        ToBase {
            scale: 1.0 / 3.6,
            offset: 0.0,
        },
    ),
    (
        MILES_PER_HOUR,
        ToBase {
            scale: 0.447_04,
            offset: 0.0,
        },
    ),
];

fn family_of(name: &str) -> Option<&'static [(&'static str, ToBase)]> {
    match name {
        PRECIPITATION_AMOUNT => Some(PRECIPITATION_UNITS),
        AIR_TEMPERATURE => Some(TEMPERATURE_UNITS),
        WIND_SPEED => Some(SPEED_UNITS),
        _ => None,
    }
}

fn rule_for(family: &[(&str, ToBase)], unit: &str) -> Option<ToBase> {
    family
        .iter()
        .find(|(candidate, _)| *candidate == unit)
        .map(|(_, rule)| *rule)
}

/// Convert `value` of the measurement `name` from `unit` to `target`
///
/// Converting to the unit a value is already in returns it untouched.
pub fn convert_value(name: &str, unit: &str, target: &str, value: f64) -> Result<f64> {
    let incompatible = || DryRockError::incompatible_unit(name, unit, target);

    let family = family_of(name).ok_or_else(incompatible)?;
    let from = rule_for(family, unit).ok_or_else(incompatible)?;
    let to = rule_for(family, target).ok_or_else(incompatible)?;

    if unit == target {
        return Ok(value);
    }
    Ok(to.invert(from.apply(value)))
}

/// Display convention applied uniformly to one rendered report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    Metric,
    Imperial,
}

impl UnitSystem {
    pub const ALL: [UnitSystem; 2] = [UnitSystem::Metric, UnitSystem::Imperial];

    #[must_use]
    pub fn precipitation_unit(self) -> &'static str {
        match self {
            UnitSystem::Metric => MILLIMETRES,
            UnitSystem::Imperial => INCHES,
        }
    }

    #[must_use]
    pub fn temperature_unit(self) -> &'static str {
        match self {
            UnitSystem::Metric => CELSIUS,
            UnitSystem::Imperial => FAHRENHEIT,
        }
    }

    #[must_use]
    pub fn wind_speed_unit(self) -> &'static str {
        match self {
            UnitSystem::Metric => KILOMETRES_PER_HOUR,
            UnitSystem::Imperial => MILES_PER_HOUR,
        }
    }

    /// Display unit for a measurement name, `None` when the name is shown as-is
    #[must_use]
    pub fn display_unit_for(self, name: &str) -> Option<&'static str> {
        match name {
            PRECIPITATION_AMOUNT => Some(self.precipitation_unit()),
            AIR_TEMPERATURE => Some(self.temperature_unit()),
            WIND_SPEED => Some(self.wind_speed_unit()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
