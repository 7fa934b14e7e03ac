//! Named, unit-tagged weather readings

use crate::error::DryRockError;
use crate::units;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single weather reading such as `precipitation_amount: 0.1 mm`
///
/// Fields are private: the name never changes after construction and the only
/// way to change value and unit together is [`Measurement::convert_to`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Measurement {
    name: String,
    value: f64,
    unit: String,
}

impl Measurement {
    #[must_use]
    pub fn new(name: impl Into<String>, value: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            unit: unit.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Convert this measurement in place to `target` unit
    pub fn convert_to(&mut self, target: &str) -> Result<()> {
        self.value = units::convert_value(&self.name, &self.unit, target, self.value)?;
        self.unit = target.to_string();
        Ok(())
    }

    /// Converted copy of this measurement, leaving `self` untouched
    pub fn converted_to(&self, target: &str) -> Result<Self> {
        let mut converted = self.clone();
        converted.convert_to(target)?;
        Ok(converted)
    }

    /// Sum of two readings of the same quantity in the same unit
    pub fn checked_add(&self, other: &Measurement) -> Result<Self> {
        if self.name != other.name || self.unit != other.unit {
            return Err(DryRockError::unit_mismatch(
                format!("{} [{}]", self.name, self.unit),
                format!("{} [{}]", other.name, other.unit),
            ));
        }

        Ok(Self {
            name: self.name.clone(),
            value: self.value + other.value,
            unit: self.unit.clone(),
        })
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {}", self.name, self.value, self.unit)
    }
}
