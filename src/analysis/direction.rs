//! Compass names for wind directions

use crate::error::DryRockError;
use crate::models::Measurement;
use crate::units::{DEGREES, WIND_FROM_DIRECTION};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The eight principal compass points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardinalDirection {
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
}

impl CardinalDirection {
    /// Clockwise from North, each centred 45 degrees after the previous one
    const CLOCKWISE: [CardinalDirection; 8] = [
        CardinalDirection::North,
        CardinalDirection::Northeast,
        CardinalDirection::East,
        CardinalDirection::Southeast,
        CardinalDirection::South,
        CardinalDirection::Southwest,
        CardinalDirection::West,
        CardinalDirection::Northwest,
    ];

    /// Compass point for a bearing in `[0, 360)`
    ///
    /// Each point owns `[centre - 22.5, centre + 22.5)`; North wraps the seam
    /// as `[337.5, 360) ∪ [0, 22.5)`.
    pub fn from_degrees(degrees: f64) -> Result<Self> {
        if !(0.0..360.0).contains(&degrees) {
            return Err(DryRockError::InvalidDirection { value: degrees });
        }

        let sector = ((degrees + 22.5) / 45.0).floor() as usize % 8;
        Ok(Self::CLOCKWISE[sector])
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CardinalDirection::North => "North",
            CardinalDirection::Northeast => "Northeast",
            CardinalDirection::East => "East",
            CardinalDirection::Southeast => "Southeast",
            CardinalDirection::South => "South",
            CardinalDirection::Southwest => "Southwest",
            CardinalDirection::West => "West",
            CardinalDirection::Northwest => "Northwest",
        }
    }
}

impl fmt::Display for CardinalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Compass point a `wind_from_direction` measurement in degrees points at
pub fn cardinal_name_of(direction: &Measurement) -> Result<CardinalDirection> {
    if direction.name() != WIND_FROM_DIRECTION || direction.unit() != DEGREES {
        return Err(DryRockError::invalid_measurement(format!(
            "expected {WIND_FROM_DIRECTION} in {DEGREES}, got {direction}"
        )));
    }
    CardinalDirection::from_degrees(direction.value())
}
