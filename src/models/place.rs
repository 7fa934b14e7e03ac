//! Places and the areas that group them

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// A location a forecast is requested for
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Place {
    /// Display name, also the key of the place in report contexts
    pub name: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Altitude in metres above sea level
    pub altitude: Option<f64>,
}

impl Place {
    /// Create a new place
    #[must_use]
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64, altitude: Option<f64>) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
            altitude,
        }
    }

    /// Format place as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Places sharing a display time zone and a navigation entry
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Area {
    pub name: String,
    pub time_zone: Tz,
    pub places: Vec<Place>,
}

impl Area {
    #[must_use]
    pub fn new(name: impl Into<String>, time_zone: Tz, places: Vec<Place>) -> Self {
        Self {
            name: name.into(),
            time_zone,
            places,
        }
    }
}
