//! Report input: the areas and their forecasts as one JSON document

use crate::models::{Area, Forecast};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Areas and, per area, one forecast per place in the same order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportInput {
    pub areas: Vec<Area>,
    pub forecasts: Vec<Vec<Forecast>>,
}

impl ReportInput {
    /// Read and validate a report input file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let input: ReportInput = text.parse()?;
        debug!(
            path = %path.display(),
            areas = input.areas.len(),
            "Loaded report input"
        );
        Ok(input)
    }

    fn validate(&self) -> Result<()> {
        self.forecasts
            .iter()
            .flatten()
            .flat_map(|forecast| &forecast.intervals)
            .try_for_each(|interval| interval.validate())
    }
}

impl FromStr for ReportInput {
    type Err = crate::DryRockError;

    fn from_str(s: &str) -> Result<Self> {
        let input: ReportInput = serde_json::from_str(s)?;
        input.validate()?;
        Ok(input)
    }
}
