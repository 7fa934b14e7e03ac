//! Error types and handling for the `DryRock` report engine

use thiserror::Error;

/// Main error type for the `DryRock` library
#[derive(Error, Debug)]
pub enum DryRockError {
    /// Conversion requested outside a supported unit family
    #[error("Cannot convert {name} from '{unit}' to '{target}'")]
    IncompatibleUnit {
        name: String,
        unit: String,
        target: String,
    },

    /// Two measurements with different names or units were combined
    #[error("Cannot combine '{left}' with '{right}'")]
    UnitMismatch { left: String, right: String },

    /// An aggregate was requested over zero intervals
    #[error("{operation} needs at least one interval")]
    EmptyInput { operation: String },

    /// Wind direction outside [0, 360) degrees
    #[error("Invalid wind direction: {value} degrees")]
    InvalidDirection { value: f64 },

    /// Measurement passed to an operation that cannot interpret it
    #[error("Invalid measurement: {message}")]
    InvalidMeasurement { message: String },

    /// Interval whose end does not come after its start
    #[error("Invalid interval: {message}")]
    InvalidInterval { message: String },

    /// Interval lacks a measurement an aggregate needs
    #[error("Interval has no '{name}' measurement")]
    MissingVariable { name: String },

    /// Areas, places and forecasts do not line up
    #[error("Configuration mismatch: {message}")]
    ConfigurationMismatch { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Malformed JSON report input
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

impl DryRockError {
    pub fn incompatible_unit<S: Into<String>>(name: S, unit: S, target: S) -> Self {
        Self::IncompatibleUnit {
            name: name.into(),
            unit: unit.into(),
            target: target.into(),
        }
    }

    pub fn unit_mismatch<S: Into<String>>(left: S, right: S) -> Self {
        Self::UnitMismatch {
            left: left.into(),
            right: right.into(),
        }
    }

    pub fn empty_input<S: Into<String>>(operation: S) -> Self {
        Self::EmptyInput {
            operation: operation.into(),
        }
    }

    pub fn invalid_measurement<S: Into<String>>(message: S) -> Self {
        Self::InvalidMeasurement {
            message: message.into(),
        }
    }

    pub fn invalid_interval<S: Into<String>>(message: S) -> Self {
        Self::InvalidInterval {
            message: message.into(),
        }
    }

    pub fn missing_variable<S: Into<String>>(name: S) -> Self {
        Self::MissingVariable { name: name.into() }
    }

    /// Create a new configuration mismatch error
    pub fn configuration_mismatch<S: Into<String>>(message: S) -> Self {
        Self::ConfigurationMismatch {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            DryRockError::IncompatibleUnit { name, target, .. } => {
                format!("{name} cannot be shown in {target}.")
            }
            DryRockError::UnitMismatch { .. } => {
                "Forecast data mixes incompatible units.".to_string()
            }
            DryRockError::EmptyInput { .. } => "No forecast data to summarise.".to_string(),
            DryRockError::InvalidDirection { value } => {
                format!("Forecast reports an impossible wind direction ({value}°).")
            }
            DryRockError::InvalidMeasurement { message } => format!("Invalid input: {message}"),
            DryRockError::InvalidInterval { .. } | DryRockError::MissingVariable { .. } => {
                "Forecast data is incomplete or malformed.".to_string()
            }
            DryRockError::ConfigurationMismatch { .. } => {
                "Places and forecasts do not match. Please check your area configuration."
                    .to_string()
            }
            DryRockError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            DryRockError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            DryRockError::Json { .. } => {
                "Report input is not valid JSON.".to_string()
            }
        }
    }
}
