//! Error types and handling for the `TripCraft` application

use thiserror::Error;

/// Main error type for the `TripCraft` application
#[derive(Error, Debug)]
pub enum TripCraftError {
    /// Price or fee text that could not be parsed
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Dataset loading errors
    #[error("Dataset error: {message}")]
    Dataset { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl TripCraftError {
    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new dataset error
    pub fn dataset<S: Into<String>>(message: S) -> Self {
        Self::Dataset {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TripCraftError::Parse { message } => {
                format!("Some of the travel data could not be read: {message}")
            }
            TripCraftError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            TripCraftError::Dataset { .. } => {
                "Unable to load the travel datasets. Please check the data directory.".to_string()
            }
            TripCraftError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            TripCraftError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            TripCraftError::General { message } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let parse_err = TripCraftError::parse("bad price text");
        assert!(matches!(parse_err, TripCraftError::Parse { .. }));

        let dataset_err = TripCraftError::dataset("missing column");
        assert!(matches!(dataset_err, TripCraftError::Dataset { .. }));

        let validation_err = TripCraftError::validation("duration out of range");
        assert!(matches!(validation_err, TripCraftError::Validation { .. }));
    }

    #[test]
    fn test_user_messages() {
        let parse_err = TripCraftError::parse("not a price: 'fifty'");
        assert!(parse_err.user_message().contains("could not be read"));

        let dataset_err = TripCraftError::dataset("test");
        assert!(dataset_err.user_message().contains("datasets"));

        let validation_err = TripCraftError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let trip_err: TripCraftError = io_err.into();
        assert!(matches!(trip_err, TripCraftError::Io { .. }));
    }
}
