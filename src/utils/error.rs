use crate::domain::model::Direction;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoverError {
    #[error("The initial rover position is out of bounds.")]
    InitialPositionOutOfBounds { x: i64, y: i64 },

    /// `x`/`y` is where the rover stopped, facing `direction`.
    #[error("Rover is trying to move out of plateau bounds")]
    MoveOutOfBounds { x: i64, y: i64, direction: Direction },

    #[error("Invalid command: {command}")]
    InvalidCommand { command: char },

    #[error("Parse error on line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Mission,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl RoverError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RoverError::ParseError { .. } => ErrorCategory::Input,
            RoverError::InitialPositionOutOfBounds { .. }
            | RoverError::MoveOutOfBounds { .. }
            | RoverError::InvalidCommand { .. } => ErrorCategory::Mission,
            RoverError::ConfigError { .. } | RoverError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            RoverError::IoError(_) | RoverError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Mission | ErrorCategory::Configuration => {
                ErrorSeverity::High
            }
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn is_out_of_bounds(&self) -> bool {
        matches!(
            self,
            RoverError::InitialPositionOutOfBounds { .. } | RoverError::MoveOutOfBounds { .. }
        )
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RoverError::InitialPositionOutOfBounds { .. } => {
                "Place the rover inside the plateau (0..=width, 0..=height)"
            }
            RoverError::MoveOutOfBounds { .. } => {
                "Check the command sequence; the rover would drive off the plateau"
            }
            RoverError::InvalidCommand { .. } => "Commands may only contain L, R and M",
            RoverError::ParseError { .. } => {
                "Expected '<width> <height>' followed by '<x> <y> <N|E|S|W>' and command lines"
            }
            RoverError::IoError(_) => "Check that the input file exists and is readable",
            RoverError::SerializationError(_) => "Try the text output format instead",
            RoverError::ConfigError { .. } | RoverError::InvalidConfigValueError { .. } => {
                "Review the configuration file and command line flags"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RoverError::InitialPositionOutOfBounds { x, y } => {
                format!("Rover cannot be deployed at ({}, {}): outside the plateau", x, y)
            }
            RoverError::MoveOutOfBounds { x, y, direction } => format!(
                "Rover stopped at ({}, {}): moving {} would leave the plateau",
                x, y, direction
            ),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RoverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RoverError::InitialPositionOutOfBounds { x: 6, y: 5 };
        assert_eq!(err.to_string(), "The initial rover position is out of bounds.");

        let err = RoverError::InvalidCommand { command: 'X' };
        assert_eq!(err.to_string(), "Invalid command: X");

        let err = RoverError::MoveOutOfBounds {
            x: -1,
            y: 0,
            direction: Direction::West,
        };
        assert_eq!(err.to_string(), "Rover is trying to move out of plateau bounds");
        assert!(err.user_friendly_message().contains("(-1, 0)"));
    }

    #[test]
    fn test_error_classification() {
        let err = RoverError::ParseError {
            line: 2,
            message: "bad".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(!err.is_out_of_bounds());

        let err = RoverError::IoError(std::io::Error::other("disk"));
        assert_eq!(err.severity(), ErrorSeverity::Critical);

        assert!(RoverError::InitialPositionOutOfBounds { x: 0, y: -1 }.is_out_of_bounds());
    }
}
