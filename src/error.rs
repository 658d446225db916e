//! Error types for Calorie Compass.

use crate::texts::MessageKey;

/// Top-level error type for the bot.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Channel error: {0}")]
    Channel(#[from] ChannelError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Transport-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("Channel {name} failed to start: {reason}")]
    StartupFailed { name: String, reason: String },

    #[error("Failed to send response on channel {name}: {reason}")]
    SendFailed { name: String, reason: String },

    #[error("Invalid message format: {0}")]
    InvalidMessage(String),
}

/// The profile field a raw answer was being validated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Age,
    Gender,
    Height,
    Weight,
    Activity,
    Goal,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Age => "age",
            Self::Gender => "gender",
            Self::Height => "height",
            Self::Weight => "weight",
            Self::Activity => "activity level",
            Self::Goal => "weekly goal",
        };
        write!(f, "{s}")
    }
}

/// Why a validator rejected a raw answer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} does not parse as a number")]
    Parse { field: Field },

    #[error("{field} value {value} is out of range")]
    Range { field: Field, value: f64 },

    #[error("input matches no {field} option")]
    ChoiceMismatch { field: Field },
}

impl ValidationError {
    /// The field the rejected answer was meant for.
    pub fn field(&self) -> Field {
        match self {
            Self::Parse { field } | Self::Range { field, .. } | Self::ChoiceMismatch { field } => {
                *field
            }
        }
    }

    /// The user-facing error message for the rejected field.
    pub fn message_key(&self) -> MessageKey {
        match self.field() {
            Field::Age => MessageKey::AgeError,
            Field::Gender => MessageKey::GenderError,
            Field::Height => MessageKey::HeightError,
            Field::Weight => MessageKey::WeightError,
            Field::Activity => MessageKey::ActivityError,
            Field::Goal => MessageKey::GoalError,
        }
    }
}

/// Result type alias for the bot.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_maps_to_field_message() {
        let e = ValidationError::Parse { field: Field::Age };
        assert_eq!(e.field(), Field::Age);
        assert_eq!(e.message_key(), MessageKey::AgeError);

        let e = ValidationError::Range {
            field: Field::Weight,
            value: 500.0,
        };
        assert_eq!(e.message_key(), MessageKey::WeightError);

        let e = ValidationError::ChoiceMismatch {
            field: Field::Activity,
        };
        assert_eq!(e.message_key(), MessageKey::ActivityError);
    }

    #[test]
    fn errors_display_the_field() {
        let e = ValidationError::Parse { field: Field::Goal };
        assert!(e.to_string().contains("weekly goal"));
    }
}
