//! Error types for the Standup application.

use thiserror::Error;

/// A shared error type for the game, the poem generator and their I/O.
///
/// Unexpected player input is never an error: every prompt has a fallback
/// branch. These variants cover the terminal and the config file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StandupError {
    /// IO error (terminal or file system)
    #[error("IO error: {message}")]
    Io { message: String },

    /// The line editor failed for a reason other than EOF or interrupt
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Input ended while a prompt still needed an answer
    #[error("Input closed while waiting for: {prompt}")]
    InputClosed { prompt: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },
}

impl StandupError {
    /// Creates a Terminal error
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal(message.into())
    }

    /// Creates an InputClosed error for the given prompt text
    pub fn input_closed(prompt: impl Into<String>) -> Self {
        Self::InputClosed {
            prompt: prompt.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is an InputClosed error
    pub fn is_input_closed(&self) -> bool {
        matches!(self, Self::InputClosed { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for StandupError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<toml::de::Error> for StandupError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for StandupError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, StandupError>`.
pub type Result<T> = std::result::Result<T, StandupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion_keeps_kind() {
        let err: StandupError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope").into();
        assert!(matches!(err, StandupError::Io { ref message } if message.contains("PermissionDenied")));
    }

    #[test]
    fn test_toml_error_conversion() {
        let err: StandupError = toml::from_str::<toml::Value>("color = ").unwrap_err().into();
        match err {
            StandupError::Serialization { format, .. } => assert_eq!(format, "TOML"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_input_closed_display() {
        let err = StandupError::input_closed("How do you feel?: ");
        assert!(err.is_input_closed());
        assert_eq!(
            err.to_string(),
            "Input closed while waiting for: How do you feel?: "
        );
    }
}
