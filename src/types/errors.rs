//! Error types for recordwatch.

use thiserror::Error;

/// Default result type for recordwatch.
pub type RecordwatchResult<T> = Result<T, RecordwatchError>;

/// Errors raised by the ambient layers (config, sources, terminal, scripts).
///
/// The record cache and the ignore gate never fail.
#[derive(Error, Debug)]
pub enum RecordwatchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("Title source '{0}' failed: {1}")]
    TitleSource(String, String),

    #[error("Menu error: {0}")]
    Menu(String),

    #[error("Script error at line {line}: {message}")]
    Script { line: usize, message: String },
}

impl RecordwatchError {
    /// Creates a configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a script error for the given 1-based line.
    pub fn script<S: Into<String>>(line: usize, msg: S) -> Self {
        Self::Script {
            line,
            message: msg.into(),
        }
    }
}

#[cfg(feature = "cli")]
impl From<dialoguer::Error> for RecordwatchError {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(e) => Self::Io(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_error_message() {
        let err = RecordwatchError::script(3, "unknown command 'fly'");
        assert_eq!(err.to_string(), "Script error at line 3: unknown command 'fly'");
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_dialoguer_error_becomes_io() {
        let io = std::io::Error::new(std::io::ErrorKind::Interrupted, "read interrupted");
        let err = RecordwatchError::from(dialoguer::Error::IO(io));

        match err {
            RecordwatchError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::Interrupted),
            other => panic!("unexpected error: {other}"),
        }
    }
}
