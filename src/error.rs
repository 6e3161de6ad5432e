// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Storage(String),
    Clipboard(String),
    Build(BuildError),
}

/// Failures of a single build attempt.
///
/// Every variant surfaces to the user as a permanent log entry plus a
/// transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A required input was blank; no request was sent.
    Validation,

    /// The server answered with a non-success status or an `error` field.
    Remote(String),

    /// The request never produced a usable answer (network failure, timeout,
    /// malformed JSON, undecodable image).
    Transport(String),
}

impl BuildError {
    /// Message shown to the user for this failure.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            BuildError::Validation => "Parameters or dataset is empty.",
            BuildError::Remote(msg) | BuildError::Transport(msg) => msg,
        }
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::Validation => write!(f, "Validation error: {}", self.message()),
            BuildError::Remote(msg) => write!(f, "Server error: {}", msg),
            BuildError::Transport(msg) => write!(f, "Transport error: {}", msg),
        }
    }
}

impl std::error::Error for BuildError {}

impl From<reqwest::Error> for BuildError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            BuildError::Transport("request timed out".to_string())
        } else {
            BuildError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for BuildError {
    fn from(err: serde_json::Error) -> Self {
        BuildError::Transport(format!("invalid response: {}", err))
    }
}

impl From<base64::DecodeError> for BuildError {
    fn from(err: base64::DecodeError) -> Self {
        BuildError::Transport(format!("invalid visualization data: {}", err))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Storage(e) => write!(f, "Storage Error: {}", e),
            Error::Clipboard(e) => write!(f, "Clipboard Error: {}", e),
            Error::Build(e) => write!(f, "Build Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<BuildError> for Error {
    fn from(err: BuildError) -> Self {
        Error::Build(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl<T: fmt::Debug> From<ciborium::de::Error<T>> for Error {
    fn from(err: ciborium::de::Error<T>) -> Self {
        Error::Storage(err.to_string())
    }
}

impl<T: fmt::Debug> From<ciborium::ser::Error<T>> for Error {
    fn from(err: ciborium::ser::Error<T>) -> Self {
        Error::Storage(err.to_string())
    }
}

impl From<arboard::Error> for Error {
    fn from(err: arboard::Error) -> Self {
        Error::Clipboard(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn build_error_message_is_raw_server_text() {
        let err = BuildError::Remote("bad data".to_string());
        assert_eq!(err.message(), "bad data");
        assert_eq!(format!("{}", err), "Server error: bad data");
    }

    #[test]
    fn validation_error_names_the_blank_input() {
        assert_eq!(
            BuildError::Validation.message(),
            "Parameters or dataset is empty."
        );
        assert_eq!(
            format!("{}", BuildError::Validation),
            "Validation error: Parameters or dataset is empty."
        );
    }

    #[test]
    fn json_errors_become_transport_errors() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: BuildError = json_err.into();
        assert!(matches!(err, BuildError::Transport(msg) if msg.starts_with("invalid response")));
    }

    #[test]
    fn build_error_wraps_into_error() {
        let err: Error = BuildError::Transport("offline".into()).into();
        assert_eq!(format!("{}", err), "Build Error: Transport error: offline");
    }
}
