// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
}

/// Failures while talking to the listing endpoint or downloading an image.
///
/// The carousel only ever shows these as a single message string; the
/// variants exist so the log and the tests can tell them apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The configured base URL could not be turned into a request URL.
    InvalidUrl(String),

    /// Connection, DNS, TLS or timeout failure before a response arrived.
    Network(String),

    /// The server answered with a non-2xx status.
    Status { code: u16, reason: String },

    /// The response body could not be read.
    Body(String),

    /// The body was not a JSON array of `{ id, download_url }` objects.
    Parse(String),
}

impl FetchError {
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_builder() {
            FetchError::InvalidUrl(err.to_string())
        } else if err.is_body() || err.is_decode() {
            FetchError::Body(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
            FetchError::Network(msg) => write!(f, "Network error: {}", msg),
            FetchError::Status { code, reason } if reason.is_empty() => {
                write!(f, "HTTP status: {}", code)
            }
            FetchError::Status { code, reason } => write!(f, "HTTP status: {} {}", code, reason),
            FetchError::Body(msg) => write!(f, "Failed to read response: {}", msg),
            FetchError::Parse(msg) => write!(f, "Unexpected response: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

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

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
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
    fn status_error_includes_code_and_reason() {
        let err = FetchError::Status {
            code: 404,
            reason: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP status: 404 Not Found");
    }

    #[test]
    fn status_error_without_reason_shows_code_only() {
        let err = FetchError::Status {
            code: 599,
            reason: String::new(),
        };
        assert_eq!(err.to_string(), "HTTP status: 599");
    }

    #[test]
    fn json_error_becomes_parse_variant() {
        let json_err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let err: FetchError = json_err.into();
        assert!(matches!(err, FetchError::Parse(_)));
        assert!(err.to_string().starts_with("Unexpected response: "));
    }

    #[test]
    fn toml_error_becomes_config_variant() {
        let toml_err = toml::from_str::<toml::Value>("a = = b").unwrap_err();
        let err: Error = toml_err.into();
        assert!(matches!(err, Error::Config(_)));
    }
}
