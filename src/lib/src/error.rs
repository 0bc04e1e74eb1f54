//! Errors for the schooldesk library
//!
//! Enumeration for all errors that can occur while talking to the back office API
//!

use derive_more::{Display, Error};
use std::fmt::Debug;
use std::io;

pub mod http_error;
pub mod string_error;

pub use crate::error::http_error::{HttpError, HttpErrorKind};
pub use crate::error::string_error::StringError;

pub const NETWORK_ERROR: &str = "network error";

pub const REQUEST_TIMEOUT: &str = "request timed out";

pub const SESSION_NOT_FOUND: &str =
    "not logged in, start a session with:\n\n  schooldesk login <USERNAME>\n";

/// Coarse classification used by callers deciding how to react to a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Timeout,
    Unauthorized,
    NotFound,
    Validation,
    Server,
    InvalidInput,
    Other,
}

#[derive(Debug, Display, Error)]
pub enum SchoolDeskError {
    // Transport
    Network(StringError),
    Timeout(StringError),
    Http(HttpError),

    // Client boundary
    InvalidInput(StringError),
    SessionNotFound(StringError),

    // External Library Errors
    IO(io::Error),
    JSON(serde_json::Error),
    URL(url::ParseError),
    QueryEncoding(serde_url_params::Error),
    TomlSer(toml::ser::Error),
    TomlDe(toml::de::Error),
    Client(reqwest::Error),

    // Fallback
    Basic(StringError),
}

impl SchoolDeskError {
    pub fn basic_str(s: impl AsRef<str>) -> Self {
        SchoolDeskError::Basic(StringError::from(s.as_ref()))
    }

    pub fn network() -> Self {
        SchoolDeskError::Network(StringError::from(NETWORK_ERROR))
    }

    pub fn timeout() -> Self {
        SchoolDeskError::Timeout(StringError::from(REQUEST_TIMEOUT))
    }

    pub fn http(status: u16, message: impl AsRef<str>) -> Self {
        SchoolDeskError::Http(HttpError::new(status, message))
    }

    pub fn not_found(message: impl AsRef<str>) -> Self {
        SchoolDeskError::http(404, message)
    }

    pub fn unauthorized(message: impl AsRef<str>) -> Self {
        SchoolDeskError::http(401, message)
    }

    pub fn invalid_input(message: impl AsRef<str>) -> Self {
        SchoolDeskError::InvalidInput(StringError::from(message.as_ref()))
    }

    pub fn session_not_found() -> Self {
        SchoolDeskError::SessionNotFound(StringError::from(SESSION_NOT_FOUND))
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SchoolDeskError::Network(_) => ErrorKind::Network,
            SchoolDeskError::Timeout(_) => ErrorKind::Timeout,
            SchoolDeskError::Http(err) => match err.kind() {
                HttpErrorKind::Unauthorized => ErrorKind::Unauthorized,
                HttpErrorKind::NotFound => ErrorKind::NotFound,
                HttpErrorKind::Validation => ErrorKind::Validation,
                HttpErrorKind::Server => ErrorKind::Server,
                HttpErrorKind::Other => ErrorKind::Other,
            },
            SchoolDeskError::InvalidInput(_) => ErrorKind::InvalidInput,
            SchoolDeskError::SessionNotFound(_) => ErrorKind::Unauthorized,
            _ => ErrorKind::Other,
        }
    }

    /// HTTP status of the failed call, `None` when no response was received
    pub fn status(&self) -> Option<u16> {
        match self {
            SchoolDeskError::Http(err) => Some(err.status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind() == ErrorKind::Unauthorized
    }
}

impl From<io::Error> for SchoolDeskError {
    fn from(error: io::Error) -> Self {
        SchoolDeskError::IO(error)
    }
}

impl From<String> for SchoolDeskError {
    fn from(error: String) -> Self {
        SchoolDeskError::Basic(StringError::from(error))
    }
}

impl From<HttpError> for SchoolDeskError {
    fn from(error: HttpError) -> Self {
        SchoolDeskError::Http(error)
    }
}

impl From<serde_json::Error> for SchoolDeskError {
    fn from(error: serde_json::Error) -> Self {
        SchoolDeskError::JSON(error)
    }
}

impl From<url::ParseError> for SchoolDeskError {
    fn from(error: url::ParseError) -> Self {
        SchoolDeskError::URL(error)
    }
}

impl From<serde_url_params::Error> for SchoolDeskError {
    fn from(error: serde_url_params::Error) -> Self {
        SchoolDeskError::QueryEncoding(error)
    }
}

impl From<toml::ser::Error> for SchoolDeskError {
    fn from(error: toml::ser::Error) -> Self {
        SchoolDeskError::TomlSer(error)
    }
}

impl From<toml::de::Error> for SchoolDeskError {
    fn from(error: toml::de::Error) -> Self {
        SchoolDeskError::TomlDe(error)
    }
}

// A reqwest error that reaches us without a response is a transport failure
impl From<reqwest::Error> for SchoolDeskError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            log::debug!("request timed out: {error:?}");
            SchoolDeskError::timeout()
        } else if error.is_builder() {
            SchoolDeskError::Client(error)
        } else if let Some(status) = error.status() {
            SchoolDeskError::Http(HttpError::from_status(status))
        } else {
            log::debug!("no response received: {error:?}");
            SchoolDeskError::network()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_has_no_status() {
        let err = SchoolDeskError::network();
        assert_eq!(err.kind(), ErrorKind::Network);
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "network error");
    }

    #[test]
    fn test_http_error_displays_server_message() {
        let err = SchoolDeskError::http(422, "School name already taken");
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.status(), Some(422));
        assert_eq!(err.to_string(), "School name already taken");
    }

    #[test]
    fn test_not_found_and_unauthorized_helpers() {
        assert!(SchoolDeskError::not_found("Invoice not found").is_not_found());
        assert!(SchoolDeskError::unauthorized("expired").is_unauthorized());
        assert!(!SchoolDeskError::timeout().is_not_found());
        assert_eq!(SchoolDeskError::timeout().kind(), ErrorKind::Timeout);
    }
}
