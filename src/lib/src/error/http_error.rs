//! # HttpError
//!
//! A non-2xx answer from the API, with the message the server sent back
//! (or a generic one derived from the status code).
//!

use std::fmt;

/// How an HTTP failure should be treated by callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpErrorKind {
    Unauthorized,
    NotFound,
    Validation,
    Server,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    pub status: u16,
    pub message: String,
}

impl HttpError {
    pub fn new(status: u16, message: impl AsRef<str>) -> HttpError {
        HttpError {
            status,
            message: message.as_ref().to_string(),
        }
    }

    /// Used when the response body did not carry a usable message
    pub fn from_status(status: reqwest::StatusCode) -> HttpError {
        let message = match status.canonical_reason() {
            Some(reason) => format!("Request failed with status {} ({reason})", status.as_u16()),
            None => format!("Request failed with status {}", status.as_u16()),
        };
        HttpError::new(status.as_u16(), message)
    }

    pub fn kind(&self) -> HttpErrorKind {
        match self.status {
            401 => HttpErrorKind::Unauthorized,
            404 => HttpErrorKind::NotFound,
            400..=499 => HttpErrorKind::Validation,
            500..=599 => HttpErrorKind::Server,
            _ => HttpErrorKind::Other,
        }
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for HttpError {}
