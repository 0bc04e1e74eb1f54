//! # Session - where the API tokens live
//!
//! The client never looks tokens up globally. A [`SessionStore`] is handed to
//! [`ApiClient`](crate::api::client::ApiClient) when it is built and the
//! client only ever asks it for the current bearer token, stores a fresh pair
//! after login, or clears it.
//!

use serde::{Deserialize, Serialize};

use crate::error::SchoolDeskError;

pub mod file_session;
pub mod memory_session;

pub use crate::session::file_session::FileSession;
pub use crate::session::memory_session::MemorySession;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SessionTokens {
    pub access_token: String,
    pub refresh_token: String,
}

impl SessionTokens {
    pub fn new(access_token: impl AsRef<str>, refresh_token: impl AsRef<str>) -> SessionTokens {
        SessionTokens {
            access_token: access_token.as_ref().to_string(),
            refresh_token: refresh_token.as_ref().to_string(),
        }
    }
}

pub trait SessionStore: Send + Sync {
    /// Current bearer token, if any
    fn token(&self) -> Option<String>;

    fn refresh_token(&self) -> Option<String>;

    fn set_tokens(&self, access_token: &str, refresh_token: &str) -> Result<(), SchoolDeskError>;

    fn clear_tokens(&self) -> Result<(), SchoolDeskError>;

    fn has_session(&self) -> bool {
        self.token().is_some()
    }

    /// Called by the client when the API answered 401. Stores that keep
    /// tokens around after a rejection can override this.
    fn on_unauthorized(&self) {
        log::debug!("session rejected by the API, clearing tokens");
        if let Err(err) = self.clear_tokens() {
            log::warn!("could not clear session tokens: {err}");
        }
    }
}
