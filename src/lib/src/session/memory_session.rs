use parking_lot::RwLock;

use crate::error::SchoolDeskError;
use crate::session::{SessionStore, SessionTokens};

/// Keeps tokens for the lifetime of the process
#[derive(Debug, Default)]
pub struct MemorySession {
    tokens: RwLock<Option<SessionTokens>>,
}

impl MemorySession {
    pub fn new() -> MemorySession {
        MemorySession::default()
    }

    pub fn with_tokens(access_token: &str, refresh_token: &str) -> MemorySession {
        MemorySession {
            tokens: RwLock::new(Some(SessionTokens::new(access_token, refresh_token))),
        }
    }
}

impl SessionStore for MemorySession {
    fn token(&self) -> Option<String> {
        self.tokens.read().as_ref().map(|t| t.access_token.clone())
    }

    fn refresh_token(&self) -> Option<String> {
        self.tokens.read().as_ref().map(|t| t.refresh_token.clone())
    }

    fn set_tokens(&self, access_token: &str, refresh_token: &str) -> Result<(), SchoolDeskError> {
        *self.tokens.write() = Some(SessionTokens::new(access_token, refresh_token));
        Ok(())
    }

    fn clear_tokens(&self) -> Result<(), SchoolDeskError> {
        *self.tokens.write() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_clear_tokens() -> Result<(), SchoolDeskError> {
        let session = MemorySession::new();
        assert!(!session.has_session());

        session.set_tokens("access-1", "refresh-1")?;
        assert_eq!(session.token().as_deref(), Some("access-1"));
        assert_eq!(session.refresh_token().as_deref(), Some("refresh-1"));

        session.on_unauthorized();
        assert!(!session.has_session());
        assert_eq!(session.refresh_token(), None);
        Ok(())
    }
}
