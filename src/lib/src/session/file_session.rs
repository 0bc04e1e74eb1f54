use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::SESSION_FILENAME;
use crate::error::SchoolDeskError;
use crate::session::{SessionStore, SessionTokens};
use crate::util;

#[derive(Serialize, Deserialize, Debug, Default)]
struct SessionFile {
    tokens: Option<SessionTokens>,
}

/// Persists the token pair in a TOML file so a session survives between
/// command line invocations.
#[derive(Debug)]
pub struct FileSession {
    path: PathBuf,
    tokens: RwLock<Option<SessionTokens>>,
}

impl FileSession {
    /// Opens the session file at `path`. A missing file is an empty session.
    pub fn open(path: impl AsRef<Path>) -> Result<FileSession, SchoolDeskError> {
        let path = path.as_ref().to_path_buf();
        let tokens = if path.exists() {
            log::debug!("reading session from {:?}", path);
            let contents = util::fs::read_from_path(&path)?;
            let file: SessionFile = toml::from_str(&contents)?;
            file.tokens
        } else {
            log::debug!("no session file at {:?}", path);
            None
        };
        Ok(FileSession {
            path,
            tokens: RwLock::new(tokens),
        })
    }

    pub fn open_default() -> Result<FileSession, SchoolDeskError> {
        let config_dir = util::fs::schooldesk_config_dir()?;
        FileSession::open(config_dir.join(SESSION_FILENAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self, tokens: &Option<SessionTokens>) -> Result<(), SchoolDeskError> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents = toml::to_string(&SessionFile {
            tokens: tokens.clone(),
        })?;
        util::fs::write_to_path(&self.path, contents)
    }
}

impl SessionStore for FileSession {
    fn token(&self) -> Option<String> {
        self.tokens.read().as_ref().map(|t| t.access_token.clone())
    }

    fn refresh_token(&self) -> Option<String> {
        self.tokens.read().as_ref().map(|t| t.refresh_token.clone())
    }

    fn set_tokens(&self, access_token: &str, refresh_token: &str) -> Result<(), SchoolDeskError> {
        let mut tokens = self.tokens.write();
        *tokens = Some(SessionTokens::new(access_token, refresh_token));
        self.save(&tokens)
    }

    fn clear_tokens(&self) -> Result<(), SchoolDeskError> {
        let mut tokens = self.tokens.write();
        *tokens = None;
        if self.path.exists() {
            log::debug!("removing session file {:?}", self.path);
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_survive_reopen() -> Result<(), SchoolDeskError> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nested").join(SESSION_FILENAME);

        let session = FileSession::open(&path)?;
        assert!(!session.has_session());
        session.set_tokens("access-abc", "refresh-xyz")?;

        let reopened = FileSession::open(&path)?;
        assert_eq!(reopened.token().as_deref(), Some("access-abc"));
        assert_eq!(reopened.refresh_token().as_deref(), Some("refresh-xyz"));
        Ok(())
    }

    #[test]
    fn test_clear_removes_file() -> Result<(), SchoolDeskError> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(SESSION_FILENAME);

        let session = FileSession::open(&path)?;
        session.set_tokens("a", "r")?;
        assert!(path.exists());

        session.clear_tokens()?;
        assert!(!path.exists());
        assert!(!FileSession::open(&path)?.has_session());
        Ok(())
    }
}
