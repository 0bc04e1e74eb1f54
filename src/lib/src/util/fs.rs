//! Wrappers around std::fs for the few files we keep on disk
//!

use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::SCHOOLDESK;
use crate::error::SchoolDeskError;

/// `$XDG_CONFIG_HOME/schooldesk` (or the platform equivalent)
pub fn schooldesk_config_dir() -> Result<PathBuf, SchoolDeskError> {
    match dirs::config_dir() {
        Some(dir) => Ok(dir.join(SCHOOLDESK)),
        None => Err(SchoolDeskError::basic_str("Could not locate a config directory")),
    }
}

pub fn read_from_path(path: &Path) -> Result<String, SchoolDeskError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(contents),
        Err(err) => {
            log::debug!("could not read {:?}: {}", path, err);
            Err(SchoolDeskError::basic_str(format!(
                "Could not read file {}: {err}",
                path.display()
            )))
        }
    }
}

pub fn write_to_path(path: &Path, contents: impl AsRef<str>) -> Result<(), SchoolDeskError> {
    match fs::write(path, contents.as_ref()) {
        Ok(_) => Ok(()),
        Err(err) => Err(SchoolDeskError::basic_str(format!(
            "Could not write file {}: {err}",
            path.display()
        ))),
    }
}
