use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::school::default_active;
use crate::util::serde_text;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    #[serde(deserialize_with = "serde_text::deserialize")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, alias = "full_name")]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl User {
    /// Best label we have for the user, falling back from name to username to email
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.username.as_deref())
            .unwrap_or(&self.email)
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.display_name(), self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_accepts_full_name_alias() {
        let user: User = serde_json::from_str(
            r#"{"id": 1, "username": "admin", "email": "admin@school.org", "full_name": "Ada Admin", "is_active": true, "is_superuser": true}"#,
        )
        .unwrap();
        assert_eq!(user.id, "1");
        assert_eq!(user.display_name(), "Ada Admin");
        assert!(user.is_superuser);
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user: User =
            serde_json::from_str(r#"{"id": "u-1", "email": "clerk@school.org"}"#).unwrap();
        assert_eq!(user.display_name(), "clerk@school.org");
        assert!(user.is_active);
    }
}
