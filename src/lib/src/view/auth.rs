use serde::{Deserialize, Serialize};

use crate::error::SchoolDeskError;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(username: impl AsRef<str>, password: impl AsRef<str>) -> LoginRequest {
        LoginRequest {
            username: username.as_ref().trim().to_string(),
            password: password.as_ref().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), SchoolDeskError> {
        require_non_empty("username", &self.username)?;
        require_non_empty("password", &self.password)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct UserNew {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl UserNew {
    pub fn validate(&self) -> Result<(), SchoolDeskError> {
        require_non_empty("username", &self.username)?;
        require_email("email", &self.email)?;
        require_non_empty("password", &self.password)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: u64,
}

fn default_token_type() -> String {
    String::from("bearer")
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct TokenRefresh {
    pub refresh_token: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl ProfileUpdate {
    pub fn validate(&self) -> Result<(), SchoolDeskError> {
        match &self.email {
            Some(email) => require_email("email", email),
            None => Ok(()),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

impl PasswordChange {
    pub fn validate(&self) -> Result<(), SchoolDeskError> {
        require_non_empty("current_password", &self.current_password)?;
        require_non_empty("new_password", &self.new_password)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

fn require_non_empty(field: &str, value: &str) -> Result<(), SchoolDeskError> {
    if value.trim().is_empty() {
        return Err(SchoolDeskError::invalid_input(format!("{field} must not be empty")));
    }
    Ok(())
}

fn require_email(field: &str, value: &str) -> Result<(), SchoolDeskError> {
    require_non_empty(field, value)?;
    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(SchoolDeskError::invalid_input(format!(
            "{field} must be a valid email address, got '{value}'"
        ))),
    }
}
