use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::school::default_active;
use crate::model::School;
use crate::util::serde_text;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Student {
    #[serde(deserialize_with = "serde_text::deserialize")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default, deserialize_with = "serde_text::deserialize_option")]
    pub grade_level: Option<String>,
    #[serde(deserialize_with = "serde_text::deserialize")]
    pub school_id: String,
    /// Embedded only when the server chooses to include it
    #[serde(default)]
    pub school: Option<School>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name())
    }
}
