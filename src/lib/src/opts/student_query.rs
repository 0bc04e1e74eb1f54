use serde::{Deserialize, Serialize};

use crate::opts::{ListQuery, PaginateOpts};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct StudentQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl StudentQuery {
    pub fn active() -> StudentQuery {
        StudentQuery {
            is_active: Some(true),
            ..Default::default()
        }
    }

    pub fn for_school(school_id: impl AsRef<str>) -> StudentQuery {
        StudentQuery {
            school_id: Some(school_id.as_ref().to_string()),
            ..Default::default()
        }
    }
}

impl ListQuery for StudentQuery {
    fn with_pagination(self, opts: PaginateOpts) -> Self {
        StudentQuery {
            page: Some(opts.page),
            size: Some(opts.size),
            ..self
        }
    }
}
