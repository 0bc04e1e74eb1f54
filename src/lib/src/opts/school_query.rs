use serde::{Deserialize, Serialize};

use crate::opts::{ListQuery, PaginateOpts};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SchoolQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl SchoolQuery {
    pub fn active() -> SchoolQuery {
        SchoolQuery {
            is_active: Some(true),
            ..Default::default()
        }
    }
}

impl ListQuery for SchoolQuery {
    fn with_pagination(self, opts: PaginateOpts) -> Self {
        SchoolQuery {
            page: Some(opts.page),
            size: Some(opts.size),
            ..self
        }
    }
}
