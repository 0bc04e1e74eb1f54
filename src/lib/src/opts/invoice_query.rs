use serde::{Deserialize, Serialize};

use crate::model::InvoiceStatus;
use crate::opts::{ListQuery, PaginateOpts};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct InvoiceQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InvoiceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_max: Option<f64>,
}

impl InvoiceQuery {
    pub fn with_status(status: InvoiceStatus) -> InvoiceQuery {
        InvoiceQuery {
            status: Some(status),
            ..Default::default()
        }
    }
}

impl ListQuery for InvoiceQuery {
    fn with_pagination(self, opts: PaginateOpts) -> Self {
        InvoiceQuery {
            page: Some(opts.page),
            size: Some(opts.size),
            ..self
        }
    }
}
