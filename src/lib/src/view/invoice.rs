use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::InvoiceStatus;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct InvoiceNew {
    pub school_id: String,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub description: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct InvoiceUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<InvoiceStatus>,
}
