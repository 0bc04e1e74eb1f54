use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SchoolDeskError;
use crate::model::School;
use crate::util::serde_text;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
    Overdue,
    Cancelled,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
            InvoiceStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvoiceStatus {
    type Err = SchoolDeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(InvoiceStatus::Pending),
            "paid" => Ok(InvoiceStatus::Paid),
            "overdue" => Ok(InvoiceStatus::Overdue),
            "cancelled" => Ok(InvoiceStatus::Cancelled),
            other => Err(SchoolDeskError::invalid_input(format!(
                "Unknown invoice status '{other}', expected one of pending, paid, overdue, cancelled"
            ))),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Invoice {
    #[serde(deserialize_with = "serde_text::deserialize")]
    pub id: String,
    pub invoice_number: String,
    #[serde(deserialize_with = "serde_text::deserialize")]
    pub school_id: String,
    #[serde(default)]
    pub school: Option<School>,
    pub amount: f64,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    pub status: InvoiceStatus,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Invoice {
    pub fn is_paid(&self) -> bool {
        self.status == InvoiceStatus::Paid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_str() -> Result<(), SchoolDeskError> {
        assert_eq!("PAID".parse::<InvoiceStatus>()?, InvoiceStatus::Paid);
        assert_eq!(InvoiceStatus::Overdue.to_string(), "overdue");
        assert!("refunded".parse::<InvoiceStatus>().is_err());
        Ok(())
    }

    #[test]
    fn test_invoice_with_embedded_school() -> Result<(), SchoolDeskError> {
        let invoice: Invoice = serde_json::from_str(
            r#"{
                "id": 9,
                "invoice_number": "INV-0009",
                "school_id": 2,
                "school": {"id": 2, "name": "Lincoln High", "city": "Omaha", "state": "NE", "is_active": true},
                "amount": 125.5,
                "due_date": "2024-09-01",
                "status": "overdue",
                "description": "Lab fees"
            }"#,
        )?;
        assert_eq!(invoice.id, "9");
        assert_eq!(invoice.school_id, "2");
        assert_eq!(invoice.school.as_ref().map(|s| s.name.as_str()), Some("Lincoln High"));
        assert_eq!(invoice.due_date, NaiveDate::from_ymd_opt(2024, 9, 1));
        assert!(!invoice.is_paid());
        Ok(())
    }
}
