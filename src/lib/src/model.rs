//! Records exchanged with the back office API
//!

pub mod invoice;
pub mod school;
pub mod student;
pub mod summary;
pub mod user;

pub use crate::model::invoice::{Invoice, InvoiceStatus};
pub use crate::model::school::School;
pub use crate::model::student::Student;
pub use crate::model::summary::DashboardSummary;
pub use crate::model::user::User;
