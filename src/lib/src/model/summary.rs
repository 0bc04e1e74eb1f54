use serde::{Deserialize, Serialize};

/// Dashboard counts assembled from several independent list calls.
///
/// The numbers are a point-in-time snapshot with no cross-request
/// consistency, they are meant for display only.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct DashboardSummary {
    pub total_schools: usize,
    pub active_schools: usize,
    pub total_students: usize,
    pub active_students: usize,
    pub total_invoices: usize,
    pub pending_invoices: usize,
    pub total_revenue: f64,
}
