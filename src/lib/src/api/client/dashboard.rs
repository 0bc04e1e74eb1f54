//! Dashboard summary assembled from several list calls
//!
//! The counts come from the `total` of one item pages. Revenue sums the paid
//! invoices of the first page of paid invoices only. The sub-requests run
//! concurrently and are not a consistent snapshot: a write landing between
//! them can leave subtotals that do not reconcile.
//!

use crate::api::client::{invoices, schools, students, ApiClient};
use crate::constants::{DEFAULT_PAGE_NUM, SUMMARY_COUNT_PAGE_SIZE, SUMMARY_REVENUE_PAGE_SIZE};
use crate::error::SchoolDeskError;
use crate::model::{DashboardSummary, InvoiceStatus};
use crate::opts::{InvoiceQuery, ListQuery, PaginateOpts, SchoolQuery, StudentQuery};

fn count_page() -> PaginateOpts {
    PaginateOpts::new(DEFAULT_PAGE_NUM, SUMMARY_COUNT_PAGE_SIZE)
}

pub async fn summary(client: &ApiClient) -> Result<DashboardSummary, SchoolDeskError> {
    let all_schools = SchoolQuery::default().with_pagination(count_page());
    let active_schools = SchoolQuery::active().with_pagination(count_page());
    let all_students = StudentQuery::default().with_pagination(count_page());
    let active_students = StudentQuery::active().with_pagination(count_page());
    let all_invoices = InvoiceQuery::default().with_pagination(count_page());
    let pending_invoices =
        InvoiceQuery::with_status(InvoiceStatus::Pending).with_pagination(count_page());
    let paid_invoices = InvoiceQuery::with_status(InvoiceStatus::Paid)
        .with_pagination(PaginateOpts::new(DEFAULT_PAGE_NUM, SUMMARY_REVENUE_PAGE_SIZE));

    let (
        all_schools,
        active_schools,
        all_students,
        active_students,
        all_invoices,
        pending_invoices,
        paid_invoices,
    ) = tokio::try_join!(
        schools::list(client, &all_schools),
        schools::list(client, &active_schools),
        students::list(client, &all_students),
        students::list(client, &active_students),
        invoices::list(client, &all_invoices),
        invoices::list(client, &pending_invoices),
        invoices::list(client, &paid_invoices),
    )?;

    if paid_invoices.has_next {
        log::warn!(
            "revenue covers {} of {} paid invoices",
            paid_invoices.items.len(),
            paid_invoices.total
        );
    }
    let total_revenue = paid_invoices
        .items
        .iter()
        .filter(|invoice| invoice.is_paid())
        .map(|invoice| invoice.amount)
        .sum();

    Ok(DashboardSummary {
        total_schools: all_schools.total,
        active_schools: active_schools.total,
        total_students: all_students.total,
        active_students: active_students.total,
        total_invoices: all_invoices.total,
        pending_invoices: pending_invoices.total,
        total_revenue,
    })
}
