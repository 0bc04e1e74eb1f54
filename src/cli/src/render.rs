//! Tables for the terminal
//!

use colored::Colorize;
use comfy_table::Table;

use libschooldesk::model::{DashboardSummary, Invoice, InvoiceStatus, School, Student, User};
use libschooldesk::opts::PaginateOpts;
use libschooldesk::view::Pagination;

fn yes_no(value: bool) -> String {
    if value {
        String::from("yes")
    } else {
        String::from("no")
    }
}

pub fn schools_table(schools: &[School]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["id", "name", "city", "state", "principal", "active"]);
    for school in schools {
        table.add_row(vec![
            school.id.to_owned(),
            school.name.to_owned(),
            school.city.to_owned(),
            school.state.to_owned(),
            school.principal.clone().unwrap_or_default(),
            yes_no(school.is_active),
        ]);
    }
    table
}

pub fn students_table(students: &[Student]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["id", "name", "grade", "school", "born", "active"]);
    for student in students {
        let school = match &student.school {
            Some(school) => school.name.to_owned(),
            None => student.school_id.to_owned(),
        };
        table.add_row(vec![
            student.id.to_owned(),
            student.full_name(),
            student.grade_level.clone().unwrap_or_default(),
            school,
            student
                .date_of_birth
                .map(|d| d.to_string())
                .unwrap_or_default(),
            yes_no(student.is_active),
        ]);
    }
    table
}

pub fn invoices_table(invoices: &[Invoice]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["id", "number", "school", "amount", "due", "status"]);
    for invoice in invoices {
        let school = match &invoice.school {
            Some(school) => school.name.to_owned(),
            None => invoice.school_id.to_owned(),
        };
        table.add_row(vec![
            invoice.id.to_owned(),
            invoice.invoice_number.to_owned(),
            school,
            format!("{:.2}", invoice.amount),
            invoice.due_date.map(|d| d.to_string()).unwrap_or_default(),
            status_label(invoice.status),
        ]);
    }
    table
}

fn status_label(status: InvoiceStatus) -> String {
    match status {
        InvoiceStatus::Paid => status.as_str().green().to_string(),
        InvoiceStatus::Overdue => status.as_str().red().to_string(),
        InvoiceStatus::Pending => status.as_str().yellow().to_string(),
        InvoiceStatus::Cancelled => status.as_str().dimmed().to_string(),
    }
}

pub fn users_table(users: &[User]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["id", "username", "name", "email", "admin", "active"]);
    for user in users {
        table.add_row(vec![
            user.id.to_owned(),
            user.username.clone().unwrap_or_default(),
            user.name.clone().unwrap_or_default(),
            user.email.to_owned(),
            yes_no(user.is_superuser),
            yes_no(user.is_active),
        ]);
    }
    table
}

pub fn summary_table(summary: &DashboardSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["metric", "value"]);
    table.add_row(vec![String::from("schools"), summary.total_schools.to_string()]);
    table.add_row(vec![String::from("active schools"), summary.active_schools.to_string()]);
    table.add_row(vec![String::from("students"), summary.total_students.to_string()]);
    table.add_row(vec![String::from("active students"), summary.active_students.to_string()]);
    table.add_row(vec![String::from("invoices"), summary.total_invoices.to_string()]);
    table.add_row(vec![String::from("pending invoices"), summary.pending_invoices.to_string()]);
    table.add_row(vec![String::from("revenue"), format!("{:.2}", summary.total_revenue)]);
    table
}

/// `page 2 of 5 (47 total)`, with hints for the neighbouring pages
pub fn pagination_line(pagination: &Pagination) -> String {
    if pagination.total == 0 {
        return String::from("no results");
    }
    let mut line = format!(
        "page {} of {} ({} total)",
        pagination.page, pagination.pages, pagination.total
    );
    let opts = PaginateOpts::new(pagination.page, pagination.size);
    if pagination.has_previous {
        line.push_str(&format!(", previous: --page {}", opts.previous().page));
    }
    if pagination.has_next {
        line.push_str(&format!(", next: --page {}", opts.next().page));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_line() {
        let middle = Pagination {
            total: 47,
            page: 2,
            size: 10,
            pages: 5,
            has_next: true,
            has_previous: true,
        };
        assert_eq!(
            pagination_line(&middle),
            "page 2 of 5 (47 total), previous: --page 1, next: --page 3"
        );

        let empty = Pagination {
            total: 0,
            page: 1,
            size: 10,
            pages: 0,
            has_next: false,
            has_previous: false,
        };
        assert_eq!(pagination_line(&empty), "no results");
    }
}
