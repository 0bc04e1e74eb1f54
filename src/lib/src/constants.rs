//! Constants used throughout the schooldesk library
//!

/// Current version of the client, sent in the user agent
pub const SCHOOLDESK_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const USER_AGENT: &str = "schooldesk";

// Config
pub const SCHOOLDESK: &str = "schooldesk";
pub const CLIENT_CONFIG_FILENAME: &str = "config.toml";
pub const SESSION_FILENAME: &str = "session.toml";
pub const API_URL_ENV: &str = "SCHOOLDESK_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// Pagination
pub const DEFAULT_PAGE_NUM: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 10;
/// The API clamps page sizes above this
pub const MAX_PAGE_SIZE: usize = 100;

// Dashboard
pub const SUMMARY_COUNT_PAGE_SIZE: usize = 1;
pub const SUMMARY_REVENUE_PAGE_SIZE: usize = 100;

// Endpoints
pub const AUTH_PATH: &str = "/auth";
pub const SCHOOLS_PATH: &str = "/schools/";
pub const STUDENTS_PATH: &str = "/students/";
pub const INVOICES_PATH: &str = "/invoices/";
