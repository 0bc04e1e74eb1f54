//! 🏫 libschooldesk
//!
//! Typed client for the school back office API: schools, students, invoices
//! and users, with paginated list controllers and a dashboard summary.
//!
//! # Examples
//!
//! Logging in and listing the first page of pending invoices:
//!
//! ```no_run
//! use std::sync::Arc;
//! use libschooldesk::api;
//! use libschooldesk::config::ClientConfig;
//! use libschooldesk::model::InvoiceStatus;
//! use libschooldesk::opts::{InvoiceQuery, ListQuery, PaginateOpts};
//! use libschooldesk::session::MemorySession;
//! use libschooldesk::view::LoginRequest;
//!
//! # async fn run() -> Result<(), libschooldesk::error::SchoolDeskError> {
//! let config = ClientConfig::get()?;
//! let client = api::client::ApiClient::new(&config, Arc::new(MemorySession::new()))?;
//! api::client::auth::login(&client, &LoginRequest::new("admin", "secret")).await?;
//!
//! let query = InvoiceQuery::with_status(InvoiceStatus::Pending)
//!     .with_pagination(PaginateOpts::new(1, 10));
//! let page = api::client::invoices::list(&client, &query).await?;
//! println!("{} pending invoices over {} pages", page.total, page.pages);
//! # Ok(())
//! # }
//! ```
//!
//! Keeping a list in sync while creating records:
//!
//! ```no_run
//! use libschooldesk::api::client::schools::Schools;
//! use libschooldesk::api::client::{ApiClient, ResourceClient};
//! use libschooldesk::controller::CollectionController;
//! use libschooldesk::opts::SchoolQuery;
//! use libschooldesk::view::SchoolNew;
//!
//! # async fn run(client: ApiClient) -> Result<(), libschooldesk::error::SchoolDeskError> {
//! let schools = CollectionController::new(ResourceClient::<Schools>::new(client));
//! schools.set_params(SchoolQuery::active()).await;
//!
//! // Refetches the active schools once the server has the new record
//! schools.create(&SchoolNew::default()).await?;
//! println!("{:?}", schools.pagination());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod model;
pub mod opts;
pub mod session;
pub mod util;
pub mod view;
