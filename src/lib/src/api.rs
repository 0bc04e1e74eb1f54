//! # API - typed access to the back office REST API
//!
//! [`client::ApiClient`] is the HTTP adapter, the modules under
//! [`client`] are the per resource clients built on top of it.
//!

pub mod client;
pub mod endpoint;
