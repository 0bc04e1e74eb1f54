//! Configuration for schooldesk: which API to talk to and with what timeout
//!

pub mod client_config;

pub use crate::config::client_config::ClientConfig;
pub use crate::constants::CLIENT_CONFIG_FILENAME;
