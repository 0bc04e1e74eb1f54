//! Various utility functions
//!

pub mod fs;
pub mod logging;
pub mod paginate;
pub mod serde_text;
