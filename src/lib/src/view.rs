//! Request and response bodies of the back office API
//!

pub mod auth;
pub mod error_response;
pub mod invoice;
pub mod page;
pub mod pagination;
pub mod school;
pub mod student;

pub use crate::view::auth::{
    LoginRequest, MessageResponse, PasswordChange, ProfileUpdate, TokenRefresh, TokenResponse,
    UserNew,
};
pub use crate::view::error_response::ErrorResponse;
pub use crate::view::invoice::{InvoiceNew, InvoiceUpdate};
pub use crate::view::page::Page;
pub use crate::view::pagination::Pagination;
pub use crate::view::school::{SchoolNew, SchoolUpdate};
pub use crate::view::student::{StudentNew, StudentUpdate};
