//! # Controllers - client side state over the API
//!
//! A [`CollectionController`] keeps one page of a resource list in sync with
//! the server: it fetches on parameter changes, applies only the newest
//! response, and refetches after every successful mutation instead of
//! patching its page locally. [`ItemController`] does the same for a single
//! record and [`AuthController`] tracks the logged in user.
//!

pub mod auth;
pub mod collection;
pub mod collection_controller;
pub mod item;
pub mod state;

pub use crate::controller::auth::{AuthController, AuthState};
pub use crate::controller::collection::Collection;
pub use crate::controller::collection_controller::CollectionController;
pub use crate::controller::item::{ItemController, ItemState};
pub use crate::controller::state::{ControllerState, Status};
