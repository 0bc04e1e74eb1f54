//! Admin only user lookups, served under `/auth/users`
//!

use crate::api::client::{ApiClient, RequestOpts};
use crate::api::endpoint;
use crate::constants::AUTH_PATH;
use crate::error::SchoolDeskError;
use crate::model::User;

fn users_path() -> String {
    format!("{AUTH_PATH}/users")
}

/// The backend answers with a plain array here, not a page
pub async fn list(client: &ApiClient) -> Result<Vec<User>, SchoolDeskError> {
    client.get(&users_path(), RequestOpts::new()).await
}

pub async fn get(client: &ApiClient, id: impl AsRef<str>) -> Result<User, SchoolDeskError> {
    let path = endpoint::item_path(&users_path(), id.as_ref())?;
    client.get(&path, RequestOpts::new()).await
}
