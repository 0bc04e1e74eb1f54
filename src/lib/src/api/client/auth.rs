//! Login, registration and the current user's profile
//!
//! Calls that return a token pair write it into the client's session store,
//! so every request after them is authenticated.
//!

use crate::api::client::{ApiClient, Method, RequestOpts};
use crate::constants::AUTH_PATH;
use crate::error::SchoolDeskError;
use crate::model::User;
use crate::view::{
    LoginRequest, MessageResponse, PasswordChange, ProfileUpdate, TokenRefresh, TokenResponse,
    UserNew,
};

fn auth_path(action: &str) -> String {
    format!("{AUTH_PATH}/{action}")
}

pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<TokenResponse, SchoolDeskError> {
    request.validate()?;
    let tokens: TokenResponse = client.post(&auth_path("login"), request).await?;
    client
        .session()
        .set_tokens(&tokens.access_token, &tokens.refresh_token)?;
    log::debug!("logged in as {}", request.username);
    Ok(tokens)
}

pub async fn register(client: &ApiClient, user: &UserNew) -> Result<User, SchoolDeskError> {
    user.validate()?;
    client.post(&auth_path("register"), user).await
}

pub async fn me(client: &ApiClient) -> Result<User, SchoolDeskError> {
    client.get(&auth_path("me"), RequestOpts::new()).await
}

pub async fn update_profile(client: &ApiClient, update: &ProfileUpdate) -> Result<User, SchoolDeskError> {
    update.validate()?;
    client.put(&auth_path("me"), update).await
}

pub async fn change_password(client: &ApiClient, change: &PasswordChange) -> Result<MessageResponse, SchoolDeskError> {
    change.validate()?;
    client.post(&auth_path("change-password"), change).await
}

/// Exchanges a refresh token for a new pair, without touching the session
pub async fn refresh(client: &ApiClient, refresh_token: impl AsRef<str>) -> Result<TokenResponse, SchoolDeskError> {
    let body = TokenRefresh {
        refresh_token: refresh_token.as_ref().to_string(),
    };
    client.post(&auth_path("refresh"), &body).await
}

/// Refreshes with the stored refresh token and stores the new pair
pub async fn refresh_session(client: &ApiClient) -> Result<TokenResponse, SchoolDeskError> {
    let Some(refresh_token) = client.session().refresh_token() else {
        return Err(SchoolDeskError::session_not_found());
    };
    let tokens = refresh(client, refresh_token).await?;
    client
        .session()
        .set_tokens(&tokens.access_token, &tokens.refresh_token)?;
    Ok(tokens)
}

/// Tokens are cleared even when the server call fails
pub async fn logout(client: &ApiClient) -> Result<(), SchoolDeskError> {
    let result = client
        .send(Method::POST, &auth_path("logout"), RequestOpts::new())
        .await;
    client.session().clear_tokens()?;
    if let Err(err) = result {
        log::debug!("logout call failed, session cleared anyway: {}", err);
        return Err(err);
    }
    Ok(())
}
