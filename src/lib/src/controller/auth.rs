use parking_lot::Mutex;
use std::sync::Arc;

use crate::api;
use crate::api::client::ApiClient;
use crate::error::SchoolDeskError;
use crate::model::User;
use crate::view::{LoginRequest, UserNew};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Tracks the logged in user on top of the client's session store
#[derive(Clone)]
pub struct AuthController {
    client: ApiClient,
    state: Arc<Mutex<AuthState>>,
}

impl AuthController {
    pub fn new(client: ApiClient) -> AuthController {
        AuthController {
            client,
            state: Arc::new(Mutex::new(AuthState::default())),
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Loads the profile for the stored token. A failure means the token is
    /// no good, so the session is cleared.
    pub async fn load_current_user(&self) -> Option<User> {
        if !self.client.session().has_session() {
            log::debug!("no stored session, not loading user");
            return None;
        }
        self.begin();
        let result = api::client::auth::me(&self.client).await;

        let user = match result {
            Ok(user) => Some(user),
            Err(err) => {
                log::debug!("could not load current user: {}", err);
                if let Err(clear_err) = self.client.session().clear_tokens() {
                    log::warn!("could not clear session: {}", clear_err);
                }
                self.state.lock().error = Some(err.to_string());
                None
            }
        };
        let mut state = self.state.lock();
        state.user = user.clone();
        state.loading = false;
        user
    }

    /// Stores the tokens, then loads the profile with them
    pub async fn login(&self, request: &LoginRequest) -> Result<User, SchoolDeskError> {
        self.begin();
        if let Err(err) = api::client::auth::login(&self.client, request).await {
            self.fail(&err);
            return Err(err);
        }
        match self.load_current_user().await {
            Some(user) => Ok(user),
            None => {
                let message = self
                    .error()
                    .unwrap_or_else(|| String::from("Login failed"));
                Err(SchoolDeskError::basic_str(message))
            }
        }
    }

    /// Does not log the new user in
    pub async fn register(&self, user: &UserNew) -> Result<User, SchoolDeskError> {
        self.begin();
        let result = api::client::auth::register(&self.client, user).await;
        match &result {
            Ok(_) => self.state.lock().loading = false,
            Err(err) => self.fail(err),
        }
        result
    }

    /// Always ends the local session, the server call is best effort
    pub async fn logout(&self) {
        if let Err(err) = api::client::auth::logout(&self.client).await {
            log::warn!("logout error: {}", err);
        }
        let mut state = self.state.lock();
        state.user = None;
        state.loading = false;
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.lock().user.is_some()
    }

    pub fn user(&self) -> Option<User> {
        self.state.lock().user.clone()
    }

    pub fn error(&self) -> Option<String> {
        self.state.lock().error.clone()
    }

    pub fn state(&self) -> AuthState {
        self.state.lock().clone()
    }

    fn begin(&self) {
        let mut state = self.state.lock();
        state.loading = true;
        state.error = None;
    }

    fn fail(&self, err: &SchoolDeskError) {
        let mut state = self.state.lock();
        state.loading = false;
        state.error = Some(err.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test;

    #[tokio::test]
    async fn test_login_loads_profile() -> Result<(), SchoolDeskError> {
        let mut server = mockito::Server::new_async().await;
        let _login = server
            .mock("POST", "/auth/login")
            .with_status(200)
            .with_body(test::tokens_json("acc-1", "ref-1").to_string())
            .create_async()
            .await;
        let me = server
            .mock("GET", "/auth/me")
            .match_header("authorization", "Bearer acc-1")
            .with_status(200)
            .with_body(test::user_json(1, "admin").to_string())
            .create_async()
            .await;

        let auth = AuthController::new(test::client_for_url(&server.url())?);
        assert!(!auth.is_authenticated());

        let user = auth.login(&LoginRequest::new("admin", "secret")).await?;
        me.assert_async().await;
        assert_eq!(user.username.as_deref(), Some("admin"));
        assert!(auth.is_authenticated());
        assert!(!auth.state().loading);
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_login_sets_error() -> Result<(), SchoolDeskError> {
        let mut server = mockito::Server::new_async().await;
        let _login = server
            .mock("POST", "/auth/login")
            .with_status(401)
            .with_body(r#"{"detail": "Incorrect username or password"}"#)
            .create_async()
            .await;

        let auth = AuthController::new(test::client_for_url(&server.url())?);
        assert!(auth.login(&LoginRequest::new("admin", "bad")).await.is_err());
        assert_eq!(auth.error().as_deref(), Some("Incorrect username or password"));
        assert!(!auth.is_authenticated());
        assert!(!auth.state().loading);
        Ok(())
    }

    #[tokio::test]
    async fn test_bad_stored_token_clears_session() -> Result<(), SchoolDeskError> {
        let mut server = mockito::Server::new_async().await;
        let _me = server
            .mock("GET", "/auth/me")
            .with_status(404)
            .with_body(r#"{"detail": "User not found"}"#)
            .create_async()
            .await;

        let auth = AuthController::new(test::client_with_token(&server.url(), "stale")?);
        assert_eq!(auth.load_current_user().await, None);
        assert!(!auth.client().session().has_session());
        assert_eq!(auth.error().as_deref(), Some("User not found"));
        Ok(())
    }

    #[tokio::test]
    async fn test_without_session_nothing_is_requested() -> Result<(), SchoolDeskError> {
        let auth = AuthController::new(test::client_for_url("http://127.0.0.1:9")?);
        assert_eq!(auth.load_current_user().await, None);
        assert_eq!(auth.error(), None);
        Ok(())
    }

    #[tokio::test]
    async fn test_logout_always_clears() -> Result<(), SchoolDeskError> {
        let auth = AuthController::new(test::client_with_token("http://127.0.0.1:9", "acc")?);
        auth.state.lock().user = Some(serde_json::from_value(test::user_json(1, "admin"))?);

        auth.logout().await;
        assert!(!auth.is_authenticated());
        assert!(!auth.client().session().has_session());
        Ok(())
    }
}
