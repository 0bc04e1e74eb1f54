//! # API Client - HTTP adapter for the back office API
//!
//! Every resource client goes through [`ApiClient::send`], which prefixes the
//! base url, injects the bearer token from the session store, encodes the
//! query and JSON body, and turns non-2xx answers into
//! [`HttpError`](crate::error::HttpError)s. It never retries and never caches.
//!

use crate::api::endpoint;
use crate::config::ClientConfig;
use crate::constants;
use crate::error::{HttpError, SchoolDeskError};
use crate::opts;
use crate::session::SessionStore;
use crate::view::ErrorResponse;
pub use reqwest::Method;
use reqwest::{header, Client, ClientBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

pub mod auth;
pub mod dashboard;
pub mod invoices;
pub mod resource;
pub mod schools;
pub mod students;
pub mod users;

pub use crate::api::client::resource::{Resource, ResourceClient};

const VERSION: &str = constants::SCHOOLDESK_VERSION;
const USER_AGENT: &str = constants::USER_AGENT;

/// Optional query and body of a request
#[derive(Debug, Clone, Default)]
pub struct RequestOpts {
    query: Option<String>,
    body: Option<Value>,
}

impl RequestOpts {
    pub fn new() -> RequestOpts {
        RequestOpts::default()
    }

    /// Encodes `query` as URL parameters, absent values are left out
    pub fn query<Q: Serialize + ?Sized>(mut self, query: &Q) -> Result<RequestOpts, SchoolDeskError> {
        let encoded = opts::to_query_string(query)?;
        self.query = if encoded.is_empty() { None } else { Some(encoded) };
        Ok(self)
    }

    pub fn body<B: Serialize + ?Sized>(mut self, body: &B) -> Result<RequestOpts, SchoolDeskError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn query_str(&self) -> Option<&str> {
        self.query.as_deref()
    }
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
    session: Arc<dyn SessionStore>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("has_session", &self.session.has_session())
            .finish()
    }
}

impl ApiClient {
    pub fn new(config: &ClientConfig, session: Arc<dyn SessionStore>) -> Result<ApiClient, SchoolDeskError> {
        // Fail on a bad url now rather than on the first request
        endpoint::url_from(&config.api_url, "/", None)?;
        let http = match builder().timeout(config.timeout()).build() {
            Ok(client) => client,
            Err(reqwest_err) => return Err(SchoolDeskError::Client(reqwest_err)),
        };
        log::debug!("api client for {} timeout {:?}", config.api_url, config.timeout());
        Ok(ApiClient {
            base_url: config.api_url.to_owned(),
            http,
            session,
        })
    }

    pub fn for_url(url: impl AsRef<str>, session: Arc<dyn SessionStore>) -> Result<ApiClient, SchoolDeskError> {
        ApiClient::new(&ClientConfig::new(url), session)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    /// Sends one request and returns the decoded JSON body, `Value::Null` for
    /// an empty body.
    pub async fn send(&self, method: Method, path: &str, opts: RequestOpts) -> Result<Value, SchoolDeskError> {
        let url = endpoint::url_from(&self.base_url, path, opts.query_str())?;
        log::debug!("api::client::send {} {}", method, url);

        let mut request = self.http.request(method, url.clone());
        if let Some(auth_value) = self.auth_header()? {
            request = request.header(header::AUTHORIZATION, auth_value);
        }
        if let Some(body) = &opts.body {
            request = request.json(body);
        }

        let res = request.send().await?;
        self.parse_json_body(url.as_str(), res).await
    }

    pub async fn send_as<T: DeserializeOwned>(&self, method: Method, path: &str, opts: RequestOpts) -> Result<T, SchoolDeskError> {
        let value = self.send(method, path, opts).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, opts: RequestOpts) -> Result<T, SchoolDeskError> {
        self.send_as(Method::GET, path, opts).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<T, SchoolDeskError> {
        self.send_as(Method::POST, path, RequestOpts::new().body(body)?).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<T, SchoolDeskError> {
        self.send_as(Method::PUT, path, RequestOpts::new().body(body)?).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), SchoolDeskError> {
        self.send(Method::DELETE, path, RequestOpts::new()).await?;
        Ok(())
    }

    fn auth_header(&self) -> Result<Option<header::HeaderValue>, SchoolDeskError> {
        let Some(token) = self.session.token() else {
            log::trace!("no session token, sending request unauthenticated");
            return Ok(None);
        };
        let auth_header = format!("Bearer {token}");
        let mut auth_value = match header::HeaderValue::from_str(auth_header.as_str()) {
            Ok(header) => header,
            Err(err) => {
                log::debug!("api::client invalid header value: {}", err);
                return Err(SchoolDeskError::basic_str(
                    "Error setting request auth. Please log in again.",
                ));
            }
        };
        auth_value.set_sensitive(true);
        Ok(Some(auth_value))
    }

    async fn parse_json_body(&self, url: &str, res: reqwest::Response) -> Result<Value, SchoolDeskError> {
        let status = res.status();
        let body = res.text().await?;

        log::debug!("url: {url}\nstatus: {status}\nbody: {body}");

        if !status.is_success() {
            if status == StatusCode::UNAUTHORIZED {
                self.session.on_unauthorized();
            }
            return Err(SchoolDeskError::Http(http_error_from_body(status, &body)));
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(err) => {
                log::debug!("Err: {}", err);
                Err(SchoolDeskError::basic_str(format!(
                    "Could not deserialize response from [{url}]\n{status}\n'{body}'"
                )))
            }
        }
    }
}

/// Message from the body when there is one, otherwise derived from the status
pub fn http_error_from_body(status: StatusCode, body: &str) -> HttpError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|response| response.message());
    match message {
        Some(message) => HttpError::new(status.as_u16(), message),
        None => HttpError::from_status(status),
    }
}

fn builder() -> ClientBuilder {
    Client::builder().user_agent(format!("{USER_AGENT}/{VERSION}"))
}
