//! Generic CRUD over one backend collection
//!

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;

use crate::api::client::{ApiClient, Method, RequestOpts};
use crate::api::endpoint;
use crate::error::SchoolDeskError;
use crate::opts::ListQuery;
use crate::view::Page;

/// Describes a collection endpoint and the records it exchanges
pub trait Resource: Send + Sync + 'static {
    /// Singular name used in log lines and messages
    const NAME: &'static str;
    /// Collection path, with its trailing slash
    const PATH: &'static str;

    type Item: DeserializeOwned + Clone + Send + Sync + 'static;
    type Query: ListQuery;
    type New: Serialize + Send + Sync + 'static;
    type Update: Serialize + Send + Sync + 'static;
}

/// The server is the only authority on filtering, sorting and paging
pub async fn list<R: Resource>(client: &ApiClient, query: &R::Query) -> Result<Page<R::Item>, SchoolDeskError> {
    log::debug!("listing {}s with {:?}", R::NAME, query);
    let opts = RequestOpts::new().query(query)?;
    let page: Page<R::Item> = client.send_as(Method::GET, R::PATH, opts).await?;
    Ok(page.normalized())
}

pub async fn get<R: Resource>(client: &ApiClient, id: &str) -> Result<R::Item, SchoolDeskError> {
    let path = endpoint::item_path(R::PATH, id)?;
    client.get(&path, RequestOpts::new()).await
}

pub async fn create<R: Resource>(client: &ApiClient, input: &R::New) -> Result<R::Item, SchoolDeskError> {
    log::debug!("creating {}", R::NAME);
    client.post(R::PATH, input).await
}

/// Only the fields present in `patch` are sent
pub async fn update<R: Resource>(client: &ApiClient, id: &str, patch: &R::Update) -> Result<R::Item, SchoolDeskError> {
    let path = endpoint::item_path(R::PATH, id)?;
    log::debug!("updating {} {}", R::NAME, id);
    client.put(&path, patch).await
}

pub async fn delete<R: Resource>(client: &ApiClient, id: &str) -> Result<(), SchoolDeskError> {
    let path = endpoint::item_path(R::PATH, id)?;
    log::debug!("deleting {} {}", R::NAME, id);
    client.delete(&path).await
}

/// One resource client instance, bound to an [`ApiClient`]
pub struct ResourceClient<R: Resource> {
    client: ApiClient,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Clone for ResourceClient<R> {
    fn clone(&self) -> Self {
        ResourceClient {
            client: self.client.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> ResourceClient<R> {
    pub fn new(client: ApiClient) -> ResourceClient<R> {
        ResourceClient {
            client,
            _resource: PhantomData,
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.client
    }

    pub async fn list(&self, query: &R::Query) -> Result<Page<R::Item>, SchoolDeskError> {
        list::<R>(&self.client, query).await
    }

    pub async fn get(&self, id: &str) -> Result<R::Item, SchoolDeskError> {
        get::<R>(&self.client, id).await
    }

    pub async fn create(&self, input: &R::New) -> Result<R::Item, SchoolDeskError> {
        create::<R>(&self.client, input).await
    }

    pub async fn update(&self, id: &str, patch: &R::Update) -> Result<R::Item, SchoolDeskError> {
        update::<R>(&self.client, id, patch).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), SchoolDeskError> {
        delete::<R>(&self.client, id).await
    }
}
