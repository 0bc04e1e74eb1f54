use async_trait::async_trait;
use std::fmt::Debug;

use crate::api::client::{Resource, ResourceClient};
use crate::error::SchoolDeskError;
use crate::view::Page;

/// What a controller needs from a resource: list plus the mutations
#[async_trait]
pub trait Collection: Send + Sync + 'static {
    type Item: Clone + Send + Sync + 'static;
    type Query: Clone + Debug + Default + Send + Sync + 'static;
    type New: Send + Sync + 'static;
    type Update: Send + Sync + 'static;

    async fn list(&self, query: &Self::Query) -> Result<Page<Self::Item>, SchoolDeskError>;

    async fn get(&self, id: &str) -> Result<Self::Item, SchoolDeskError>;

    async fn create(&self, input: &Self::New) -> Result<Self::Item, SchoolDeskError>;

    async fn update(&self, id: &str, patch: &Self::Update) -> Result<Self::Item, SchoolDeskError>;

    async fn delete(&self, id: &str) -> Result<(), SchoolDeskError>;
}

#[async_trait]
impl<R: Resource> Collection for ResourceClient<R> {
    type Item = R::Item;
    type Query = R::Query;
    type New = R::New;
    type Update = R::Update;

    async fn list(&self, query: &R::Query) -> Result<Page<R::Item>, SchoolDeskError> {
        ResourceClient::list(self, query).await
    }

    async fn get(&self, id: &str) -> Result<R::Item, SchoolDeskError> {
        ResourceClient::get(self, id).await
    }

    async fn create(&self, input: &R::New) -> Result<R::Item, SchoolDeskError> {
        ResourceClient::create(self, input).await
    }

    async fn update(&self, id: &str, patch: &R::Update) -> Result<R::Item, SchoolDeskError> {
        ResourceClient::update(self, id, patch).await
    }

    async fn delete(&self, id: &str) -> Result<(), SchoolDeskError> {
        ResourceClient::delete(self, id).await
    }
}
