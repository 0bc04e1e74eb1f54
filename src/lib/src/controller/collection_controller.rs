use parking_lot::Mutex;
use std::future::Future;
use std::sync::Arc;

use crate::controller::{Collection, ControllerState, Status};
use crate::error::SchoolDeskError;
use crate::view::Pagination;

struct Inner<C: Collection> {
    state: ControllerState<C::Item>,
    params: Option<C::Query>,
    /// Sequence number of the most recently issued fetch
    latest: u64,
}

/// One paginated list of a resource, kept in sync with the server.
///
/// Every call to [`refetch`](CollectionController::refetch) is numbered when
/// it is issued, and a response is applied only while its number is still
/// the latest. Responses that arrive after a newer fetch was issued are
/// dropped, the request itself is not aborted.
///
/// Clones share the same state.
pub struct CollectionController<C: Collection> {
    collection: Arc<C>,
    inner: Arc<Mutex<Inner<C>>>,
}

impl<C: Collection> Clone for CollectionController<C> {
    fn clone(&self) -> Self {
        CollectionController {
            collection: Arc::clone(&self.collection),
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: Collection> CollectionController<C> {
    /// Starts idle, nothing is fetched until the first refetch
    pub fn new(collection: C) -> CollectionController<C> {
        CollectionController {
            collection: Arc::new(collection),
            inner: Arc::new(Mutex::new(Inner {
                state: ControllerState::default(),
                params: None,
                latest: 0,
            })),
        }
    }

    pub fn collection(&self) -> &C {
        &self.collection
    }

    /// Fetches with `params`, or with the last used params when `None`.
    ///
    /// The sequence number is taken when this is called, not when the returned
    /// future is first polled, so issue order is call order even if the
    /// futures are spawned onto different tasks.
    pub fn refetch(&self, params: Option<C::Query>) -> impl Future<Output = ()> + Send + 'static {
        let (seq, query) = {
            let mut inner = self.inner.lock();
            if let Some(params) = params {
                inner.params = Some(params);
            }
            inner.latest += 1;
            inner.state.loading = true;
            inner.state.error = None;
            (inner.latest, inner.params.clone().unwrap_or_default())
        };

        let collection = Arc::clone(&self.collection);
        let shared = Arc::clone(&self.inner);
        async move {
            log::debug!("refetch #{} with {:?}", seq, query);
            let result = collection.list(&query).await;

            let mut inner = shared.lock();
            if seq != inner.latest {
                log::trace!("dropping stale response #{} (latest #{})", seq, inner.latest);
                return;
            }
            inner.state.loading = false;
            match result {
                Ok(page) => {
                    inner.state.data = Some(page);
                }
                Err(err) => {
                    log::debug!("refetch #{} failed: {}", seq, err);
                    inner.state.error = Some(err.to_string());
                }
            }
        }
    }

    /// Changing the parameters always fetches
    pub async fn set_params(&self, params: C::Query) {
        self.refetch(Some(params)).await
    }

    pub async fn create(&self, input: &C::New) -> Result<C::Item, SchoolDeskError> {
        self.clear_error();
        let result = self.collection.create(input).await;
        self.settle_mutation(result).await
    }

    pub async fn update(&self, id: &str, patch: &C::Update) -> Result<C::Item, SchoolDeskError> {
        self.clear_error();
        let result = self.collection.update(id, patch).await;
        self.settle_mutation(result).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), SchoolDeskError> {
        self.clear_error();
        let result = self.collection.delete(id).await;
        self.settle_mutation(result).await
    }

    async fn settle_mutation<T>(&self, result: Result<T, SchoolDeskError>) -> Result<T, SchoolDeskError> {
        match result {
            Ok(value) => {
                self.refetch(None).await;
                Ok(value)
            }
            Err(err) => {
                self.inner.lock().state.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    fn clear_error(&self) {
        self.inner.lock().state.error = None;
    }

    pub fn state(&self) -> ControllerState<C::Item> {
        self.inner.lock().state.clone()
    }

    pub fn status(&self) -> Status {
        self.inner.lock().state.status()
    }

    pub fn items(&self) -> Vec<C::Item> {
        self.inner.lock().state.items().to_vec()
    }

    /// `None` until a fetch has succeeded
    pub fn pagination(&self) -> Option<Pagination> {
        self.inner.lock().state.pagination()
    }

    pub fn params(&self) -> Option<C::Query> {
        self.inner.lock().params.clone()
    }

    pub fn error(&self) -> Option<String> {
        self.inner.lock().state.error.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.lock().state.loading
    }
}
