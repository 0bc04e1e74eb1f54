use parking_lot::Mutex;
use std::sync::Arc;

use crate::controller::Collection;

#[derive(Debug, Clone, PartialEq)]
pub struct ItemState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for ItemState<T> {
    fn default() -> Self {
        ItemState {
            data: None,
            loading: false,
            error: None,
        }
    }
}

struct Inner<T> {
    state: ItemState<T>,
    latest: u64,
}

/// Loads a single record by id, newest load wins
pub struct ItemController<C: Collection> {
    collection: Arc<C>,
    inner: Arc<Mutex<Inner<C::Item>>>,
}

impl<C: Collection> Clone for ItemController<C> {
    fn clone(&self) -> Self {
        ItemController {
            collection: Arc::clone(&self.collection),
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: Collection> ItemController<C> {
    pub fn new(collection: C) -> ItemController<C> {
        ItemController {
            collection: Arc::new(collection),
            inner: Arc::new(Mutex::new(Inner {
                state: ItemState::default(),
                latest: 0,
            })),
        }
    }

    /// A blank id leaves the state untouched and sends nothing
    pub async fn load(&self, id: &str) {
        if id.trim().is_empty() {
            return;
        }
        let seq = {
            let mut inner = self.inner.lock();
            inner.latest += 1;
            inner.state.loading = true;
            inner.state.error = None;
            inner.latest
        };

        let result = self.collection.get(id).await;

        let mut inner = self.inner.lock();
        if seq != inner.latest {
            log::trace!("dropping stale item response for {}", id);
            return;
        }
        inner.state.loading = false;
        match result {
            Ok(item) => inner.state.data = Some(item),
            Err(err) => inner.state.error = Some(err.to_string()),
        }
    }

    pub fn state(&self) -> ItemState<C::Item> {
        self.inner.lock().state.clone()
    }

    pub fn item(&self) -> Option<C::Item> {
        self.inner.lock().state.data.clone()
    }

    pub fn error(&self) -> Option<String> {
        self.inner.lock().state.error.clone()
    }
}
