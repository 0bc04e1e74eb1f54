use crate::view::{Page, Pagination};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Nothing requested yet
    Idle,
    Loading,
    Success,
    Failed,
}

/// Snapshot of a collection controller
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerState<T> {
    pub data: Option<Page<T>>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for ControllerState<T> {
    fn default() -> Self {
        ControllerState {
            data: None,
            loading: false,
            error: None,
        }
    }
}

impl<T> ControllerState<T> {
    /// A failed refetch keeps the page it had, so `Failed` can still carry data
    pub fn status(&self) -> Status {
        if self.loading {
            Status::Loading
        } else if self.error.is_some() {
            Status::Failed
        } else if self.data.is_some() {
            Status::Success
        } else {
            Status::Idle
        }
    }

    pub fn pagination(&self) -> Option<Pagination> {
        self.data.as_ref().map(|page| page.pagination())
    }

    pub fn items(&self) -> &[T] {
        match &self.data {
            Some(page) => &page.items,
            None => &[],
        }
    }
}
