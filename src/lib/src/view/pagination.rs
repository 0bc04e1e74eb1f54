use serde::{Deserialize, Serialize};

/// Navigation metadata of a [`Page`](crate::view::Page), without the items
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub total: usize,
    pub page: usize,
    pub size: usize,
    pub pages: usize,
    pub has_next: bool,
    pub has_previous: bool,
}
