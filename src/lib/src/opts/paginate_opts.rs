use crate::constants::{DEFAULT_PAGE_NUM, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Page selection shared by every list query
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginateOpts {
    pub page: usize,
    pub size: usize,
}

impl PaginateOpts {
    /// Clamps to what the API accepts: pages start at 1, sizes are 1..=100
    pub fn new(page: usize, size: usize) -> PaginateOpts {
        PaginateOpts {
            page: page.max(1),
            size: size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn next(&self) -> PaginateOpts {
        PaginateOpts::new(self.page + 1, self.size)
    }

    pub fn previous(&self) -> PaginateOpts {
        PaginateOpts::new(self.page.saturating_sub(1), self.size)
    }
}

impl Default for PaginateOpts {
    fn default() -> Self {
        PaginateOpts {
            page: DEFAULT_PAGE_NUM,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_to_api_bounds() {
        assert_eq!(PaginateOpts::new(0, 0), PaginateOpts { page: 1, size: 1 });
        assert_eq!(PaginateOpts::new(3, 500), PaginateOpts { page: 3, size: 100 });
    }

    #[test]
    fn test_previous_never_goes_below_first_page() {
        let opts = PaginateOpts::default();
        assert_eq!(opts.previous().page, 1);
        assert_eq!(opts.next().page, 2);
    }
}
