//! Filter and pagination options for list calls
//!

use serde::Serialize;
use std::fmt::Debug;

use crate::error::SchoolDeskError;

pub mod invoice_query;
pub mod paginate_opts;
pub mod school_query;
pub mod student_query;

pub use crate::opts::invoice_query::InvoiceQuery;
pub use crate::opts::paginate_opts::PaginateOpts;
pub use crate::opts::school_query::SchoolQuery;
pub use crate::opts::student_query::StudentQuery;

/// A typed set of list filters. Unset filters are left out of the request.
pub trait ListQuery: Serialize + Clone + Debug + Default + Send + Sync + 'static {
    fn with_pagination(self, opts: PaginateOpts) -> Self;

    fn to_query_string(&self) -> Result<String, SchoolDeskError> {
        to_query_string(self)
    }
}

/// URL encodes `query`, omitting absent values
pub fn to_query_string<Q: Serialize + ?Sized>(query: &Q) -> Result<String, SchoolDeskError> {
    Ok(serde_url_params::to_string(query)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InvoiceStatus;

    #[test]
    fn test_absent_filters_are_omitted() -> Result<(), SchoolDeskError> {
        let query = SchoolQuery {
            page: Some(1),
            name: None,
            ..Default::default()
        };
        assert_eq!(query.to_query_string()?, "page=1");
        Ok(())
    }

    #[test]
    fn test_empty_query_encodes_to_nothing() -> Result<(), SchoolDeskError> {
        assert_eq!(StudentQuery::default().to_query_string()?, "");
        Ok(())
    }

    #[test]
    fn test_invoice_filters_encode_in_field_order() -> Result<(), SchoolDeskError> {
        let query = InvoiceQuery::with_status(InvoiceStatus::Pending)
            .with_pagination(PaginateOpts::new(2, 25));
        assert_eq!(query.to_query_string()?, "page=2&size=25&status=pending");
        Ok(())
    }

    #[test]
    fn test_values_are_percent_encoded() -> Result<(), SchoolDeskError> {
        let query = SchoolQuery {
            name: Some(String::from("St. Mary & Joseph")),
            ..Default::default()
        };
        let encoded = query.to_query_string()?;
        assert!(encoded.starts_with("name="));
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains("& "));
        Ok(())
    }
}
