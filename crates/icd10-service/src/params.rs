//! Pagination and sort parameters shared by listing routes.

use icd10_catalog::{paginate, sort_by_field, FieldView, Order, Page};
use serde::Deserialize;

use crate::error::ApiError;

/// Query parameters accepted by listing and search routes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    /// 1-based page number; clamped by the pagination utility.
    pub page: Option<i64>,
    /// Elements per page; clamped by the pagination utility.
    pub count: Option<i64>,
    /// Field name to sort by.
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    /// Sort order, `asc` or `desc`.
    pub order: Option<String>,
}

impl ListQuery {
    /// Parses the sort order.
    ///
    /// Absence means ascending; a present but unrecognized value is a 400,
    /// never a silent default.
    pub fn order(&self) -> Result<Order, ApiError> {
        match &self.order {
            None => Ok(Order::default()),
            Some(value) => Ok(Order::parse(value)?),
        }
    }
}

/// Sorts by the client's field, then windows the result.
///
/// When the client names a field the records do not carry, the default sort
/// key applies instead.
pub fn sort_and_paginate<T: FieldView>(
    mut data: Vec<T>,
    query: &ListQuery,
    default_key: &str,
    default_count: i64,
) -> Result<Page<T>, ApiError> {
    let order = query.order()?;
    let key = match &query.sort_by {
        Some(k) if data.first().map_or(false, |r| r.field(k).is_some()) => k.as_str(),
        _ => default_key,
    };
    sort_by_field(&mut data, key, order);
    Ok(paginate(data, query.page, query.count.or(Some(default_count))))
}

/// Windows without sorting; chapter listings keep file order.
pub fn paginate_only<T>(data: Vec<T>, query: &ListQuery, default_count: i64) -> Page<T> {
    paginate(data, query.page, query.count.or(Some(default_count)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row(String);

    impl FieldView for Row {
        fn field(&self, name: &str) -> Option<&str> {
            (name == "id").then_some(self.0.as_str())
        }
    }

    fn make_rows(ids: &[&str]) -> Vec<Row> {
        ids.iter().map(|id| Row(id.to_string())).collect()
    }

    #[test]
    fn test_sorts_by_requested_key() {
        let query = ListQuery {
            sort_by: Some("id".to_string()),
            order: Some("desc".to_string()),
            ..Default::default()
        };
        let page = sort_and_paginate(make_rows(&["A", "C", "B"]), &query, "id", 10).unwrap();
        assert_eq!(page.data[0].0, "C");
    }

    #[test]
    fn test_unknown_sort_key_falls_back_to_default() {
        let query = ListQuery {
            sort_by: Some("bogus".to_string()),
            ..Default::default()
        };
        let page = sort_and_paginate(make_rows(&["B", "A"]), &query, "id", 10).unwrap();
        assert_eq!(page.data[0].0, "A");
    }

    #[test]
    fn test_invalid_order_is_rejected() {
        let query = ListQuery {
            order: Some("upside-down".to_string()),
            ..Default::default()
        };
        assert!(sort_and_paginate(make_rows(&["A"]), &query, "id", 10).is_err());
    }

    #[test]
    fn test_default_count_applies() {
        let query = ListQuery::default();
        let page = paginate_only(make_rows(&["A", "B", "C"]), &query, 2);
        assert_eq!(page.elements_per_page, 2);
        assert_eq!(page.total_pages, 2);
    }
}
