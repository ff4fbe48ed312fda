//! Sorting and pagination of query results.
//!
//! Two independent, composable operations applied to any record sequence
//! after lookup/search and before a result leaves the engine. Neither takes
//! a dependency on dataset shape: anything implementing [`FieldView`] can be
//! sorted, and anything at all can be paginated — including records
//! synthesized from multiple joined entities.

use std::cmp::Ordering;

use crate::types::{CatalogError, CatalogResult};

/// Default page number when none is requested.
pub const DEFAULT_PAGE: usize = 1;
/// Default page size when none (or an out-of-policy value) is requested.
pub const DEFAULT_PER_PAGE: usize = 20;

/// Read-only view of a record as named string fields.
///
/// Lets the sorter treat entity records and joined/synthesized boundary
/// records uniformly. Returning `None` means the record does not carry the
/// named field.
pub trait FieldView {
    /// Returns the value of the named field, if the record carries it.
    fn field(&self, name: &str) -> Option<&str>;
}

/// Sort direction. Ascending unless descending is explicitly requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// Ascending (the default).
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl Order {
    /// Parses `asc`/`desc`, case-insensitively.
    ///
    /// An unrecognized value is a validation error: defaults apply only to
    /// absence, never to malformed input.
    pub fn parse(value: &str) -> CatalogResult<Self> {
        match value.trim().to_lowercase().as_str() {
            "asc" => Ok(Order::Asc),
            "desc" => Ok(Order::Desc),
            _ => Err(CatalogError::InvalidSortOrder {
                value: value.to_string(),
            }),
        }
    }
}

/// Stable sort keyed by a named field.
///
/// Records where the field is absent keep their relative order; there is no
/// reordering guarantee beyond stability for them.
pub fn sort_by_field<T: FieldView>(data: &mut [T], key: &str, order: Order) {
    data.sort_by(|a, b| match (a.field(key), b.field(key)) {
        (Some(x), Some(y)) => {
            let ord = x.cmp(y);
            match order {
                Order::Asc => ord,
                Order::Desc => ord.reverse(),
            }
        }
        // Field absent on either side: keep relative order (stable sort).
        _ => Ordering::Equal,
    });
}

/// One page of results together with its pagination bookkeeping.
///
/// Serialized field names match the wire format of the HTTP boundary.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Page<T> {
    /// Effective page number after clamping.
    pub page: usize,
    /// Total number of pages, at least 1.
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
    /// Effective page size after clamping.
    #[serde(rename = "elementsPerPage")]
    pub elements_per_page: usize,
    /// Length of the original, unwindowed sequence.
    #[serde(rename = "totalElements")]
    pub total_elements: usize,
    /// The windowed records.
    pub data: Vec<T>,
}

/// Windows a record sequence into one page.
///
/// Clamping rules:
/// - page size: the requested value if `1 <= n <= len`; below 1 the default
///   of 20 applies; above `len` it is clamped to `len`.
/// - `total_pages = max(1, ceil(len / size))`.
/// - page: the requested value if in `1..=total_pages`; below 1 it becomes
///   1, above it becomes `total_pages`.
///
/// The returned slice is `data[(page-1)*size .. page*size]`, end-exclusive
/// and never past the end.
pub fn paginate<T>(data: Vec<T>, page: Option<i64>, per_page: Option<i64>) -> Page<T> {
    let total = data.len();

    let mut size = match per_page {
        Some(n) if n >= 1 => n as usize,
        _ => DEFAULT_PER_PAGE,
    };
    if size > total {
        size = total;
    }

    let total_pages = if size == 0 {
        1
    } else {
        total.div_ceil(size)
    };

    let current = match page {
        Some(p) if p >= 1 => (p as usize).min(total_pages),
        _ => DEFAULT_PAGE,
    };

    let start = (current - 1) * size;
    let window: Vec<T> = data.into_iter().skip(start).take(size).collect();

    Page {
        page: current,
        total_pages,
        elements_per_page: size,
        total_elements: total,
        data: window,
    }
}
