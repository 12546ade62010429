//! Query parameters and pagination utilities

use crate::core::filter::{FilterCriteria, selection};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Fixed number of records rendered per page
pub const PAGE_SIZE: usize = 60;

/// Query parameters for filtering and pagination
///
/// Extracted from URL query strings by the HTML and JSON routes. Field names
/// match the form controls of the page.
///
/// # Example
/// ```rust,ignore
/// pub async fn list_records(Query(params): Query<QueryParams>) -> impl IntoResponse {
///     // params.page defaults to 1
///     // empty main_group / sub_group mean "all"
/// }
///
/// // Usage:
/// GET /?q=lion
/// GET /api/records?main_group=Bricks&sub_group=Bricks%202%20x&page=2
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct QueryParams {
    /// Free-text query
    pub q: Option<String>,

    /// Main group (category A) selection
    pub main_group: Option<String>,

    /// Sub group (category B) selection
    pub sub_group: Option<String>,

    /// Requested page number (starts at 1); unreadable values mean page 1
    #[serde(default = "default_page", deserialize_with = "lenient_page")]
    pub page: usize,
}

fn default_page() -> usize {
    1
}

fn lenient_page<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let page = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().and_then(|p| usize::try_from(p).ok()),
        Value::String(s) => s.trim().parse::<usize>().ok(),
        _ => None,
    };
    Ok(page.unwrap_or_else(default_page))
}

impl QueryParams {
    /// Get page number, ensuring minimum of 1
    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    /// Filter criteria carried by these parameters
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            category_a: selection(self.main_group.clone()),
            category_b: selection(self.sub_group.clone()),
            query: self.q.clone().unwrap_or_default(),
        }
    }
}

/// Total page count for `total` items: never less than one
pub fn total_pages(total: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    total.div_ceil(page_size).max(1)
}

/// Slicing of an ordered sequence into fixed-size pages
///
/// The requested page is clamped into `[1, total_pages]` when the window is
/// built, so an over-increment from "next" is tolerated and silently clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
}

impl PageWindow {
    pub fn new(requested_page: usize, page_size: usize, total: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total_pages(total, page_size);
        Self {
            page: requested_page.clamp(1, total_pages),
            page_size,
            total,
            total_pages,
        }
    }

    /// Start offset of the page (inclusive)
    pub fn start(&self) -> usize {
        ((self.page - 1) * self.page_size).min(self.total)
    }

    /// End offset of the page (exclusive)
    pub fn end(&self) -> usize {
        (self.page * self.page_size).min(self.total)
    }

    /// The page's slice of `items`
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = self.end().min(items.len());
        &items[self.start().min(end)..end]
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn meta(&self) -> PaginationMeta {
        PaginationMeta {
            page: self.page,
            limit: self.page_size,
            total: self.total,
            total_pages: self.total_pages,
            has_next: self.has_next(),
            has_prev: self.has_prev(),
        }
    }
}

/// Paginated response structure
///
/// This structure wraps paginated data with metadata about pagination state.
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    /// The paginated data
    pub data: Vec<T>,

    /// Pagination metadata
    pub pagination: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub limit: usize,

    /// Total number of items (after filters)
    pub total: usize,

    /// Total number of pages (at least 1)
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Create pagination metadata, clamping the page into range
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        PageWindow::new(page, limit, total).meta()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params_defaults() {
        let params = QueryParams::default();
        assert_eq!(params.page(), 1);
        assert!(params.criteria().is_empty());
    }

    #[test]
    fn test_query_params_empty_selects_are_none() {
        let params = QueryParams {
            q: Some("lion".to_string()),
            main_group: Some(String::new()),
            sub_group: Some("Animals".to_string()),
            page: 0,
        };
        let criteria = params.criteria();
        assert_eq!(params.page(), 1);
        assert_eq!(criteria.category_a, None);
        assert_eq!(criteria.category_b.as_deref(), Some("Animals"));
        assert_eq!(criteria.query, "lion");
    }

    #[test]
    fn test_query_params_lenient_page() {
        let parse = |page: serde_json::Value| -> usize {
            let params: QueryParams =
                serde_json::from_value(serde_json::json!({ "page": page })).unwrap();
            params.page()
        };
        assert_eq!(parse(serde_json::json!("3")), 3);
        assert_eq!(parse(serde_json::json!(" 4 ")), 4);
        assert_eq!(parse(serde_json::json!(5)), 5);
        assert_eq!(parse(serde_json::json!("abc")), 1);
        assert_eq!(parse(serde_json::json!("-1")), 1);
        assert_eq!(parse(serde_json::json!(-1)), 1);
        assert_eq!(parse(serde_json::Value::Null), 1);
    }

    #[test]
    fn test_total_pages_formula() {
        for total in [0usize, 1, 59, 60, 61, 119, 120, 121, 200, 1000] {
            let expected = std::cmp::max(1, total.div_ceil(PAGE_SIZE));
            assert_eq!(total_pages(total, PAGE_SIZE), expected, "total = {}", total);
        }
    }

    #[test]
    fn test_window_clamps_requested_page() {
        let window = PageWindow::new(9, PAGE_SIZE, 200);
        assert_eq!(window.page, 4);
        assert_eq!(window.start(), 180);
        assert_eq!(window.end(), 200);

        let window = PageWindow::new(0, PAGE_SIZE, 200);
        assert_eq!(window.page, 1);
    }

    #[test]
    fn test_window_on_empty_sequence() {
        let window = PageWindow::new(3, PAGE_SIZE, 0);
        assert_eq!(window.page, 1);
        assert_eq!(window.total_pages, 1);
        assert!(window.slice::<u8>(&[]).is_empty());
        assert!(!window.has_prev());
        assert!(!window.has_next());
    }

    #[test]
    fn test_window_slice() {
        let items: Vec<usize> = (0..130).collect();
        let window = PageWindow::new(3, PAGE_SIZE, items.len());
        assert_eq!(window.slice(&items), &items[120..130]);
    }

    #[test]
    fn test_pagination_meta() {
        let meta = PaginationMeta::new(1, 20, 145);
        assert_eq!(meta.total, 145);
        assert_eq!(meta.total_pages, 8);
        assert!(!meta.has_prev);
        assert!(meta.has_next);
    }
}
