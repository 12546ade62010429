//! Display-ready projections of the current page
//!
//! The view model carries no markup. [`html`] turns it into a document;
//! the JSON routes serialize it as is.

pub mod html;

use crate::core::normalize::{format_count, format_currency};
use crate::core::query::PageWindow;
use crate::core::record::Record;
use serde::{Deserialize, Serialize};

/// Currency label appended to displayed prices
pub const CURRENCY_LABEL: &str = "CAD";

/// One record card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardView {
    pub id: String,
    pub category_a: String,
    pub category_b: String,
    /// Formatted price, `None` when the record has no price block
    pub price: Option<String>,
    pub description: String,
    pub link: String,
    /// Image URL, `None` renders the placeholder directly
    pub image: Option<String>,
}

impl CardView {
    pub fn from_record(record: &Record) -> Self {
        Self {
            id: record.id.clone(),
            category_a: record.category_a.clone(),
            category_b: record.category_b.clone(),
            price: record
                .price_amount
                .and_then(format_currency)
                .map(|p| format!("{} {}", p, CURRENCY_LABEL)),
            description: record.description.clone(),
            link: record.external_link_url.clone(),
            image: record.image().map(str::to_string),
        }
    }
}

/// Result count, page indicator and navigation state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSummary {
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
    /// `"1,234 results"`
    pub count_label: String,
    /// `"Page 2 / 21"`
    pub page_label: String,
    pub has_prev: bool,
    pub has_next: bool,
}

impl PageSummary {
    pub fn from_window(window: &PageWindow) -> Self {
        Self {
            total: window.total,
            page: window.page,
            total_pages: window.total_pages,
            count_label: format!("{} results", format_count(window.total)),
            page_label: format!("Page {} / {}", window.page, window.total_pages),
            has_prev: window.has_prev(),
            has_next: window.has_next(),
        }
    }
}

/// Choice lists and selections for the form controls
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterChoices {
    pub query: String,
    pub main_groups: Vec<String>,
    pub main_group: Option<String>,
    pub sub_groups: Vec<String>,
    pub sub_group: Option<String>,
}

/// Everything a renderer needs to draw the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogView {
    pub cards: Vec<CardView>,
    pub summary: PageSummary,
    pub choices: FilterChoices,
}
