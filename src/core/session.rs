//! Catalog session controller
//!
//! A session owns the mutable browsing state (criteria, page, sub group
//! choice list) over a shared, frozen [`RecordStore`]. Every user action has
//! one transition method; each criteria change recomputes the filtered view
//! from scratch and resets to page 1.

use crate::core::category::derive_category_b_options;
use crate::core::filter::{FilterCriteria, filter_indices, selection};
use crate::core::query::{PAGE_SIZE, PageWindow, PaginationMeta};
use crate::core::record::Record;
use crate::storage::RecordStore;
use crate::view::{CardView, CatalogView, FilterChoices, PageSummary};
use std::sync::Arc;

/// Browsing state of one user over one catalog
#[derive(Debug, Clone)]
pub struct CatalogSession {
    store: Arc<RecordStore>,
    criteria: FilterCriteria,
    sub_groups: Vec<String>,
    filtered: Vec<usize>,
    page: usize,
    page_size: usize,
}

impl CatalogSession {
    /// Start a session with no filter, on page 1
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self::with_page_size(store, PAGE_SIZE)
    }

    pub fn with_page_size(store: Arc<RecordStore>, page_size: usize) -> Self {
        Self::with_criteria(store, page_size, FilterCriteria::none())
    }

    /// Start a session with the given criteria already applied
    pub fn with_criteria(
        store: Arc<RecordStore>,
        page_size: usize,
        criteria: FilterCriteria,
    ) -> Self {
        let mut session = Self {
            store,
            criteria: FilterCriteria {
                category_a: selection(criteria.category_a),
                category_b: selection(criteria.category_b),
                query: criteria.query,
            },
            sub_groups: Vec::new(),
            filtered: Vec::new(),
            page: 1,
            page_size: page_size.max(1),
        };
        session.recompute();
        session
    }

    // === Transitions ===

    /// The free-text input changed
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.criteria.query = query.into();
        self.recompute();
    }

    /// The main group selection changed
    ///
    /// The sub group selection is kept when it is still offered under the
    /// new main group and cleared otherwise.
    pub fn set_category_a(&mut self, category_a: Option<String>) {
        self.criteria.category_a = selection(category_a);
        self.recompute();
    }

    /// The sub group selection changed
    pub fn set_category_b(&mut self, category_b: Option<String>) {
        self.criteria.category_b = selection(category_b);
        self.recompute();
    }

    /// Move to the previous page; no-op on page 1
    pub fn previous_page(&mut self) {
        self.page = self.current_window().page.saturating_sub(1).max(1);
    }

    /// Move to the next page; no-op on the last page
    pub fn next_page(&mut self) {
        let window = self.current_window();
        if window.has_next() {
            self.page = window.page + 1;
        }
    }

    /// Jump to a requested page, clamped into range
    pub fn go_to_page(&mut self, page: usize) {
        self.page = PageWindow::new(page, self.page_size, self.filtered.len()).page;
    }

    // === Queries ===

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Current (clamped) page number
    pub fn page(&self) -> usize {
        self.current_window().page
    }

    pub fn total_pages(&self) -> usize {
        self.current_window().total_pages
    }

    /// Number of records in the filtered view
    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    /// Sub group choice list for the current main group
    pub fn sub_groups(&self) -> &[String] {
        &self.sub_groups
    }

    /// Records in the filtered view, in load order
    pub fn filtered_records(&self) -> impl Iterator<Item = &Record> {
        let records = self.store.records();
        self.filtered.iter().map(move |&i| &records[i])
    }

    /// Records on the current page
    pub fn page_records(&self) -> impl Iterator<Item = &Record> {
        let records = self.store.records();
        self.current_window()
            .slice(&self.filtered)
            .iter()
            .map(move |&i| &records[i])
    }

    pub fn pagination(&self) -> PaginationMeta {
        self.current_window().meta()
    }

    pub fn summary(&self) -> PageSummary {
        PageSummary::from_window(&self.current_window())
    }

    /// Project the current page into a view model
    pub fn view(&self) -> CatalogView {
        CatalogView {
            cards: self.page_records().map(CardView::from_record).collect(),
            summary: self.summary(),
            choices: FilterChoices {
                query: self.criteria.query.clone(),
                main_groups: self.store.main_groups().to_vec(),
                main_group: self.criteria.category_a.clone(),
                sub_groups: self.sub_groups.clone(),
                sub_group: self.criteria.category_b.clone(),
            },
        }
    }

    fn current_window(&self) -> PageWindow {
        PageWindow::new(self.page, self.page_size, self.filtered.len())
    }

    fn recompute(&mut self) {
        let records = self.store.records();
        let (sub_groups, sub_group) = derive_category_b_options(
            records,
            self.criteria.category_a.as_deref(),
            self.criteria.category_b.as_deref(),
        );
        self.sub_groups = sub_groups;
        self.criteria.category_b = sub_group;
        self.filtered = filter_indices(records, &self.criteria);
        self.page = 1;

        tracing::debug!(
            query = %self.criteria.query,
            main_group = ?self.criteria.category_a,
            sub_group = ?self.criteria.category_b,
            matches = self.filtered.len(),
            "Filtered view recomputed"
        );
    }
}
