//! Filter engine
//!
//! A record passes when every criterion that is set matches (logical AND):
//! exact category A, exact category B, and substring containment of the
//! normalized query in the record's search haystack. There is no index and
//! no ranking; the whole record set is scanned on every criteria change.

use crate::core::normalize::normalize;
use crate::core::record::Record;
use serde::{Deserialize, Serialize};

/// Active filter criteria for a session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Selected main group, `None` for all
    pub category_a: Option<String>,

    /// Selected sub group, `None` for all
    pub category_b: Option<String>,

    /// Free-text query, possibly empty
    #[serde(default)]
    pub query: String,
}

impl FilterCriteria {
    /// Criteria that match every record
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_category_a(mut self, category_a: impl Into<String>) -> Self {
        self.category_a = selection(Some(category_a.into()));
        self
    }

    pub fn with_category_b(mut self, category_b: impl Into<String>) -> Self {
        self.category_b = selection(Some(category_b.into()));
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Whether no criterion is set
    pub fn is_empty(&self) -> bool {
        self.category_a.is_none() && self.category_b.is_none() && normalize(&self.query).is_empty()
    }

    /// Check a single record against these criteria
    pub fn matches(&self, record: &Record) -> bool {
        self.matches_normalized(record, &normalize(&self.query))
    }

    fn matches_normalized(&self, record: &Record, query: &str) -> bool {
        if self
            .category_a
            .as_deref()
            .is_some_and(|a| record.category_a != a)
        {
            return false;
        }
        if self
            .category_b
            .as_deref()
            .is_some_and(|b| record.category_b != b)
        {
            return false;
        }
        query.is_empty() || haystack(record).contains(query)
    }
}

/// Treat an empty selection as "no selection"
pub fn selection(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Space-joined normalized search text of a record
///
/// Amounts join via their wire text, so `"42.00"` is found by both `42`
/// and `42.00`.
pub fn haystack(record: &Record) -> String {
    [
        normalize(&record.id),
        normalize(&record.description),
        normalize(&record.category_b),
        normalize(&record.category_a),
        normalize(&record.price_text),
        normalize(&record.secondary_price_text),
    ]
    .join(" ")
}

/// Filter records, preserving their original relative order
pub fn filter_records<'a>(records: &'a [Record], criteria: &FilterCriteria) -> Vec<&'a Record> {
    let query = normalize(&criteria.query);
    records
        .iter()
        .filter(|record| criteria.matches_normalized(record, &query))
        .collect()
}

/// Positions of the matching records in `records`, in order
pub fn filter_indices(records: &[Record], criteria: &FilterCriteria) -> Vec<usize> {
    let query = normalize(&criteria.query);
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| criteria.matches_normalized(record, &query))
        .map(|(i, _)| i)
        .collect()
}
