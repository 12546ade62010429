//! In-memory record store
//!
//! Written once at load, read-only afterwards. Sessions share it through an
//! `Arc` and never mutate it, so no lock is needed.

use crate::core::category::category_a_options;
use crate::core::error::LoadError;
use crate::core::record::Record;
use crate::core::service::RecordSource;

/// The full, frozen record list of a catalog
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    main_groups: Vec<String>,
    origin: String,
}

impl RecordStore {
    /// Freeze a record list into a store
    pub fn from_records(records: Vec<Record>) -> Self {
        Self::with_origin(records, "memory")
    }

    fn with_origin(records: Vec<Record>, origin: impl Into<String>) -> Self {
        let main_groups = category_a_options(&records);
        Self {
            records,
            main_groups,
            origin: origin.into(),
        }
    }

    /// Perform the single startup fetch and freeze the result
    pub async fn load(source: &dyn RecordSource) -> Result<Self, LoadError> {
        let origin = source.origin();
        tracing::info!(origin = %origin, "Loading catalog records");

        let records = source.fetch().await?;
        let store = Self::with_origin(records, origin);

        tracing::info!(
            origin = %store.origin,
            records = store.len(),
            main_groups = store.main_groups.len(),
            "Catalog records loaded"
        );
        Ok(store)
    }

    /// All records, in load order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Main group choice list (sorted, unique, non-empty)
    pub fn main_groups(&self) -> &[String] {
        &self.main_groups
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::source::StaticSource;

    #[tokio::test]
    async fn test_load_from_source() {
        let source = StaticSource::new(vec![
            Record::new("1", "", "Plates", "Plates 1 x"),
            Record::new("2", "", "Bricks", "Bricks 1 x"),
            Record::new("3", "", "Bricks", "Bricks 2 x"),
        ]);

        let store = RecordStore::load(&source).await.unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.origin(), "memory");
        assert_eq!(store.main_groups(), ["Bricks", "Plates"]);
        assert_eq!(store.records()[0].id, "1");
    }

    #[test]
    fn test_empty_store() {
        let store = RecordStore::default();
        assert!(store.is_empty());
        assert!(store.main_groups().is_empty());
    }
}
