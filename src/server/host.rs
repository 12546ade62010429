//! Server host holding the loaded catalog
//!
//! The host is transport-agnostic: it owns the outcome of the single startup
//! load and hands out fresh [`CatalogSession`]s. Exposures (HTML, JSON) read
//! from it and never mutate it.

use crate::config::CatalogConfig;
use crate::core::error::{CatalogError, LoadError};
use crate::core::filter::FilterCriteria;
use crate::core::service::RecordSource;
use crate::core::session::CatalogSession;
use crate::storage::RecordStore;
use crate::view::html::HtmlRenderer;
use std::sync::Arc;

/// Outcome of the startup load
#[derive(Debug, Clone)]
pub enum CatalogState {
    /// Records loaded and frozen
    Ready(Arc<RecordStore>),

    /// The load failed; the session serves the diagnostic page only
    Failed { reason: String },
}

/// Host context shared by all exposures
#[derive(Debug)]
pub struct ServerHost {
    pub config: Arc<CatalogConfig>,
    pub state: CatalogState,
    pub renderer: HtmlRenderer,
}

impl ServerHost {
    /// Build a host around an already loaded store
    pub fn from_store(config: CatalogConfig, store: RecordStore) -> Result<Self, CatalogError> {
        Self::with_state(config, CatalogState::Ready(Arc::new(store)))
    }

    /// Perform the startup load and build the host from its outcome
    ///
    /// A load failure is not returned as an error: it is logged once and the
    /// host enters [`CatalogState::Failed`]. There is no retry.
    pub async fn load(config: CatalogConfig, source: &dyn RecordSource) -> Result<Self, CatalogError> {
        let state = match RecordStore::load(source).await {
            Ok(store) => CatalogState::Ready(Arc::new(store)),
            Err(err) => Self::failed(err),
        };
        Self::with_state(config, state)
    }

    fn failed(err: LoadError) -> CatalogState {
        tracing::error!(error = %err, code = err.error_code(), "Catalog load failed");
        CatalogState::Failed {
            reason: err.to_string(),
        }
    }

    fn with_state(config: CatalogConfig, state: CatalogState) -> Result<Self, CatalogError> {
        config.validate()?;
        let renderer = HtmlRenderer::new(config.title.clone())?;
        Ok(Self {
            config: Arc::new(config),
            state,
            renderer,
        })
    }

    /// The loaded store, or `Unavailable` if the startup load failed
    pub fn store(&self) -> Result<&Arc<RecordStore>, CatalogError> {
        match &self.state {
            CatalogState::Ready(store) => Ok(store),
            CatalogState::Failed { reason } => Err(CatalogError::Unavailable {
                reason: reason.clone(),
            }),
        }
    }

    /// Start a session with the given criteria applied
    pub fn session(&self, criteria: FilterCriteria) -> Result<CatalogSession, CatalogError> {
        let store = self.store()?.clone();
        Ok(CatalogSession::with_criteria(
            store,
            self.config.page_size,
            criteria,
        ))
    }

    /// Whether the startup load succeeded
    pub fn is_ready(&self) -> bool {
        matches!(self.state, CatalogState::Ready(_))
    }

    /// Number of loaded records (zero when the load failed)
    pub fn record_count(&self) -> usize {
        self.store().map(|s| s.len()).unwrap_or(0)
    }
}
