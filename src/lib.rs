//! # Parts Browser
//!
//! A catalog browser for bulk part lists: load a static list of records
//! once, filter it by main group, sub group and a free-text query, and page
//! through the matches as cards.
//!
//! ## Features
//!
//! - **Pure core**: normalization, filtering, the dependent category index
//!   and pagination are plain functions over `&[Record]`
//! - **Session controller**: `CatalogSession` owns the browsing state with one
//!   transition per user action
//! - **View model**: display-ready cards and a page summary, rendered to HTML
//!   or serialized as JSON
//! - **Lenient data**: missing or oddly typed fields degrade to "empty"
//! - **HTTP host**: axum routes for the page, the JSON API and health checks
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use parts_browser::prelude::*;
//!
//! let store = RecordStore::load(&FileSource::new("data.json")).await?;
//! let mut session = CatalogSession::new(Arc::new(store));
//!
//! session.set_category_a(Some("Bricks".to_string()));
//! session.set_query("2 x 4");
//! session.next_page();
//!
//! let view = session.view();
//! println!("{} - {}", view.summary.count_label, view.summary.page_label);
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod view;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        category::{category_a_options, category_b_options, derive_category_b_options},
        error::{CatalogError, ConfigError, LoadError},
        filter::{FilterCriteria, filter_records},
        normalize::{escape_html, format_count, format_currency, normalize},
        query::{PAGE_SIZE, PageWindow, PaginationMeta, QueryParams, total_pages},
        record::Record,
        service::RecordSource,
        session::CatalogSession,
    };

    // === Storage ===
    #[cfg(feature = "remote")]
    pub use crate::storage::HttpSource;
    pub use crate::storage::{FileSource, RecordStore, StaticSource};

    // === View ===
    pub use crate::view::{
        CardView, CatalogView, FilterChoices, PageSummary,
        html::{HtmlRenderer, render_card, render_cards},
    };

    // === Config ===
    pub use crate::config::{CatalogConfig, SourceConfig};

    // === Server ===
    pub use crate::server::{CatalogState, ServerBuilder, ServerHost};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
    pub use std::sync::Arc;
}
