//! Core module: records, normalization, filtering, categories, pagination
//! and the session controller

pub mod category;
pub mod error;
pub mod filter;
pub mod normalize;
pub mod query;
pub mod record;
pub mod service;
pub mod session;

pub use category::{category_a_options, category_b_options, derive_category_b_options};
pub use error::{CatalogError, ConfigError, LoadError};
pub use filter::{FilterCriteria, filter_records};
pub use query::{PAGE_SIZE, PageWindow, PaginationMeta, QueryParams};
pub use record::Record;
pub use service::RecordSource;
pub use session::CatalogSession;
