//! Record store and record sources

pub mod in_memory;
pub mod source;

pub use in_memory::RecordStore;
#[cfg(feature = "remote")]
pub use source::HttpSource;
pub use source::{FileSource, StaticSource};
