//! Outbound port traits and their error types.
//!
//! Ports are object-safe async traits held behind `Arc<dyn ...>` so the
//! service layer never names a concrete adapter.

pub mod article_store;
pub mod query_cache;

pub use article_store::{ArticleStore, StoreError};
pub use query_cache::{CacheError, QueryCache, keys};
