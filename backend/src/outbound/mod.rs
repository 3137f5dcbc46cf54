//! Outbound adapters implementing the domain ports.

pub mod cache;
pub mod remote;

pub use cache::MemoryQueryCache;
pub use remote::RemoteArticleStore;
