//! Pressroom backend library modules.
//!
//! The crate follows a hexagonal layout: `domain` holds entities, the
//! content pipeline, and port traits; `inbound::http` maps HTTP requests
//! onto domain operations; `outbound` implements the ports against the
//! remote article store and an in-process query cache.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use doc::ApiDoc;
pub use middleware::trace::Trace;
