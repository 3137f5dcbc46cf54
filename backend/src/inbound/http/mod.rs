//! HTTP adapter: handlers, session helpers, and error mapping.

pub mod admin;
pub mod articles;
pub mod error;
pub mod health;
pub mod newsletter;
pub mod profile;
pub mod session;
pub mod state;
#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;

pub use error::{ApiError, ApiResult};
pub use session::SessionContext;
pub use state::HttpState;
