//! Domain layer: entities, the content pipeline, and port traits.
//!
//! Everything in this module is transport agnostic. Inbound adapters map the
//! types here onto HTTP; outbound adapters implement the port traits.

pub mod article;
pub mod classify;
pub mod error;
pub mod markdown;
pub mod normalize;
pub mod ports;
pub mod rest_endpoint;
pub mod service;
pub mod slug;
pub mod timestamp;
pub mod transform;
pub mod user;

pub use article::{Article, ArticleUpdate, BlobRef};
pub use classify::{ClassifiedError, ErrorCategory, classify_detail};
pub use error::{DomainError, ErrorCode};
pub use rest_endpoint::{RestEndpointConfig, RestEndpointStatus};
pub use service::{ArticleFeed, ArticleService, FeedSource, SlugCheck};
pub use slug::{Slug, SlugError};
pub use user::{UserProfile, UserRole};
