//! Slug validation and sanitization for article identifiers.
//!
//! Slugs are URL-safe identifiers: lowercase ASCII alphanumeric segments
//! joined by single hyphens, with no leading, trailing, or doubled hyphens.
//! A slug is assigned once at article creation and never mutated.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Validation errors returned by [`Slug::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlugError {
    /// The candidate was empty after trimming.
    #[error("slug must not be empty")]
    Empty,
    /// The candidate contains characters outside `[a-z0-9-]` or has a
    /// leading, trailing, or doubled hyphen.
    #[error("slug must be lowercase letters, numbers, and single hyphens only")]
    InvalidFormat,
}

/// Validated, URL-safe article identifier.
///
/// ## Invariants
/// - Matches `[a-z0-9]+(-[a-z0-9]+)*`.
/// - Immutable once the article exists; updates never carry a slug.
///
/// # Examples
/// ```
/// use pressroom::domain::Slug;
///
/// let slug = Slug::new("my-article-1").unwrap();
/// assert_eq!(slug.as_str(), "my-article-1");
/// assert!(Slug::new("My Article").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
#[schema(value_type = String, example = "my-article-1")]
pub struct Slug(String);

impl Slug {
    /// Validate and construct a [`Slug`] from borrowed input.
    pub fn new(candidate: impl AsRef<str>) -> Result<Self, SlugError> {
        let candidate = candidate.as_ref();
        if candidate.is_empty() {
            return Err(SlugError::Empty);
        }
        if !is_valid_slug(candidate) {
            return Err(SlugError::InvalidFormat);
        }
        Ok(Self(candidate.to_owned()))
    }

    /// The underlying string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

impl TryFrom<String> for Slug {
    type Error = SlugError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Return `true` when `value` is a valid article slug.
#[must_use]
pub fn is_valid_slug(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
        && value
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
}

/// Replicate the editor input filter: lowercase the candidate and replace
/// every character outside `[a-z0-9-]` with a hyphen. The result is a best
/// effort and may still fail [`Slug::new`] (e.g. doubled hyphens); callers
/// validate separately.
#[must_use]
pub fn sanitize(candidate: &str) -> String {
    candidate
        .to_lowercase()
        .chars()
        .map(|ch| {
            if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' {
                ch
            } else {
                '-'
            }
        })
        .collect()
}
