//! Static article catalog used for seeding and offline fallback content.
//!
//! This crate bundles the predefined article bodies the site ships with. The
//! backend uses them in two places:
//!
//! - bulk admin seeding, where every template is created (or updated) in the
//!   remote store and published;
//! - client-facing fallback, where the catalog stands in for live content
//!   when the remote store is unreachable.
//!
//! The catalog is defined at build time and immutable at runtime. It is
//! deliberately independent of backend domain types to avoid circular
//! dependencies.
//!
//! # Example
//!
//! ```
//! let all = article_templates::catalog();
//! assert!(!all.is_empty());
//!
//! let found = article_templates::find_by_slug("recruitment-india-2025-2026");
//! assert!(found.is_some());
//! ```

mod content;

use serde::Serialize;

/// A statically defined article body with its presentation metadata.
///
/// Templates look like articles but are never persisted by this application;
/// the remote store assigns identifiers and timestamps when a template is
/// seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleTemplate {
    /// URL-safe unique identifier, matching the backend slug format.
    pub slug: &'static str,
    /// Display title.
    pub title: &'static str,
    /// Optional byline.
    pub author: Option<&'static str>,
    /// Unordered tag set used for filtering.
    pub tags: &'static [&'static str],
    /// Markdown body.
    pub body: &'static str,
}

static CATALOG: &[ArticleTemplate] = &[
    ArticleTemplate {
        slug: "recruitment-india-2025-2026",
        title: "The State of Recruitment in India (2025\u{2013}2026)",
        author: Some("Editorial Research Team"),
        tags: &[
            "Recruitment",
            "India",
            "Hiring Trends",
            "AI Screening",
            "Skills-First",
        ],
        body: content::RECRUITMENT_INDIA,
    },
    ArticleTemplate {
        slug: "attrition-india-why-employees-leave",
        title: "Attrition in India \u{2014} Why Employees Are Leaving",
        author: Some("Editorial Research Team"),
        tags: &[
            "Attrition",
            "Employee Retention",
            "India",
            "Turnover",
            "HR Strategy",
        ],
        body: content::ATTRITION_INDIA,
    },
    ArticleTemplate {
        slug: "invariant-reduces-attrition",
        title: "How INVARIANT Reduces Attrition",
        author: Some("Editorial Research Team"),
        tags: &[
            "INVARIANT",
            "Attrition",
            "Predictive Analytics",
            "HR Tech",
            "Retention",
        ],
        body: content::INVARIANT_ATTRITION,
    },
    ArticleTemplate {
        slug: "invariant-quad-core-architecture",
        title: "INVARIANT Quad-Core Cognitive Architecture",
        author: Some("Editorial Research Team"),
        tags: &[
            "INVARIANT",
            "AI Architecture",
            "Cognitive Systems",
            "Technical Deep Dive",
        ],
        body: content::INVARIANT_ARCHITECTURE,
    },
    ArticleTemplate {
        slug: "future-of-ai-recruitment",
        title: "The Future of AI in Recruitment: Beyond Resume Screening",
        author: Some("Editorial Research Team"),
        tags: &[
            "AI",
            "Recruitment",
            "Future of Work",
            "HR Technology",
            "Innovation",
        ],
        body: content::FUTURE_OF_AI,
    },
];

/// The full template catalog, in publication order.
#[must_use]
pub fn catalog() -> &'static [ArticleTemplate] {
    CATALOG
}

/// Look up a template by its slug.
#[must_use]
pub fn find_by_slug(slug: &str) -> Option<&'static ArticleTemplate> {
    CATALOG.iter().find(|template| template.slug == slug)
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use std::collections::HashSet;

    use rstest::rstest;

    use super::*;

    #[rstest]
    fn catalog_is_non_empty_with_unique_slugs() {
        let slugs: HashSet<&str> = catalog().iter().map(|t| t.slug).collect();
        assert_eq!(slugs.len(), catalog().len(), "duplicate template slug");
    }

    #[rstest]
    fn slugs_are_url_safe() {
        for template in catalog() {
            assert!(
                template
                    .slug
                    .chars()
                    .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-'),
                "slug {:?} contains illegal characters",
                template.slug
            );
            assert!(!template.slug.starts_with('-') && !template.slug.ends_with('-'));
            assert!(!template.slug.contains("--"));
        }
    }

    #[rstest]
    #[case("recruitment-india-2025-2026")]
    #[case("future-of-ai-recruitment")]
    fn find_by_slug_locates_templates(#[case] slug: &str) {
        let template = find_by_slug(slug).expect("template exists");
        assert_eq!(template.slug, slug);
        assert!(!template.body.trim().is_empty());
        assert!(!template.tags.is_empty());
    }

    #[rstest]
    fn find_by_slug_misses_unknown() {
        assert!(find_by_slug("no-such-template").is_none());
    }
}
