//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the application service and remain testable without I/O.

use std::collections::BTreeSet;

use tokio::sync::Mutex;

use crate::domain::ArticleService;

/// Dependency bundle for HTTP handlers.
pub struct HttpState {
    pub articles: ArticleService,
    pub newsletter: NewsletterSignups,
}

impl HttpState {
    #[must_use]
    pub fn new(articles: ArticleService) -> Self {
        Self {
            articles,
            newsletter: NewsletterSignups::default(),
        }
    }
}

/// In-memory newsletter signup list. There is no mailing backend; the list
/// exists so the signup endpoint has observable, de-duplicated behavior.
#[derive(Debug, Default)]
pub struct NewsletterSignups {
    emails: Mutex<BTreeSet<String>>,
}

impl NewsletterSignups {
    /// Record a signup. Returns false when the address was already present.
    pub async fn subscribe(&self, email: &str) -> bool {
        self.emails.lock().await.insert(email.to_lowercase())
    }

    pub async fn count(&self) -> usize {
        self.emails.lock().await.len()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[actix_rt::test]
    async fn signup_deduplicates_case_insensitively() {
        let signups = NewsletterSignups::default();
        assert!(signups.subscribe("Reader@Example.com").await);
        assert!(!signups.subscribe("reader@example.com").await);
        assert_eq!(signups.count().await, 1);
    }
}
