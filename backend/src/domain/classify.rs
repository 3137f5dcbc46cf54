//! Best-effort classification of remote store failures.
//!
//! The remote store exposes no structured error code, so classification is
//! substring matching against the failure text, checked in a fixed
//! precedence order. This is a documented approximation: wording changes on
//! the store side can shift a failure between categories, which only ever
//! changes the banner copy and retry affordance, never correctness of data.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::article_store::StoreError;

/// Failure category driving UI decisions (retry button, empty state, ...).
///
/// The wire names keep the original taxonomy, including the
/// `canister-stopped` / `canister-unavailable` spellings clients expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorCategory {
    /// The remote service reports itself stopped.
    CanisterStopped,
    /// Generic remote service unavailability.
    CanisterUnavailable,
    /// Connectivity problem between this service and the store.
    NetworkError,
    /// The caller is not permitted to perform the operation.
    Unauthorized,
    /// The requested entity does not exist.
    NotFound,
    /// Anything else; treated as retryable by default.
    Unknown,
}

/// A raw failure mapped to a stable category, user-facing copy, and a
/// retryability flag. Request-scoped; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedError {
    /// Stable category tag.
    pub category: ErrorCategory,
    /// Copy safe to show to end users.
    pub user_message: String,
    /// Raw failure text for optional expandable display.
    pub technical_details: String,
    /// Whether offering a retry button makes sense.
    pub is_retryable: bool,
}

impl ClassifiedError {
    fn new(category: ErrorCategory, user_message: &str, details: &str, is_retryable: bool) -> Self {
        Self {
            category,
            user_message: user_message.to_owned(),
            technical_details: details.to_owned(),
            is_retryable,
        }
    }
}

/// Classify a raw failure string.
///
/// Precedence: service-stopped indicators, then network/connectivity, then
/// authorization, then not-found, then generic unavailability, then unknown.
#[must_use]
pub fn classify_detail(detail: &str) -> ClassifiedError {
    let stopped = ["is stopped", "IC0508", "does not have a CallContextManager"];
    if stopped.iter().any(|needle| detail.contains(needle)) {
        return ClassifiedError::new(
            ErrorCategory::CanisterStopped,
            "The service is temporarily unavailable. Please try again later or contact support.",
            detail,
            true,
        );
    }

    let network = ["fetch", "network", "timeout", "ECONNREFUSED"];
    if network.iter().any(|needle| detail.contains(needle)) {
        return ClassifiedError::new(
            ErrorCategory::NetworkError,
            "Unable to connect to the service. Please check your internet connection and try again.",
            detail,
            true,
        );
    }

    let unauthorized = ["Unauthorized", "Access denied", "permission"];
    if unauthorized.iter().any(|needle| detail.contains(needle)) {
        return ClassifiedError::new(
            ErrorCategory::Unauthorized,
            "You do not have permission to access this content.",
            detail,
            false,
        );
    }

    let not_found = ["not found", "does not exist"];
    if not_found.iter().any(|needle| detail.contains(needle)) {
        return ClassifiedError::new(
            ErrorCategory::NotFound,
            "The requested content could not be found.",
            detail,
            false,
        );
    }

    let unavailable = ["canister", "replica", "reject"];
    if unavailable.iter().any(|needle| detail.contains(needle)) {
        return ClassifiedError::new(
            ErrorCategory::CanisterUnavailable,
            "The service is currently unavailable. Please try again in a few moments.",
            detail,
            true,
        );
    }

    ClassifiedError::new(
        ErrorCategory::Unknown,
        "An unexpected error occurred. Please try again or contact support if the problem persists.",
        detail,
        true,
    )
}

/// Classify a store port error via its display text.
#[must_use]
pub fn classify_store_error(error: &StoreError) -> ClassifiedError {
    classify_detail(&error.to_string())
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("canister is stopped", ErrorCategory::CanisterStopped, true)]
    #[case("IC0508: cannot call", ErrorCategory::CanisterStopped, true)]
    #[case("request timeout after 30s", ErrorCategory::NetworkError, true)]
    #[case("connect ECONNREFUSED 127.0.0.1", ErrorCategory::NetworkError, true)]
    #[case("Unauthorized", ErrorCategory::Unauthorized, false)]
    #[case("caller lacks permission", ErrorCategory::Unauthorized, false)]
    #[case("article not found", ErrorCategory::NotFound, false)]
    #[case("slug does not exist", ErrorCategory::NotFound, false)]
    #[case("replica rejected the call", ErrorCategory::CanisterUnavailable, true)]
    #[case("something else entirely", ErrorCategory::Unknown, true)]
    fn classification_precedence(
        #[case] detail: &str,
        #[case] expected: ErrorCategory,
        #[case] retryable: bool,
    ) {
        let classified = classify_detail(detail);
        assert_eq!(classified.category, expected);
        assert_eq!(classified.is_retryable, retryable);
        assert_eq!(classified.technical_details, detail);
    }

    #[rstest]
    fn stopped_wins_over_generic_canister_match() {
        // "canister is stopped" contains both the stopped and the generic
        // unavailability needles; precedence keeps it in the stopped bucket.
        let classified = classify_detail("canister is stopped");
        assert_eq!(classified.category, ErrorCategory::CanisterStopped);
    }

    #[rstest]
    fn categories_serialize_kebab_case() {
        let value =
            serde_json::to_value(ErrorCategory::CanisterStopped).expect("serializable");
        assert_eq!(value, serde_json::json!("canister-stopped"));
    }
}
