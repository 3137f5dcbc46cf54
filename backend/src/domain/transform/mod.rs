//! Ordered text rewrites applied to every human-facing string.
//!
//! Two independent rewrites run before display: substrate-name masking and
//! terminology simplification. Composition order is fixed, masking first:
//! the masking dictionary targets exact proper-noun-like tokens that the
//! broader simplification dictionary must never get a chance to touch.
//!
//! Given identical input and the two static dictionaries, output is always
//! identical. No state, no I/O.

pub mod mask;
mod protect;
pub mod simplify;

pub use mask::{LAYER_ONE_LINERS, layer_description, layer_label, mask_substrate_names};
pub use simplify::{has_simplification, simplified_term, simplify_terminology};

/// Apply all user-facing text transformations in the correct order:
/// masking, then simplification. Protected spans (code, URLs, emails, HTML
/// tags/entities, Markdown link/image URLs) pass through both rewrites
/// untouched.
#[must_use]
pub fn simplify_user_facing_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let protected = protect::protect(text);
    let masked = mask::mask_raw(&protected.text);
    let simplified = simplify::simplify_raw(&masked);
    protected.restore(&simplified)
}

/// Apply the composed transformation to a list of strings (tags, labels).
#[must_use]
pub fn simplify_user_facing_texts<I, S>(texts: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    texts
        .into_iter()
        .map(|text| simplify_user_facing_text(text.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn masking_runs_before_simplification() {
        // "TRUTH" must become "Layer 3" rather than being left for the
        // simplification dictionary to consider.
        let out = simplify_user_facing_text("TRUTH verifies the algorithm");
        assert_eq!(out, "Layer 3 verifies the process");
    }

    #[rstest]
    fn composition_is_deterministic() {
        let input = "the ACE architecture utilizes heuristics";
        assert_eq!(
            simplify_user_facing_text(input),
            simplify_user_facing_text(input)
        );
    }

    #[rstest]
    fn code_spans_survive_the_whole_composition() {
        let out = simplify_user_facing_text("call `VAR.optimize()` to tune VAR");
        assert_eq!(out, "call `VAR.optimize()` to tune Layer 1");
    }

    #[rstest]
    fn empty_input_stays_empty() {
        assert_eq!(simplify_user_facing_text(""), "");
    }

    #[rstest]
    fn list_helper_maps_every_entry() {
        let out = simplify_user_facing_texts(["VAR", "algorithm"]);
        assert_eq!(out, vec!["Layer 1", "process"]);
    }
}
