//! Substrate name masking.
//!
//! A small fixed set of internal code-names must never reach end users;
//! each is replaced site-wide by a generic "Layer N" label. Matching is
//! whole-word and case-insensitive.

use std::sync::OnceLock;

use regex::Regex;

use super::protect::protect;

/// Stable mapping of substrate names to their public layer labels.
const SUBSTRATE_LAYERS: &[(&str, &str)] = &[
    ("VAR", "Layer 1"),
    ("ACE", "Layer 2"),
    ("TRUTH", "Layer 3"),
    ("FLUIDINTEL", "Layer 4"),
];

/// High-level one-line descriptions for each layer, nothing revealing.
pub const LAYER_ONE_LINERS: &[&str] = &[
    "Explores the full possibility space without filtering or judgment.",
    "Enforces governance constraints and manages decision timing.",
    "Verifies claims against real-time data sources.",
    "Executes only authorized actions with no interpretation.",
];

fn substrate_regexes() -> &'static [(Regex, &'static str)] {
    static REGEXES: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    REGEXES.get_or_init(|| {
        SUBSTRATE_LAYERS
            .iter()
            .map(|&(substrate, label)| {
                let pattern =
                    Regex::new(&format!(r"(?i)\b{substrate}\b")).expect("substrate regex is valid");
                (pattern, label)
            })
            .collect()
    })
}

/// Apply the masking dictionary to already-protected text.
pub(crate) fn mask_raw(text: &str) -> String {
    let mut masked = text.to_owned();
    for (pattern, label) in substrate_regexes() {
        masked = pattern.replace_all(&masked, *label).into_owned();
    }
    masked
}

/// Mask substrate names in arbitrary text, leaving code spans, URLs, and
/// other protected segments untouched. Idempotent: layer labels contain no
/// substrate name, so re-masking is a no-op.
#[must_use]
pub fn mask_substrate_names(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let protected = protect(text);
    let masked = mask_raw(&protected.text);
    protected.restore(&masked)
}

/// Look up the public label for a substrate name, case-insensitively.
/// Unknown names come back unchanged.
#[must_use]
pub fn layer_label(substrate: &str) -> String {
    let upper = substrate.to_uppercase();
    SUBSTRATE_LAYERS
        .iter()
        .find(|&&(name, _)| name == upper)
        .map_or_else(|| substrate.to_owned(), |&(_, label)| label.to_owned())
}

/// One-line description for layer `n` (1-based).
#[must_use]
pub fn layer_description(n: usize) -> Option<&'static str> {
    n.checked_sub(1).and_then(|i| LAYER_ONE_LINERS.get(i)).copied()
}
