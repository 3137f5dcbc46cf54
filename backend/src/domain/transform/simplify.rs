//! Terminology simplification.
//!
//! Replaces a fixed dictionary of complex words and phrases with plainer
//! synonyms while preserving meaning. Matching is whole-word and
//! case-insensitive; a matched span that started with a capital letter
//! keeps a leading capital on its replacement.
//!
//! The dictionary is configuration data, not logic: English morphology
//! makes heuristic substitution over- or under-match at the margins, and
//! adjusting an entry must never require touching the rewrite machinery.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::protect::protect;

/// Single source of truth: complex term to its simpler alternative.
const TERMINOLOGY: &[(&str, &str)] = &[
    // Technical/Academic terms
    ("geometry", "structure"),
    ("geometries", "structures"),
    ("geometric", "structural"),
    ("entropy", "randomness"),
    ("algorithm", "process"),
    ("algorithms", "processes"),
    ("algorithmic", "process-based"),
    ("heuristic", "rule of thumb"),
    ("heuristics", "rules of thumb"),
    ("paradigm", "approach"),
    ("paradigms", "approaches"),
    ("methodology", "method"),
    ("methodologies", "methods"),
    ("optimize", "improve"),
    ("optimization", "improvement"),
    ("optimized", "improved"),
    ("optimizing", "improving"),
    ("utilize", "use"),
    ("utilization", "use"),
    ("utilized", "used"),
    ("utilizing", "using"),
    ("leverage", "use"),
    ("leveraging", "using"),
    ("leveraged", "used"),
    ("facilitate", "help"),
    ("facilitates", "helps"),
    ("facilitated", "helped"),
    ("facilitating", "helping"),
    ("implement", "build"),
    ("implementation", "building"),
    ("implemented", "built"),
    ("implementing", "building"),
    ("synthesize", "combine"),
    ("synthesis", "combination"),
    ("synthesized", "combined"),
    ("synthesizing", "combining"),
    ("aggregate", "combine"),
    ("aggregation", "combination"),
    ("aggregated", "combined"),
    ("aggregating", "combining"),
    ("iterate", "repeat"),
    ("iteration", "repetition"),
    ("iterated", "repeated"),
    ("iterating", "repeating"),
    ("iterative", "repeated"),
    ("constraint", "limit"),
    ("constraints", "limits"),
    ("constrained", "limited"),
    ("parameter", "setting"),
    ("parameters", "settings"),
    ("metric", "measure"),
    ("metrics", "measures"),
    ("quantify", "measure"),
    ("quantified", "measured"),
    ("quantifying", "measuring"),
    ("quantitative", "measurable"),
    ("qualitative", "descriptive"),
    ("empirical", "observed"),
    ("theoretical", "conceptual"),
    ("hypothesis", "theory"),
    ("hypotheses", "theories"),
    ("hypothetical", "theoretical"),
    ("anomaly", "unusual pattern"),
    ("anomalies", "unusual patterns"),
    ("anomalous", "unusual"),
    ("trajectory", "path"),
    ("trajectories", "paths"),
    ("cognitive", "thinking"),
    ("cognition", "thinking"),
    ("architecture", "structure"),
    ("architectures", "structures"),
    ("infrastructure", "foundation"),
    ("framework", "structure"),
    ("frameworks", "structures"),
    ("ecosystem", "environment"),
    ("ecosystems", "environments"),
    ("holistic", "complete"),
    ("comprehensive", "complete"),
    ("granular", "detailed"),
    ("granularity", "detail level"),
    ("scalable", "expandable"),
    ("scalability", "expandability"),
    ("robust", "strong"),
    ("robustness", "strength"),
    ("resilient", "adaptable"),
    ("resilience", "adaptability"),
    ("dynamic", "changing"),
    ("static", "fixed"),
    ("volatile", "unstable"),
    ("volatility", "instability"),
    ("deterministic", "predictable"),
    ("stochastic", "random"),
    ("probabilistic", "chance-based"),
    ("correlation", "connection"),
    ("correlations", "connections"),
    ("correlated", "connected"),
    ("causation", "cause"),
    ("causality", "cause and effect"),
    ("causal", "causing"),
];

fn terminology_regexes() -> &'static [(Regex, &'static str)] {
    static REGEXES: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    REGEXES.get_or_init(|| {
        TERMINOLOGY
            .iter()
            .map(|&(complex, simple)| {
                let pattern = Regex::new(&format!(r"(?i)\b{complex}\b"))
                    .expect("terminology regex is valid");
                (pattern, simple)
            })
            .collect()
    })
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Apply the dictionary to already-protected text.
pub(crate) fn simplify_raw(text: &str) -> String {
    let mut simplified = text.to_owned();
    for (pattern, simple) in terminology_regexes() {
        simplified = pattern
            .replace_all(&simplified, |caps: &Captures<'_>| {
                let matched = &caps[0];
                let leading_capital = matched
                    .chars()
                    .next()
                    .is_some_and(char::is_uppercase);
                if leading_capital {
                    capitalize_first(simple)
                } else {
                    (*simple).to_owned()
                }
            })
            .into_owned();
    }
    simplified
}

/// Simplify terminology in arbitrary text, leaving code spans, URLs,
/// emails, and other protected segments untouched.
#[must_use]
pub fn simplify_terminology(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let protected = protect(text);
    let simplified = simplify_raw(&protected.text);
    protected.restore(&simplified)
}

/// Look up the simpler alternative for a specific term, case-insensitively.
#[must_use]
pub fn simplified_term(term: &str) -> Option<&'static str> {
    let lower = term.to_lowercase();
    TERMINOLOGY
        .iter()
        .find(|&&(complex, _)| complex == lower)
        .map(|&(_, simple)| simple)
}

/// Whether a term has a simpler alternative in the dictionary.
#[must_use]
pub fn has_simplification(term: &str) -> bool {
    simplified_term(term).is_some()
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("the algorithm converged", "the process converged")]
    #[case("Algorithm design", "Process design")]
    #[case("heuristics help", "rules of thumb help")]
    #[case("a Comprehensive guide", "a Complete guide")]
    fn replaces_whole_words_preserving_leading_capital(
        #[case] input: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(simplify_terminology(input), expected);
    }

    #[rstest]
    #[case("algorithmically stays")]
    #[case("parameterize stays")]
    fn partial_words_survive(#[case] input: &str) {
        assert_eq!(simplify_terminology(input), input);
    }

    #[rstest]
    #[case("run `optimize()` now")]
    #[case("see https://example.com/optimize")]
    #[case("mail optimize@example.com")]
    fn protected_segments_survive(#[case] input: &str) {
        assert_eq!(simplify_terminology(input), input);
    }

    #[rstest]
    fn mixed_text_only_rewrites_outside_protection() {
        let simplified =
            simplify_terminology("optimize the loop, then run `optimize()` again");
        assert_eq!(simplified, "improve the loop, then run `optimize()` again");
    }

    #[rstest]
    #[case("Optimize", Some("improve"))]
    #[case("ALGORITHM", Some("process"))]
    #[case("nonword", None)]
    fn dictionary_lookup(#[case] term: &str, #[case] expected: Option<&str>) {
        assert_eq!(simplified_term(term), expected);
        assert_eq!(has_simplification(term), expected.is_some());
    }
}
