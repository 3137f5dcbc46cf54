//! Placeholder machinery shielding non-human text from the rewrites.
//!
//! Code spans, URLs, email addresses, HTML tags/entities, and the URL
//! portion of Markdown link/image syntax must never be altered by the text
//! transforms. Each protected span is swapped for a unique placeholder
//! before any rewrite runs and swapped back afterwards.

use std::sync::OnceLock;

use regex::Regex;

/// Span patterns, checked in this order. The image pattern precedes the
/// bare link-URL tail so a full image match consumes its URL first.
const PROTECTED_PATTERNS: &[&str] = &[
    // URLs and email addresses
    r#"(?i)https?://[^\s<>"{}|\\^`\[\]]+"#,
    r#"(?i)mailto:[^\s<>"{}|\\^`\[\]]+"#,
    r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}",
    // Fenced code blocks, then inline code
    r"(?s)```.*?```",
    r"`[^`]+`",
    // HTML tags and entities
    r"<[^>]+>",
    r"&[a-zA-Z]+;",
    r"&#[0-9]+;",
    // Markdown image syntax, then the URL tail of link syntax
    r"!\[[^\]]*\]\([^)]+\)",
    r"\]\([^)]+\)",
];

fn patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        PROTECTED_PATTERNS
            .iter()
            .map(|source| Regex::new(source).expect("protected pattern is a valid regex"))
            .collect()
    })
}

struct Segment {
    placeholder: String,
    original: String,
}

/// Text with its protected spans swapped for placeholders.
pub(crate) struct ProtectedText {
    /// The text the rewrites operate on.
    pub(crate) text: String,
    segments: Vec<Segment>,
}

impl ProtectedText {
    /// Swap the placeholders in `rewritten` back for the original spans.
    ///
    /// Restoration runs in reverse discovery order: a later pattern (say, a
    /// fenced block) can legitimately contain an earlier placeholder (a URL
    /// found inside the fence), and reinstating outer spans first brings
    /// those inner placeholders back into the text before their own turn.
    pub(crate) fn restore(self, rewritten: &str) -> String {
        let mut restored = rewritten.to_owned();
        for segment in self.segments.iter().rev() {
            restored = restored.replacen(&segment.placeholder, &segment.original, 1);
        }
        restored
    }
}

/// Replace every protected span with a unique placeholder.
pub(crate) fn protect(text: &str) -> ProtectedText {
    let mut out = text.to_owned();
    let mut segments = Vec::new();
    for pattern in patterns() {
        // Each replacement removes the match, so this terminates; the
        // placeholder itself matches none of the patterns.
        while let Some(found) = pattern.find(&out) {
            let placeholder = format!("__PROTECTED_{}__", segments.len());
            let original = found.as_str().to_owned();
            out.replace_range(found.range(), &placeholder);
            segments.push(Segment {
                placeholder,
                original,
            });
        }
    }
    ProtectedText {
        text: out,
        segments,
    }
}
