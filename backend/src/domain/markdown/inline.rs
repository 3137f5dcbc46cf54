//! Inline span rendering within a single line.
//!
//! Operates on text that has already been entity-escaped exactly once.
//! Substitution precedence at any position: image, link, bold, italic,
//! inline code. Unmatched markers degrade to literal text. URLs are
//! preserved verbatim; every human-visible fragment passes through the
//! text-transform composition on its way into the output.

use crate::domain::transform::simplify_user_facing_text;

/// Render inline constructs in an escaped line fragment.
pub(crate) fn render_inline(text: &str) -> String {
    let mut out = String::new();
    let mut plain = String::new();
    let mut rest = text;

    while !rest.is_empty() {
        if let Some((html, consumed)) = match_image(rest)
            .or_else(|| match_link(rest))
            .or_else(|| match_emphasis(rest))
            .or_else(|| match_code(rest))
        {
            flush_plain(&mut out, &mut plain);
            out.push_str(&html);
            rest = &rest[consumed..];
        } else {
            let mut chars = rest.chars();
            if let Some(ch) = chars.next() {
                plain.push(ch);
            }
            rest = chars.as_str();
        }
    }

    flush_plain(&mut out, &mut plain);
    out
}

fn flush_plain(out: &mut String, plain: &mut String) {
    if !plain.is_empty() {
        out.push_str(&simplify_user_facing_text(plain));
        plain.clear();
    }
}

/// Escape double quotes for insertion into an HTML attribute. Ampersands
/// and angle brackets were escaped before inline parsing began.
fn attr_escape(value: &str) -> String {
    value.replace('"', "&quot;")
}

/// `![alt](url)` at the start of `rest`.
fn match_image(rest: &str) -> Option<(String, usize)> {
    let body = rest.strip_prefix("![")?;
    let alt_end = body.find("](")?;
    let url_end = body[alt_end + 2..].find(')')?;
    let alt = &body[..alt_end];
    let url = &body[alt_end + 2..alt_end + 2 + url_end];
    if url.is_empty() {
        return None;
    }
    let html = format!(
        "<img src=\"{}\" alt=\"{}\" />",
        attr_escape(url),
        attr_escape(&simplify_user_facing_text(alt)),
    );
    Some((html, 2 + alt_end + 2 + url_end + 1))
}

/// `[text](url)` at the start of `rest`.
fn match_link(rest: &str) -> Option<(String, usize)> {
    let body = rest.strip_prefix('[')?;
    let text_end = body.find("](")?;
    let url_end = body[text_end + 2..].find(')')?;
    let text = &body[..text_end];
    let url = &body[text_end + 2..text_end + 2 + url_end];
    if text.is_empty() || url.is_empty() {
        return None;
    }
    // External links open in a new tab without an opener reference.
    let external = url.starts_with("http://") || url.starts_with("https://");
    let rel = if external {
        " target=\"_blank\" rel=\"noopener noreferrer\""
    } else {
        ""
    };
    let html = format!(
        "<a href=\"{}\"{rel}>{}</a>",
        attr_escape(url),
        simplify_user_facing_text(text),
    );
    Some((html, 1 + text_end + 2 + url_end + 1))
}

/// `**text**`, `__text__`, `*text*`, or `_text_` at the start of `rest`.
/// Double markers are tried before single ones so bold wins over italic.
fn match_emphasis(rest: &str) -> Option<(String, usize)> {
    for (marker, tag) in [("**", "strong"), ("__", "strong"), ("*", "em"), ("_", "em")] {
        let Some(body) = rest.strip_prefix(marker) else {
            continue;
        };
        let Some(inner_end) = body.find(marker) else {
            continue;
        };
        if inner_end == 0 {
            continue;
        }
        let inner = &body[..inner_end];
        let html = format!("<{tag}>{}</{tag}>", simplify_user_facing_text(inner));
        return Some((html, marker.len() + inner_end + marker.len()));
    }
    None
}

/// `` `code` `` at the start of `rest`. Content is inserted as-is: it was
/// escaped once with the rest of the line and is never transformed.
fn match_code(rest: &str) -> Option<(String, usize)> {
    let body = rest.strip_prefix('`')?;
    let inner_end = body.find('`')?;
    if inner_end == 0 {
        return None;
    }
    let inner = &body[..inner_end];
    Some((format!("<code>{inner}</code>"), 1 + inner_end + 1))
}
