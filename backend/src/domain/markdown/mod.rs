//! Constrained Markdown to sanitized HTML, without a parser dependency.
//!
//! The renderer is a total function: any string in, renderable markup out,
//! never an error. Block structure is decided by an explicit per-line state
//! machine rather than chained substring replacement, which makes the
//! precedence order (fence, heading, blockquote, unordered item, ordered
//! item, rule, paragraph) a visible decision table.
//!
//! Sanitization happens exactly once: every line is entity-escaped for
//! `&`, `<`, and `>` as it enters a block, including code lines, and no
//! segment is ever escaped a second time. Code content skips the text
//! transforms entirely; all other human-visible text runs through them.

mod inline;

use inline::render_inline;

/// Markup emitted for empty or whitespace-only input.
const EMPTY_PLACEHOLDER: &str = "<p class=\"markdown-empty\">No content available.</p>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn tag(self) -> &'static str {
        match self {
            Self::Unordered => "ul",
            Self::Ordered => "ol",
        }
    }
}

#[derive(Default)]
struct Renderer {
    out: String,
    paragraph: Vec<String>,
    list: Option<(ListKind, Vec<String>)>,
    code: Vec<String>,
    in_fence: bool,
}

/// Render a constrained Markdown dialect to sanitized HTML.
///
/// # Examples
/// ```
/// let html = pressroom::domain::markdown::render("# Title");
/// assert_eq!(html, "<h1>Title</h1>");
/// ```
#[must_use]
pub fn render(content: &str) -> String {
    if content.trim().is_empty() {
        return EMPTY_PLACEHOLDER.to_owned();
    }

    let mut renderer = Renderer::default();
    for line in content.lines() {
        renderer.step(line);
    }
    renderer.finish()
}

impl Renderer {
    /// Advance the state machine by one input line.
    fn step(&mut self, line: &str) {
        let trimmed = line.trim();

        // Fence markers toggle the code state regardless of anything else.
        if trimmed.starts_with("```") {
            self.flush_paragraph();
            self.flush_list();
            if self.in_fence {
                self.flush_code();
                self.in_fence = false;
            } else {
                self.in_fence = true;
            }
            return;
        }

        if self.in_fence {
            self.code.push(escape(line));
            return;
        }

        if trimmed.is_empty() {
            self.flush_paragraph();
            self.flush_list();
            return;
        }

        if let Some((level, rest)) = heading(trimmed) {
            self.flush_paragraph();
            self.flush_list();
            let body = render_inline(&escape(rest));
            self.push_block(format!("<h{level}>{body}</h{level}>"));
            return;
        }

        if let Some(rest) = trimmed.strip_prefix("> ") {
            self.flush_paragraph();
            self.flush_list();
            let body = render_inline(&escape(rest));
            self.push_block(format!("<blockquote>{body}</blockquote>"));
            return;
        }

        if let Some(rest) = unordered_item(trimmed) {
            self.flush_paragraph();
            self.push_list_item(ListKind::Unordered, rest);
            return;
        }

        if let Some(rest) = ordered_item(trimmed) {
            self.flush_paragraph();
            self.push_list_item(ListKind::Ordered, rest);
            return;
        }

        if trimmed == "---" || trimmed == "***" {
            self.flush_paragraph();
            self.flush_list();
            self.push_block("<hr />".to_owned());
            return;
        }

        self.flush_list();
        self.paragraph.push(render_inline(&escape(trimmed)));
    }

    /// Flush whatever buffers remain. An unterminated fence degrades
    /// gracefully into a code block instead of losing its content.
    fn finish(mut self) -> String {
        self.flush_paragraph();
        self.flush_list();
        self.flush_code();
        self.out
    }

    fn push_list_item(&mut self, kind: ListKind, item: &str) {
        let rendered = render_inline(&escape(item));
        match &mut self.list {
            Some((current, items)) if *current == kind => items.push(rendered),
            _ => {
                // A change of list type closes the current list.
                self.flush_list();
                self.list = Some((kind, vec![rendered]));
            }
        }
    }

    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let body = self.paragraph.join("<br />");
        self.paragraph.clear();
        self.push_block(format!("<p>{body}</p>"));
    }

    fn flush_list(&mut self) {
        let Some((kind, items)) = self.list.take() else {
            return;
        };
        let tag = kind.tag();
        let mut block = format!("<{tag}>");
        for item in items {
            block.push_str("<li>");
            block.push_str(&item);
            block.push_str("</li>");
        }
        block.push_str(&format!("</{tag}>"));
        self.push_block(block);
    }

    fn flush_code(&mut self) {
        if self.code.is_empty() {
            return;
        }
        let body = self.code.join("\n");
        self.code.clear();
        self.push_block(format!("<pre><code>{body}</code></pre>"));
    }

    fn push_block(&mut self, block: String) {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
        self.out.push_str(&block);
    }
}

/// Entity-escape the three HTML metacharacters, ampersand first.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// `#` through `####` followed by a space.
fn heading(trimmed: &str) -> Option<(usize, &str)> {
    for level in (1..=4).rev() {
        let prefix: String = "#".repeat(level) + " ";
        if let Some(rest) = trimmed.strip_prefix(&prefix) {
            return Some((level, rest));
        }
    }
    None
}

/// `- item` or `* item`.
fn unordered_item(trimmed: &str) -> Option<&str> {
    trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
}

/// `1. item` — a run of digits, a dot, then whitespace.
fn ordered_item(trimmed: &str) -> Option<&str> {
    let digits = trimmed.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = trimmed.get(digits..)?.strip_prefix('.')?;
    let item = rest.trim_start();
    if item.is_empty() || item.len() == rest.len() {
        return None;
    }
    Some(item)
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("")]
    #[case("   \n\t  \n")]
    fn empty_input_yields_placeholder(#[case] input: &str) {
        assert_eq!(render(input), EMPTY_PLACEHOLDER);
    }

    #[rstest]
    #[case("# One", "<h1>One</h1>")]
    #[case("## Two", "<h2>Two</h2>")]
    #[case("### Three", "<h3>Three</h3>")]
    #[case("#### Four", "<h4>Four</h4>")]
    #[case("##### Five", "<p>##### Five</p>")]
    fn headings_one_through_four(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(render(input), expected);
    }

    #[rstest]
    fn blockquote_renders() {
        assert_eq!(render("> quoted"), "<blockquote>quoted</blockquote>");
    }

    #[rstest]
    #[case("---")]
    #[case("***")]
    fn horizontal_rules(#[case] input: &str) {
        assert_eq!(render(input), "<hr />");
    }

    #[rstest]
    fn consecutive_items_group_into_one_list() {
        let html = render("- a\n- b\n* c");
        assert_eq!(html, "<ul><li>a</li><li>b</li><li>c</li></ul>");
    }

    #[rstest]
    fn list_kind_change_closes_the_list() {
        let html = render("- a\n1. b");
        assert_eq!(html, "<ul><li>a</li></ul>\n<ol><li>b</li></ol>");
    }

    #[rstest]
    fn blank_line_closes_a_list() {
        let html = render("- a\n\n- b");
        assert_eq!(html, "<ul><li>a</li></ul>\n<ul><li>b</li></ul>");
    }

    #[rstest]
    fn paragraph_lines_join_with_breaks() {
        let html = render("one\ntwo\n\nthree");
        assert_eq!(html, "<p>one<br />two</p>\n<p>three</p>");
    }

    #[rstest]
    fn metacharacters_escape_outside_code() {
        let html = render("a < b & c > d");
        assert_eq!(html, "<p>a &lt; b &amp; c &gt; d</p>");
    }

    #[rstest]
    fn injected_markup_never_survives() {
        let html = render("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[rstest]
    fn fenced_code_is_verbatim_and_untransformed() {
        let html = render("```\nlet x = VAR;\nalgorithm();\n```");
        assert_eq!(html, "<pre><code>let x = VAR;\nalgorithm();</code></pre>");
    }

    #[rstest]
    fn fenced_code_is_escaped_exactly_once() {
        let html = render("```\na & b\n```");
        assert_eq!(html, "<pre><code>a &amp; b</code></pre>");
        assert!(!html.contains("&amp;amp;"));
    }

    #[rstest]
    fn unterminated_fence_degrades_to_a_code_block() {
        let html = render("```\ndangling");
        assert_eq!(html, "<pre><code>dangling</code></pre>");
    }

    #[rstest]
    fn heading_wins_over_list_prefix_overlap() {
        // "# - item" is a heading whose text happens to start with a dash.
        let html = render("# - item");
        assert_eq!(html, "<h1>- item</h1>");
    }

    #[rstest]
    fn human_text_is_transformed_but_urls_are_not() {
        let html = render("the algorithm is [here](/docs/algorithm)");
        assert_eq!(
            html,
            "<p>the process is <a href=\"/docs/algorithm\">here</a></p>"
        );
    }

    #[rstest]
    fn renderer_is_total_over_hostile_input() {
        // A lone fence marker legitimately renders to nothing; the property
        // under test is that hostile input never panics and never smuggles
        // raw angle brackets through as text.
        for input in ["***bold*", "```", "];`[", "1.", "> ", "#", "![", "<x>"] {
            let html = render(input);
            assert!(!html.contains("<x>"), "{input:?}: {html}");
        }
    }

    #[rstest]
    fn full_document_renders_every_block_kind() {
        let doc = "# Title\n\nintro text\n\n- one\n- two\n\n1. first\n2. second\n\n\
                   > a quote\n\n```\ncode here\n```\n\n---\n\nclosing";
        let html = render(doc);
        for needle in [
            "<h1>", "<p>", "<ul>", "<ol>", "<blockquote>", "<pre><code>", "<hr />",
        ] {
            assert!(html.contains(needle), "missing {needle} in {html}");
        }
    }
}
