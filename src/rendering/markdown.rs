//! CommonMark to HTML for the report prose.

use pulldown_cmark::{html, Options, Parser};

/// Render CommonMark text to an HTML fragment.
///
/// The text is dedented first: prose written as an indented literal would
/// otherwise turn into a code block.
pub fn markdown_to_html(text: &str) -> String {
    let source = dedent(text);
    let parser = Parser::new_ext(
        &source,
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH,
    );
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Remove the common leading whitespace of all non-blank lines and trim
/// surrounding blank lines.
pub fn dedent(text: &str) -> String {
    let indent = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);

    text.lines()
        .map(|line| {
            if line.trim().is_empty() {
                ""
            } else {
                line.get(indent..).unwrap_or_else(|| line.trim_start())
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim_matches('\n')
        .to_string()
}
