//! HTML helper functions

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref FIRST_PARAGRAPH: Regex = Regex::new(r"(?is)<p(?:\s[^>]*)?>.*?</p>").unwrap();
}

/// Elements that start a new line in [`structured_text`]
const BLOCK_ELEMENTS: &[&str] = &[
    "address",
    "article",
    "aside",
    "blockquote",
    "br",
    "dd",
    "div",
    "dl",
    "dt",
    "figcaption",
    "figure",
    "footer",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hr",
    "li",
    "main",
    "nav",
    "ol",
    "p",
    "pre",
    "section",
    "table",
    "td",
    "th",
    "tr",
    "ul",
];

/// Return the outer HTML of the first `<p>` element, if any
///
/// # Examples
/// ```
/// use mdposts::helpers::first_paragraph;
///
/// let html = "<h1>Title</h1>\n<p>First <em>one</em></p>\n<p>Second</p>";
/// assert_eq!(first_paragraph(html), Some("<p>First <em>one</em></p>"));
/// ```
pub fn first_paragraph(html: &str) -> Option<&str> {
    FIRST_PARAGRAPH.find(html).map(|m| m.as_str())
}

/// Markup-free text of an HTML fragment
///
/// Block elements become line breaks, runs of whitespace inside a line
/// collapse to a single space, blank lines are dropped and entities are
/// decoded.
pub fn structured_text(html: &str) -> String {
    let mut raw = String::with_capacity(html.len());
    let mut tag = String::new();
    let mut in_tag = false;

    let mut chars = html.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            // Only `<` followed by a tag name, `/` or `!` opens markup
            '<' if !in_tag
                && chars
                    .peek()
                    .is_some_and(|n| n.is_ascii_alphabetic() || *n == '/' || *n == '!') =>
            {
                in_tag = true;
                tag.clear();
            }
            '>' if in_tag => {
                in_tag = false;
                if is_block_tag(&tag) {
                    raw.push('\n');
                }
            }
            _ if in_tag => tag.push(c),
            _ => raw.push(c),
        }
    }

    let decoded = html_escape::decode_html_entities(&raw);

    decoded
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_block_tag(tag: &str) -> bool {
    let name: String = tag
        .trim_start_matches('/')
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase();

    BLOCK_ELEMENTS.contains(&name.as_str())
}
