//! Pattern-based markup removal.
//!
//! This is deliberately not an HTML parser: blocks and tags are removed with regular expressions,
//! so malformed markup (unclosed tags, `>` in attribute values, truncated blocks) may be stripped
//! only partially.

use std::sync::OnceLock;

use regex::Regex;

static SCRIPT_BLOCK: OnceLock<Regex> = OnceLock::new();
static STYLE_BLOCK: OnceLock<Regex> = OnceLock::new();
static TAG: OnceLock<Regex> = OnceLock::new();
static WHITESPACE: OnceLock<Regex> = OnceLock::new();

fn pattern(cell: &'static OnceLock<Regex>, source: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(source).expect("invalid markup pattern"))
}

/// Removes `<script>` / `<style>` blocks (including their bodies), remaining tags and all whitespace
/// from the provided text.
///
/// Removal happens in this order; each step is a single non-overlapping pass. Blocks are matched
/// case-insensitively and may span multiple lines, while a plain tag must fit on a single line.
///
/// # Examples
///
/// ```
/// use char_inventory::strip_markup;
///
/// let html = "<script>var x=1;</script><p>Hi!</p><style>p{color:red}</style>";
/// assert_eq!(strip_markup(html), "Hi!");
/// ```
pub fn strip_markup(text: &str) -> String {
    let script = pattern(&SCRIPT_BLOCK, r"(?is)<script.*?>.*?</script>");
    let style = pattern(&STYLE_BLOCK, r"(?is)<style.*?>.*?</style>");
    let tag = pattern(&TAG, r"<.*?>");
    // Information separators (U+001C..U+001F) are not `White_Space`, but are removed as well
    let whitespace = pattern(&WHITESPACE, r"[\s\x1C-\x1F]+");

    let text = script.replace_all(text, "");
    let text = style.replace_all(&text, "");
    let text = tag.replace_all(&text, "");
    whitespace.replace_all(&text, "").into_owned()
}
