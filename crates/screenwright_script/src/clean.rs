//! Cleanup of raw generator output.
//!
//! Models wrap screenplay text in chatter and markup. This step runs on every
//! response before it is appended to the draft; the segmenter itself never
//! sees the raw text.

use regex::Regex;
use std::sync::LazyLock;

static LINE_BREAK_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("Valid line break regex"));

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?[A-Za-z][^>]*>").expect("Valid HTML tag regex"));

static LEADING_BOILERPLATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\A\s*(?:(?:sure|certainly|of course|okay|ok|absolutely)[!,.]*\s*)?here(?:'s| is| are)\b[^\n]*:[ \t]*(?:\n|\z)",
    )
    .expect("Valid boilerplate regex")
});

static EXCESS_BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*\n(?:[ \t]*\n)+").expect("Valid blank line regex"));

/// Entities the hosted models emit, decoded after tags are stripped.
const ENTITIES: [(&str, &str); 6] = [
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&amp;", "&"),
];

/// Normalize a generator response into plain screenplay text.
///
/// Converts `<br>` to line breaks, strips remaining HTML tags, decodes common
/// entities, drops a leading "Here is the screenplay:" style line, collapses
/// runs of blank lines into one and trims the result.
///
/// # Examples
///
/// ```
/// use screenwright_script::clean_response;
///
/// let raw = "Sure! Here is the scene:\n<b>INT. DINER - NIGHT</b>\n\n\n\nRain &amp; neon.";
/// assert_eq!(clean_response(raw), "INT. DINER - NIGHT\n\nRain & neon.");
/// ```
pub fn clean_response(raw: &str) -> String {
    let text = raw.replace("\r\n", "\n");
    let text = LINE_BREAK_TAG.replace_all(&text, "\n");
    let text = HTML_TAG.replace_all(&text, "");

    let mut text = text.into_owned();
    for (entity, replacement) in ENTITIES {
        text = text.replace(entity, replacement);
    }

    let text = LEADING_BOILERPLATE.replace(&text, "");
    let text = EXCESS_BLANK_LINES.replace_all(&text, "\n\n");

    let cleaned = text.trim().to_string();
    tracing::debug!(
        raw_len = raw.len(),
        cleaned_len = cleaned.len(),
        "Cleaned generator response"
    );
    cleaned
}
