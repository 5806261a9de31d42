//! Document normalization.
//!
//! Raw itinerary exports encode vertical tabs, form feeds, and carriage
//! returns as literal two-character escapes (`\v`, `\f`, `\r`). Real CRLF
//! and CR line terminators fold to bare newlines, the literal escapes fold
//! into newlines, and runs of blank lines collapse, before any per-line
//! rewriting happens.

use std::sync::LazyLock;

use regex::Regex;

/// Escape sequences folded into a newline. These are literal backslash
/// sequences in the text, not control characters.
const LINE_BREAK_ESCAPES: [&str; 3] = ["\\v", "\\f", "\\r"];

static BLANK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("invalid blank-run regex"));

/// Fold line terminators and escape sequences into newlines, then collapse
/// blank-line runs.
///
/// Real `\r\n` and lone `\r` terminators become `\n` first, so documents
/// re-join uniformly whatever line-ending style they arrived with. Two or
/// more consecutive newlines then become exactly two, so any number of
/// blank lines shrinks to a single one. Single newlines are untouched. The
/// transformation is pure and idempotent.
pub fn normalize(raw: &str) -> String {
    let mut text = raw.replace("\r\n", "\n").replace('\r', "\n");
    for escape in LINE_BREAK_ESCAPES {
        text = text.replace(escape, "\n");
    }
    BLANK_RUN.replace_all(&text, "\n\n").into_owned()
}
