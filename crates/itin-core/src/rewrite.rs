//! Per-line token rewriting.
//!
//! Each line is rebuilt by scanning it for token patterns and substituting
//! every match in one left-to-right pass per pattern. The rules run in a
//! fixed order: 4-character ICAO patterns before 3-character IATA patterns,
//! so a longer token is never partially consumed by a shorter rule, and code
//! rules before date/time rules.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::datetime::{format_clock12, format_clock24, format_date};
use crate::lookup::{Field, LookupTable};
use crate::normalize::normalize;

static CITY_ICAO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*##(\w{4})").expect("invalid city ICAO regex"));
static CITY_IATA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*#(\w{3})").expect("invalid city IATA regex"));
static NAME_ICAO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"##(\w{4})").expect("invalid name ICAO regex"));
static NAME_IATA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#(\w{3})").expect("invalid name IATA regex"));
static DATE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"D\((.+?)\)").expect("invalid date token regex"));
static CLOCK12_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"T12\((.+?)\)").expect("invalid 12-hour token regex"));
static CLOCK24_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"T24\((.+?)\)").expect("invalid 24-hour token regex"));

/// Rewrites itinerary text against a shared, read-only lookup table.
pub struct LinePrettifier<'a> {
    table: &'a LookupTable,
}

impl<'a> LinePrettifier<'a> {
    pub fn new(table: &'a LookupTable) -> Self {
        Self { table }
    }

    /// Normalize the whole document, then rewrite it line by line.
    ///
    /// Lines are re-joined with a single newline and the output always ends
    /// with a trailing newline, regardless of the input's line endings.
    /// Trailing blank lines do not survive processing.
    pub fn process(&self, raw: &str) -> String {
        let normalized = normalize(raw);
        let mut output = String::with_capacity(normalized.len());
        for line in split_lines(&normalized) {
            output.push_str(&self.process_line(line));
            output.push('\n');
        }
        output
    }

    /// Apply the substitution rules to one line, in order.
    pub fn process_line(&self, line: &str) -> String {
        let line = self.replace_codes(line, &CITY_ICAO, Field::City);
        let line = self.replace_codes(&line, &CITY_IATA, Field::City);
        let line = self.replace_codes(&line, &NAME_ICAO, Field::Name);
        let line = self.replace_codes(&line, &NAME_IATA, Field::Name);
        let line = replace_tokens(&line, &DATE_TOKEN, format_date);
        let line = replace_tokens(&line, &CLOCK12_TOKEN, format_clock12);
        replace_tokens(&line, &CLOCK24_TOKEN, format_clock24)
    }

    /// Replace each code token with the looked-up field. A code with no
    /// record leaves the token exactly as matched, prefix included.
    fn replace_codes(&self, line: &str, pattern: &Regex, field: Field) -> String {
        pattern
            .replace_all(line, |caps: &Captures<'_>| {
                match self.table.get(&caps[1], field) {
                    Some(value) => value.to_string(),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}

/// Replace each date/time token with its formatted value. Inner text that
/// does not parse is kept verbatim with the wrapper stripped.
fn replace_tokens(
    line: &str,
    pattern: &Regex,
    format: impl Fn(&str) -> Option<String>,
) -> String {
    pattern
        .replace_all(line, |caps: &Captures<'_>| {
            format(&caps[1]).unwrap_or_else(|| caps[1].to_string())
        })
        .into_owned()
}

/// Split normalized text into lines, dropping trailing empty segments. An
/// entirely empty document still yields one empty line.
fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return vec![""];
    }
    let mut lines: Vec<&str> = text.split('\n').collect();
    while lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}
