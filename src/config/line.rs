//! Line tokenizer shared by the bar and script parsers.
//!
//! A directive line is `Key=value` or `Key: value`. The first `=` or `:`
//! splits the line, so values may contain either character. A `#` that
//! follows whitespace starts a trailing comment. A `#` directly after the
//! delimiter is part of the value, as is a spaced `#rrggbb` on a color key.

use regex::Regex;
use std::sync::LazyLock;

/// Keys whose values are colors.
const COLOR_KEYS: [&str; 3] = ["BColor", "FColor", "UColor"];

/// Bar reference marker: `1*` anywhere on the line, or the `*1` dialect.
static BAR_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\*|\*(\d)").expect("Invalid bar marker regex"));

/// One `key`/`value` pair split out of a config line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive<'a> {
    pub key: &'a str,
    /// `None` when nothing but whitespace or a comment follows the delimiter.
    pub value: Option<&'a str>,
}

/// Split a line into a directive.
///
/// Returns `None` for blank lines, full-line comments, and lines without a
/// delimiter or key.
pub fn split_directive(line: &str) -> Option<Directive<'_>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let split_at = line.find(['=', ':'])?;
    let key = line[..split_at].trim();
    if key.is_empty() {
        return None;
    }

    let value = strip_comment(key, &line[split_at + 1..]).trim();
    Some(Directive {
        key,
        value: (!value.is_empty()).then_some(value),
    })
}

/// Cut `raw` at the first `#` that follows whitespace.
fn strip_comment<'a>(key: &str, raw: &'a str) -> &'a str {
    let start = if COLOR_KEYS.contains(&key) {
        spaced_color_end(raw)
    } else {
        0
    };

    let bytes = raw.as_bytes();
    match (start.max(1)..bytes.len())
        .find(|&i| bytes[i] == b'#' && bytes[i - 1].is_ascii_whitespace())
    {
        Some(pos) => &raw[..pos],
        None => raw,
    }
}

/// End offset of a leading ` #rrggbb` token, or 0 when `raw` does not start
/// with one.
fn spaced_color_end(raw: &str) -> usize {
    let offset = raw.len() - raw.trim_start().len();
    let Some(token) = raw[offset..].strip_prefix('#') else {
        return 0;
    };

    let digits = token.bytes().take_while(u8::is_ascii_hexdigit).count();
    let terminated = token
        .as_bytes()
        .get(digits)
        .is_none_or(|b| b.is_ascii_whitespace());
    if digits > 0 && terminated {
        offset + 1 + digits
    } else {
        0
    }
}

/// Find a bar reference marker and return its id with the marker removed
/// from the line.
///
/// Ids that do not fit in a `u32` are treated as no marker.
pub fn take_bar_marker(line: &str) -> Option<(u32, String)> {
    let caps = BAR_MARKER_REGEX.captures(line)?;
    let whole = caps.get(0)?;
    let digits = caps.get(1).or_else(|| caps.get(2))?;
    let id = digits.as_str().parse::<u32>().ok()?;

    let mut rest = String::with_capacity(line.len());
    rest.push_str(&line[..whole.start()]);
    rest.push_str(&line[whole.end()..]);
    Some((id, rest))
}

/// Parse `true`/`false`, ignoring case.
pub fn parse_bool(value: &str) -> Option<bool> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Normalize a color to `#RRGGBB` form.
///
/// Accepts values with or without the leading `#`. Hex digits are
/// uppercased; anything else is passed through after the prefix.
pub fn normalize_color(value: &str) -> Option<String> {
    let bare = value.trim().trim_start_matches('#').trim();
    if bare.is_empty() {
        return None;
    }

    if bare.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(format!("#{}", bare.to_ascii_uppercase()))
    } else {
        Some(format!("#{}", bare))
    }
}
