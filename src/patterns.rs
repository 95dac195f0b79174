//! Line classification rules used by the fragment scanner
//!
//! Each rule is a standalone predicate over a single line, except for the
//! quote header search which has to look at the whole body because mail
//! clients wrap long "On ... wrote:" lines.

use regex::Regex;
use std::borrow::Cow;
use std::ops::Range;
use std::sync::LazyLock;

const HEADER_OPENER: &str = "On";
const HEADER_CLOSER: &str = "wrote:";

// Regex patterns
static SIGNATURE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\x{2014}|--|__|-(?-u:\w)|Sent from my (?:(?-u:\w)+(?-u:\s)*){1,3})").unwrap()
});

static QUOTE_HEADER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"On[^\r\n\x{85}\x{2028}\x{2029}]*wrote:$").unwrap());

/// Replace `\r\n` and lone `\r` line endings with `\n`
#[must_use]
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Check whether a line is part of a quoted block (`> ...`)
#[must_use]
pub fn is_quoted(line: &str) -> bool {
    line.starts_with('>')
}

/// Check whether a line contains only whitespace
#[must_use]
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Check whether a line introduces quoted text, e.g.
/// `On Mar 1, 2011, at 10:59 AM, Abhishek Kona wrote:`
///
/// The line must end in `wrote:` exactly; anything may precede `On`. Unicode
/// line separators between `On` and `wrote:` break the match.
#[must_use]
pub fn is_quote_header(line: &str) -> bool {
    QUOTE_HEADER_REGEX.is_match(line)
}

/// Check whether a line opens a signature block
///
/// Matches `--`, `__`, an em-dash, a hyphen glued to a word (`-Robin`) and
/// mobile footers such as `Sent from my iPhone`. Word characters are ASCII
/// only, so `-Émile` is not a signature.
#[must_use]
pub fn is_signature_start(line: &str) -> bool {
    SIGNATURE_REGEX.is_match(line)
}

/// Locate the quote header that should be collapsed onto one line.
///
/// The header is the last `On<space>` in the text that still has a `wrote:`
/// after it (with at least one character in between). The returned range ends
/// with the first `wrote:` following that opener. Earlier openers are skipped
/// so that two separate headers are never merged into one.
#[must_use]
pub fn find_quote_header(text: &str) -> Option<Range<usize>> {
    let last_closer = text.rfind(HEADER_CLOSER)?;

    let body_start = text.rmatch_indices(HEADER_OPENER).find_map(|(start, _)| {
        let after_opener = start + HEADER_OPENER.len();
        let mut rest = text[after_opener..].chars();
        let gap = rest.next().filter(|c| is_header_space(*c))?;
        let first = rest.next()?;
        let body = after_opener + gap.len_utf8() + first.len_utf8();
        (body <= last_closer).then_some((start, body))
    });

    let (start, body) = body_start?;
    let closer = text[body..].find(HEADER_CLOSER)?;
    Some(start..body + closer + HEADER_CLOSER.len())
}

/// Join a quote header that was wrapped over several lines back onto one line.
///
/// Returns the text unchanged (borrowed) when there is no header or it
/// already fits on a single line.
#[must_use]
pub fn merge_quote_header(text: &str) -> Cow<'_, str> {
    let Some(range) = find_quote_header(text) else {
        return Cow::Borrowed(text);
    };

    let header = &text[range.clone()];
    if !header.contains('\n') {
        return Cow::Borrowed(text);
    }

    let mut merged = String::with_capacity(text.len());
    merged.push_str(&text[..range.start]);
    merged.extend(header.split('\n'));
    merged.push_str(&text[range.end..]);
    Cow::Owned(merged)
}

// ASCII whitespace as understood by `\s` in the header pattern
const fn is_header_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}
