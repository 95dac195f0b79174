//! Fragments of an email body

use crate::patterns::{is_blank, is_quote_header};
use serde::Serialize;
use std::fmt;

/// A run of contiguous lines sharing one classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
    /// Lines in document order, joined with `\n` and trimmed
    content: String,

    /// Lines start with `>`
    quoted: bool,

    /// Judged to be a signature or mobile footer
    signature: bool,

    /// Excluded from the visible reply
    hidden: bool,
}

impl Fragment {
    #[must_use]
    pub const fn content(&self) -> &str {
        self.content.as_str()
    }

    #[must_use]
    pub const fn is_quoted(&self) -> bool {
        self.quoted
    }

    #[must_use]
    pub const fn is_signature(&self) -> bool {
        self.signature
    }

    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Whether the fragment is empty after trimming
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.content)
    }
}

/// A fragment that is still collecting lines.
///
/// The scanner walks the body bottom-up, so `lines` holds the most recently
/// scanned (topmost) line last. Never empty.
#[derive(Debug)]
pub struct FragmentBuilder<'a> {
    quoted: bool,
    signature: bool,
    lines: Vec<&'a str>,
}

impl<'a> FragmentBuilder<'a> {
    pub fn new(quoted: bool, first_line: &'a str) -> Self {
        Self {
            quoted,
            signature: false,
            lines: vec![first_line],
        }
    }

    /// Whether `line` continues this fragment rather than starting a new one.
    ///
    /// Blank lines and the quote header above a quoted block stay with the
    /// quote.
    pub fn accepts(&self, quoted: bool, line: &str) -> bool {
        self.quoted == quoted || (self.quoted && (is_blank(line) || is_quote_header(line)))
    }

    pub fn push(&mut self, line: &'a str) {
        self.lines.push(line);
    }

    /// The line added last, i.e. the one directly below the line being scanned
    pub fn last_line(&self) -> &'a str {
        self.lines.last().copied().unwrap_or_default()
    }

    pub const fn mark_signature(&mut self) {
        self.signature = true;
    }

    /// Freeze the collected lines into a [`Fragment`].
    ///
    /// Until something visible has been seen below this fragment, quoted,
    /// signature and empty fragments are hidden.
    pub fn finish(mut self, found_visible: bool) -> Fragment {
        self.lines.reverse();
        let content = self.lines.join("\n").trim().to_string();
        let hidden = !found_visible && (self.quoted || self.signature || content.is_empty());

        Fragment {
            content,
            quoted: self.quoted,
            signature: self.signature,
            hidden,
        }
    }
}
