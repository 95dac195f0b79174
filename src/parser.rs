//! Reverse line scanner that splits an email body into fragments

use crate::error::{ParseError, Result};
use crate::fragment::{Fragment, FragmentBuilder};
use crate::patterns::{
    is_blank, is_quoted, is_signature_start, merge_quote_header, normalize_line_endings,
};
use serde::Serialize;
use std::borrow::Cow;
use tracing::{debug, trace};

/// An email body split into fragments
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    /// Body text with `\n` line endings
    text: String,

    /// Fragments in document order
    fragments: Vec<Fragment>,
}

impl Message {
    /// Segment a decoded plain-text email body
    pub fn parse(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(ParseError::InvalidArgument(
                "email text must not be empty".into(),
            ));
        }

        let text = normalize_line_endings(text);

        let fragments = {
            let working = merge_quote_header(&text);
            let merged = matches!(working, Cow::Owned(_));

            let mut scanner = Scanner::default();
            for line in working.split('\n').rev() {
                scanner.scan_line(line);
            }
            let fragments = scanner.into_fragments();

            debug!(
                "Segmented email body into {} fragments (quote header merged: {merged})",
                fragments.len()
            );
            fragments
        };

        Ok(Self { text, fragments })
    }

    /// The body text after line ending normalization
    #[must_use]
    pub const fn text(&self) -> &str {
        self.text.as_str()
    }

    /// All fragments, first fragment first
    #[must_use]
    pub const fn fragments(&self) -> &[Fragment] {
        self.fragments.as_slice()
    }

    /// Fragments that make up the visible reply
    pub fn visible_fragments(&self) -> impl Iterator<Item = &Fragment> {
        self.fragments
            .iter()
            .filter(|f| !(f.is_hidden() || f.is_quoted()))
    }

    /// The text the sender actually wrote, without quotes or signatures
    #[must_use]
    pub fn reply(&self) -> String {
        self.visible_fragments()
            .map(Fragment::content)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Segment a decoded plain-text email body into fragments
pub fn segment(text: &str) -> Result<Message> {
    Message::parse(text)
}

/// Extract just the visible reply from an email body
pub fn parse_reply(text: &str) -> Result<String> {
    Ok(segment(text)?.reply())
}

/// State carried while walking the lines from the bottom up
#[derive(Default)]
struct Scanner<'a> {
    current: Option<FragmentBuilder<'a>>,
    finished: Vec<Fragment>,
    found_visible: bool,
}

impl<'a> Scanner<'a> {
    fn scan_line(&mut self, line: &'a str) {
        let quoted = is_quoted(line);

        // A blank line above `--` (or similar) closes the signature block below it
        if is_blank(line)
            && let Some(fragment) = self.current.as_mut()
            && is_signature_start(fragment.last_line())
        {
            fragment.mark_signature();
            self.finish_fragment();
        }

        if let Some(fragment) = self.current.as_mut()
            && fragment.accepts(quoted, line)
        {
            fragment.push(line);
            return;
        }

        self.finish_fragment();
        self.current = Some(FragmentBuilder::new(quoted, line));
    }

    fn finish_fragment(&mut self) {
        if let Some(builder) = self.current.take() {
            let fragment = builder.finish(self.found_visible);
            self.found_visible |= !fragment.is_hidden();

            trace!(
                "Finished fragment: quoted={} signature={} hidden={}",
                fragment.is_quoted(),
                fragment.is_signature(),
                fragment.is_hidden()
            );

            self.finished.push(fragment);
        }
    }

    fn into_fragments(mut self) -> Vec<Fragment> {
        self.finish_fragment();
        self.finished.reverse();
        self.finished
    }
}
