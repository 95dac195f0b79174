// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Email Reply Extraction
//!
//! Splits a decoded plain-text email body into fragments so that only the
//! text the sender actually wrote is shown, leaving out quoted history,
//! "On ... wrote:" headers and signatures.
//!
//! The body is scanned bottom-up. Consecutive lines that are all quoted (or
//! all unquoted) form one fragment; quoted, signature and empty fragments
//! at the bottom of the message are hidden until the first piece of real
//! content is reached.
//!
//! # Example
//!
//! ```rust
//! use email_reply::segment;
//!
//! let body = "Sounds good.\n\nOn Mon, Jan 6, 2025, Ana wrote:\n> Lunch at noon?";
//! let message = segment(body).unwrap();
//!
//! assert_eq!(message.fragments().len(), 2);
//! assert!(message.fragments()[1].is_quoted());
//! assert_eq!(message.reply(), "Sounds good.");
//! ```

mod error;
mod fragment;
mod parser;
pub mod patterns;

pub use error::{ParseError, Result};
pub use fragment::Fragment;
pub use parser::{Message, parse_reply, segment};
