use email_reply::patterns::*;
use std::borrow::Cow;

// --- Line endings ---

#[test]
fn test_normalize_line_endings() {
    assert_eq!(normalize_line_endings("a\r\nb\rc\n"), "a\nb\nc\n");
    assert_eq!(normalize_line_endings("no breaks"), "no breaks");
}

// --- Quoted lines ---

#[test]
fn test_is_quoted() {
    assert!(is_quoted("> quoted"));
    assert!(is_quoted(">> nested"));
    assert!(is_quoted(">"));
    assert!(!is_quoted(" > indented"));
    assert!(!is_quoted("a > b"));
}

#[test]
fn test_is_blank() {
    assert!(is_blank(""));
    assert!(is_blank(" \t "));
    assert!(!is_blank(" x "));
}

// --- Quote headers ---

#[test]
fn test_is_quote_header() {
    assert!(is_quote_header("On Jan 1, 2020, John wrote:"));
    assert!(is_quote_header("> On Oct 1, 2012, at 11:55 PM, Dave Tapley wrote:"));
    assert!(!is_quote_header("on jan 1, 2020, john wrote:"));
    assert!(!is_quote_header("On Jan 1, 2020, John wrote: "));
    assert!(!is_quote_header("John wrote:"));
    assert!(!is_quote_header("On your remote host you can run:"));
}

#[test]
fn test_quote_header_stops_at_line_separators() {
    assert!(!is_quote_header("On Jan 1, 2020,\u{2028}John wrote:"));
    assert!(!is_quote_header("On Jan 1, 2020,\u{85}John wrote:"));
    assert!(is_quote_header("On Jan 1, 2020,\u{a0}John wrote:"));
}

// --- Signatures ---

#[test]
fn test_is_signature_start() {
    assert!(is_signature_start("-- "));
    assert!(is_signature_start("--"));
    assert!(is_signature_start("__________"));
    assert!(is_signature_start("\u{2014}Bob"));
    assert!(is_signature_start("-Robin"));
    assert!(is_signature_start("Sent from my iPhone"));
    assert!(is_signature_start("Sent from my Samsung Galaxy S9"));
}

#[test]
fn test_is_not_signature_start() {
    assert!(!is_signature_start("- a bullet point"));
    assert!(!is_signature_start("Regards"));
    assert!(!is_signature_start("Sent from my"));
    assert!(!is_signature_start("I Sent from my iPhone"));
    assert!(!is_signature_start("text -- more"));
}

#[test]
fn test_signature_word_characters_are_ascii() {
    assert!(!is_signature_start("-\u{c9}mile"));
    assert!(!is_signature_start("Sent from my \u{e9}cran"));
    assert!(is_signature_start("-Emile"));
}

// --- Multi-line quote headers ---

#[test]
fn test_find_quote_header() {
    let text = "a\nOn x\ny wrote:\nb";
    let range = find_quote_header(text).unwrap();
    assert_eq!(&text[range], "On x\ny wrote:");
}

#[test]
fn test_find_quote_header_picks_last_opener() {
    let text = "On a wrote:\nOn b\nwrote:";
    let range = find_quote_header(text).unwrap();
    assert_eq!(&text[range], "On b\nwrote:");
}

#[test]
fn test_find_quote_header_skips_opener_without_closer() {
    let text = "On Jan 1 Ann wrote:\n> hi\nOn a later note, thanks";
    let range = find_quote_header(text).unwrap();
    assert_eq!(&text[range], "On Jan 1 Ann wrote:");
}

#[test]
fn test_find_quote_header_none() {
    assert!(find_quote_header("no header here").is_none());
    assert!(find_quote_header("Onwrote:").is_none());
    assert!(find_quote_header("On wrote:").is_none());
    assert!(find_quote_header("On\nwrote:").is_none());
    assert!(find_quote_header("he wrote: On Monday").is_none());
}

#[test]
fn test_find_quote_header_large_input() {
    let text = "On x ".repeat(200_000) + "wrote:\n" + &"> On a\n".repeat(50_000);
    let range = find_quote_header(&text).unwrap();

    assert_eq!(&text[range.clone()], "On x wrote:");
    assert_eq!(range.end, 200_000 * 5 + "wrote:".len());
    assert!(matches!(merge_quote_header(&text), Cow::Borrowed(_)));
}

#[test]
fn test_merge_quote_header() {
    let merged = merge_quote_header("Reply\nOn Jan 1, 2020, at 3:00 PM,\nJohn Doe wrote:\n> old");
    assert_eq!(
        merged,
        "Reply\nOn Jan 1, 2020, at 3:00 PM,John Doe wrote:\n> old"
    );
}

#[test]
fn test_merge_quote_header_collapses_one_span() {
    let merged = merge_quote_header("On a\nwrote:\n> x\nOn b\nwrote:\n> y");
    assert_eq!(merged, "On a\nwrote:\n> x\nOn bwrote:\n> y");
}

#[test]
fn test_merge_quote_header_single_line_is_borrowed() {
    let text = "Hi\nOn Jan 1, 2020, John wrote:\n> old";
    assert!(matches!(merge_quote_header(text), Cow::Borrowed(_)));
    assert!(matches!(merge_quote_header("plain"), Cow::Borrowed(_)));
}
