//! Integration tests for raw-text body scanning.

#![allow(clippy::needless_pass_by_value)]

use coyote_markup::{AltTextScanner, LexerState, Ruleset, route};
use quickcheck_macros::quickcheck;

/// Helper to scan a body and return the state after each character
fn scan(rules: Ruleset, tag: &str, body: &str) -> Vec<LexerState> {
    let mut scanner = AltTextScanner::new(rules, tag).expect("raw-text tag");
    body.chars().map(|glyph| scanner.step(glyph)).collect()
}

#[test]
fn test_scanner_requires_close_sequence() {
    assert!(AltTextScanner::new(Ruleset::Server, "div").is_none());
    assert!(AltTextScanner::new(Ruleset::Server, "!CDATA[[").is_none());
    assert!(AltTextScanner::new(Ruleset::Xml, "script").is_none());

    let scanner = AltTextScanner::new(Ruleset::Xml, "!CDATA[[").expect("cdata");
    assert_eq!(scanner.tag(), "!CDATA[[");
    assert_eq!(scanner.close_sequence(), "]]>");
    assert_eq!(scanner.state(), LexerState::AltText);
    assert!(!scanner.is_closed());
}

#[test]
fn test_comment_body() {
    let states = scan(Ruleset::Server, "!--", " hi -->");
    assert_eq!(
        states,
        vec![
            LexerState::CommentText,
            LexerState::CommentText,
            LexerState::CommentText,
            LexerState::CommentText,
            LexerState::AltTextCloseSequence,
            LexerState::AltTextCloseSequence,
            LexerState::TailElementClosed,
        ]
    );
}

#[test]
fn test_script_body_ignores_markup() {
    let states = scan(Ruleset::Server, "script", "if (a < b) { x = '<b>'; }</script>");
    let (body, close) = states.split_at(states.len() - 1);
    assert_eq!(close, [LexerState::TailElementClosed]);
    assert!(!body.contains(&LexerState::TailElementClosed));
    assert!(body.contains(&LexerState::AltText));
}

#[test]
fn test_partial_match_returns_to_body() {
    let states = scan(Ruleset::Server, "style", "</sty x");
    assert_eq!(states[4], LexerState::AltTextCloseSequence);
    assert_eq!(states[5], LexerState::AltText);
    assert_eq!(states[6], LexerState::AltText);
}

#[test]
fn test_overlapping_close_sequence() {
    let states = scan(Ruleset::Server, "!--", "--->");
    assert_eq!(states.last(), Some(&LexerState::TailElementClosed));
    assert_eq!(
        states.iter().filter(|&&s| s == LexerState::TailElementClosed).count(),
        1
    );
}

#[test]
fn test_cdata_section() {
    let states = scan(Ruleset::Xml, "!CDATA[[", "a]]]>");
    assert_eq!(
        states,
        vec![
            LexerState::AltText,
            LexerState::AltTextCloseSequence,
            LexerState::AltTextCloseSequence,
            LexerState::AltTextCloseSequence,
            LexerState::TailElementClosed,
        ]
    );
}

#[test]
fn test_closed_scanner_hands_off_to_router() {
    let mut scanner = AltTextScanner::new(Ruleset::Server, "!--").expect("comment");
    for glyph in "-->".chars() {
        let _ = scanner.step(glyph);
    }
    assert!(scanner.is_closed());
    assert_eq!(scanner.step('x'), LexerState::Text);
    assert_eq!(scanner.step('<'), LexerState::Element);
    assert_eq!(scanner.step('p'), route('p', LexerState::Element));
}

#[quickcheck]
fn prop_closes_at_first_close_sequence(body: String) -> bool {
    let rules = Ruleset::Server;
    let input = format!("{body}</script>");
    let expected_end = input.find("</script>").map(|at| at + "</script>".len());

    let mut scanner = AltTextScanner::new(rules, "script").expect("script");
    for (at, glyph) in input.char_indices() {
        if scanner.step(glyph) == LexerState::TailElementClosed {
            return Some(at + glyph.len_utf8()) == expected_end;
        }
    }
    false
}
