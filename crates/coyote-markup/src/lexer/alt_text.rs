//! Raw-text body scanning.
//!
//! Comments, `script`, `style` and CDATA bodies are not markup: everything
//! up to the element's registered close sequence is opaque text. The
//! general [`route`] table has no way to see that sequence, so once the
//! driver has read such an opening tag it switches to an [`AltTextScanner`]
//! until the scanner reports the element closed.

use super::route::route;
use super::state::LexerState;
use crate::rules::Ruleset;

/// Streaming matcher for one raw-text element's close sequence.
///
/// Holds no buffer: it only remembers how much of the close sequence the
/// input has matched so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AltTextScanner {
    tag: &'static str,
    close_sequence: &'static str,
    body: LexerState,
    matched: usize,
    state: LexerState,
}

impl AltTextScanner {
    /// Scanner for the body of `tag`, or `None` if `rules` gives `tag` no
    /// close sequence.
    #[must_use]
    pub fn new(rules: Ruleset, tag: &str) -> Option<Self> {
        let close_sequence = rules.close_sequence_for(tag)?;
        let tag = rules.tag_for_close_sequence(close_sequence)?;
        let body = if rules.is_comment(tag) {
            LexerState::CommentText
        } else {
            LexerState::AltText
        };

        Some(Self {
            tag,
            close_sequence,
            body,
            matched: 0,
            state: body,
        })
    }

    /// The raw-text tag being scanned.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        self.tag
    }

    /// The sequence that ends the body.
    #[must_use]
    pub const fn close_sequence(&self) -> &'static str {
        self.close_sequence
    }

    /// State produced by the last [`step`](Self::step).
    #[must_use]
    pub const fn state(&self) -> LexerState {
        self.state
    }

    /// Whether the close sequence has been seen in full.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.matched == self.close_sequence.len()
    }

    /// Consume one character of the body.
    ///
    /// Returns the body state (`AltText` or `CommentText`) for plain text,
    /// `AltTextCloseSequence` while the input is a partial match, and
    /// `TailElementClosed` on the character that completes the sequence.
    /// When a partial match breaks off, the characters the driver buffered
    /// under `AltTextCloseSequence` belong to the body.
    ///
    /// Once closed, characters go through [`route`] as usual.
    pub fn step(&mut self, glyph: char) -> LexerState {
        self.state = if self.is_closed() {
            route(glyph, self.state)
        } else {
            self.matched = next_match(self.close_sequence.as_bytes(), self.matched, glyph);
            if self.is_closed() {
                LexerState::TailElementClosed
            } else if self.matched > 0 {
                LexerState::AltTextCloseSequence
            } else {
                self.body
            }
        };

        self.state
    }
}

/// Length of the longest prefix of `sequence` that ends the input, given
/// that the input previously ended with `sequence[..matched]` and `glyph`
/// was just appended.
///
/// Close sequences are ASCII, so byte positions and character positions
/// coincide.
fn next_match(sequence: &[u8], matched: usize, glyph: char) -> usize {
    let Ok(byte) = u8::try_from(glyph) else {
        return 0;
    };

    (1..=matched + 1)
        .rev()
        .find(|&len| {
            sequence[len - 1] == byte && sequence[..len - 1] == sequence[matched + 1 - len..matched]
        })
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(sequence: &str, input: &str) -> usize {
        input
            .chars()
            .fold(0, |matched, glyph| next_match(sequence.as_bytes(), matched, glyph))
    }

    #[test]
    fn test_next_match_extends_prefix() {
        assert_eq!(feed("-->", "-"), 1);
        assert_eq!(feed("-->", "--"), 2);
        assert_eq!(feed("-->", "-->"), 3);
    }

    #[test]
    fn test_next_match_falls_back_to_overlapping_prefix() {
        assert_eq!(feed("-->", "---"), 2);
        assert_eq!(feed("</script>", "<<"), 1);
        assert_eq!(feed("]]>", "]]]"), 2);
    }

    #[test]
    fn test_next_match_resets_on_unrelated_glyph() {
        assert_eq!(feed("-->", "--x"), 0);
        assert_eq!(feed("</style>", "</sé"), 0);
    }
}
