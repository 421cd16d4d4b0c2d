use std::str::FromStr;

use strum_macros::Display;

use super::tables::{
    BANNED_ELEMENTS, CLIENT_BANNED_ELEMENTS, CLIENT_INLINE_ELEMENTS, COMMENT_TAG,
    HTML_CLOSE_SEQUENCES, INLINE_ELEMENTS, NAMESPACE_ELEMENTS, PRESERVED_TEXT_TAG,
    VOID_ELEMENTS, XML_CLOSE_SEQUENCES,
};
use crate::error::RulesetError;

/// An output dialect and the tag facts it implies.
///
/// A ruleset is picked once per document and never changes while that
/// document is compiled. All lookups are exact, case-sensitive matches
/// against fixed tables; a tag missing from a table is simply not a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Ruleset {
    /// HTML rendered on the server.
    #[default]
    Server,
    /// HTML that is safe to hand to client-side code: nothing that can run
    /// script or inject styles.
    Client,
    /// Plain XML. No element carries built-in meaning besides comments and
    /// CDATA sections.
    Xml,
}

impl Ruleset {
    /// Every dialect, in declaration order.
    pub const ALL: [Self; 3] = [Self::Server, Self::Client, Self::Xml];

    /// Namespace of the document root.
    #[must_use]
    pub const fn initial_namespace(self) -> &'static str {
        match self {
            Self::Server | Self::Client => "html",
            Self::Xml => "xml",
        }
    }

    /// Whether `tag` opens a comment.
    #[must_use]
    pub fn is_comment(self, tag: &str) -> bool {
        match self {
            Self::Server | Self::Client | Self::Xml => tag == COMMENT_TAG,
        }
    }

    /// The sequence that ends the raw-text body of `tag`, if `tag` has one.
    ///
    /// ```ignore
    /// assert_eq!(Ruleset::Server.close_sequence_for("script"), Some("</script>"));
    /// assert_eq!(Ruleset::Server.close_sequence_for("div"), None);
    /// ```
    #[must_use]
    pub fn close_sequence_for(self, tag: &str) -> Option<&'static str> {
        self.close_sequences()
            .iter()
            .find(|&&(alt_tag, _)| alt_tag == tag)
            .map(|&(_, sequence)| sequence)
    }

    /// The raw-text tag whose body `sequence` ends. Inverse of
    /// [`close_sequence_for`](Self::close_sequence_for).
    #[must_use]
    pub fn tag_for_close_sequence(self, sequence: &str) -> Option<&'static str> {
        self.close_sequences()
            .iter()
            .find(|&&(_, close)| close == sequence)
            .map(|&(alt_tag, _)| alt_tag)
    }

    /// Whether structural whitespace survives into the output.
    ///
    /// Client HTML can be rearranged by scripts after it lands, so its
    /// indentation is never relied on.
    #[must_use]
    pub const fn respects_indentation(self) -> bool {
        !matches!(self, Self::Client)
    }

    /// Whether this dialect refuses to emit `tag`.
    #[must_use]
    pub fn is_banned(self, tag: &str) -> bool {
        match self {
            Self::Server => BANNED_ELEMENTS.contains(tag),
            Self::Client => {
                CLIENT_BANNED_ELEMENTS.contains(tag) || BANNED_ELEMENTS.contains(tag)
            }
            Self::Xml => false,
        }
    }

    /// Whether `tag` is a void element.
    #[must_use]
    pub fn is_void(self, tag: &str) -> bool {
        match self {
            Self::Server | Self::Client => VOID_ELEMENTS.contains(tag),
            Self::Xml => false,
        }
    }

    /// Whether `tag` starts a namespace of its own (`svg`, `math`, `html`).
    #[must_use]
    pub fn is_namespace_el(self, tag: &str) -> bool {
        match self {
            Self::Server | Self::Client => NAMESPACE_ELEMENTS.contains(tag),
            Self::Xml => false,
        }
    }

    /// Whether `tag` keeps its text verbatim.
    #[must_use]
    pub fn is_preserved_text(self, tag: &str) -> bool {
        match self {
            Self::Server | Self::Client => tag == PRESERVED_TEXT_TAG,
            Self::Xml => false,
        }
    }

    /// Whether `tag` flows inline with its siblings.
    #[must_use]
    pub fn is_inline(self, tag: &str) -> bool {
        match self {
            Self::Server => INLINE_ELEMENTS.contains(tag),
            Self::Client => {
                CLIENT_INLINE_ELEMENTS.contains(tag) || INLINE_ELEMENTS.contains(tag)
            }
            Self::Xml => false,
        }
    }

    const fn close_sequences(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Server | Self::Client => HTML_CLOSE_SEQUENCES,
            Self::Xml => XML_CLOSE_SEQUENCES,
        }
    }
}

impl FromStr for Ruleset {
    type Err = RulesetError;

    /// Parse a dialect name (`server`, `client`, `xml`), ignoring ASCII case.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rules| rules.to_string().eq_ignore_ascii_case(name))
            .ok_or_else(|| RulesetError::Unknown(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_sequence_tables_are_one_to_one() {
        for table in [HTML_CLOSE_SEQUENCES, XML_CLOSE_SEQUENCES] {
            for (i, &(tag, sequence)) in table.iter().enumerate() {
                for &(other_tag, other_sequence) in &table[i + 1..] {
                    assert_ne!(tag, other_tag);
                    assert_ne!(sequence, other_sequence);
                }
            }
        }
    }

    #[test]
    fn test_client_tables_only_add_to_shared_ones() {
        for tag in CLIENT_BANNED_ELEMENTS.iter().copied() {
            assert!(Ruleset::Client.is_banned(tag));
            assert!(!Ruleset::Server.is_banned(tag), "{tag} banned on server");
        }
        for tag in CLIENT_INLINE_ELEMENTS.iter().copied() {
            assert!(!Ruleset::Server.is_inline(tag), "{tag} inline on server");
        }
    }
}
