//! Per-element formatting context.
//!
//! A [`TagContext`] is built once, when the driver finishes reading an
//! opening tag name, and is never mutated afterwards. The root element uses
//! [`TagContext::create`]; every other element is derived from the context
//! of the element before it with [`TagContext::derive`].

use strum_macros::Display;

use coyote_common::warning::warn_once;

use crate::rules::Ruleset;

/// How text inside an element is laid out.
///
/// Only `Root` and `Initial` are assigned here. Refining an element into
/// `Block` or `Inline` is left to the serializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum TextFormat {
    /// Starts a new visual block.
    Block,
    /// Not yet classified.
    Initial,
    /// Flows with surrounding text.
    Inline,
    /// The document root.
    Root,
}

/// Facts about one element that the serializer needs for indentation and
/// whitespace handling.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagContext {
    /// `html`, `svg`, `math`, `xml`, ...
    pub namespace: String,
    /// Tag name exactly as written.
    pub tag: String,
    /// Layout of the element's text.
    pub text_format: TextFormat,
    /// Indentation depth; 0 at the root.
    pub indent_count: usize,
    /// The element cannot have children.
    pub void_el: bool,
    /// The element does not start a new block.
    pub inline_el: bool,
    /// Text here must be reproduced verbatim.
    pub preserved_text_path: bool,
    /// The ruleset refuses to emit this element.
    pub banned_path: bool,
}

impl TagContext {
    /// Context for the document's first element.
    ///
    /// A banned `tag` is reported once on stderr through
    /// [`warn_once`]; that is the only side effect, and the returned
    /// context depends on `rules` and `tag` alone.
    #[must_use]
    pub fn create(rules: Ruleset, tag: &str) -> Self {
        let namespace = if rules.is_namespace_el(tag) {
            tag
        } else {
            rules.initial_namespace()
        };

        let banned_path = rules.is_banned(tag);
        if banned_path {
            warn_once("Rules", &format!("{rules} rules ban <{tag}>"));
        }

        Self {
            namespace: namespace.to_string(),
            tag: tag.to_string(),
            text_format: TextFormat::Root,
            indent_count: 0,
            void_el: rules.is_void(tag),
            inline_el: rules.is_inline(tag),
            preserved_text_path: rules.is_preserved_text(tag),
            banned_path,
        }
    }

    /// Context for `tag`, given the context of the element that precedes it.
    ///
    /// - The namespace carries over from `prev` unless `tag` declares its own.
    /// - Depth grows by one, except under a void element or for an inline
    ///   `tag`.
    /// - Text is preserved one level below a `pre`-like element.
    /// - `banned_path` reflects `tag` alone and is not inherited; a caller
    ///   that wants to drop a whole subtree must carry it down itself.
    ///
    /// Like [`create`](Self::create), the only side effect is the one-time
    /// stderr warning for a banned `tag`.
    #[must_use]
    pub fn derive(rules: Ruleset, prev: &Self, tag: &str) -> Self {
        let mut tag_info = Self::create(rules, tag);
        tag_info.text_format = TextFormat::Initial;

        if !rules.is_namespace_el(tag) {
            tag_info.namespace.clone_from(&prev.namespace);
        }

        tag_info.indent_count = prev.indent_count;
        if !rules.is_void(&prev.tag) && !rules.is_inline(tag) {
            tag_info.indent_count += 1;
        }

        if rules.is_preserved_text(&prev.tag) {
            tag_info.preserved_text_path = true;
        }

        tag_info
    }
}
