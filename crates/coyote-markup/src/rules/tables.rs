//! Tag tables shared by the rulesets.
//!
//! Server and client HTML consult the same base tables; the client dialect
//! layers its extra entries on top instead of keeping a second copy.

use std::collections::HashSet;
use std::sync::LazyLock;

/// The only tag treated as a comment, in every dialect.
pub(super) const COMMENT_TAG: &str = "!--";

/// Whitespace inside this element is reproduced verbatim.
pub(super) const PRESERVED_TEXT_TAG: &str = "pre";

/// Raw-text tags and the sequence that ends their body, for both HTML dialects.
pub(super) const HTML_CLOSE_SEQUENCES: &[(&str, &str)] = &[
    (COMMENT_TAG, "-->"),
    ("script", "</script>"),
    ("style", "</style>"),
];

/// Raw-text tags and the sequence that ends their body, for XML.
pub(super) const XML_CLOSE_SEQUENCES: &[(&str, &str)] =
    &[(COMMENT_TAG, "-->"), ("!CDATA[[", "]]>")];

/// Obsolete or non-conforming elements neither HTML dialect will emit.
pub(super) static BANNED_ELEMENTS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "acronym",
        "big",
        "center",
        "content",
        "dir",
        "font",
        "frame",
        "frameset",
        "image",
        "marquee",
        "menuitem",
        "nobr",
        "noembed",
        "noframes",
        "param",
        "plaintext",
        "rb",
        "rtc",
        "shadow",
        "strike",
        "tt",
        "xmp",
    ])
});

/// Elements the client dialect additionally refuses: anything that can run
/// script, pull in styles, or smuggle markup past the DOM.
pub(super) static CLIENT_BANNED_ELEMENTS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| HashSet::from([COMMENT_TAG, "link", "script", "style"]));

/// Elements that never have children or a closing tag.
pub(super) static VOID_ELEMENTS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        COMMENT_TAG,
        "!DOCTYPE",
        "area",
        "base",
        "br",
        "col",
        "embed",
        "hr",
        "img",
        "input",
        "link",
        "meta",
        "param",
        "source",
        "track",
        "wbr",
    ])
});

/// Elements that switch the namespace of their subtree.
pub(super) static NAMESPACE_ELEMENTS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| HashSet::from(["html", "math", "svg"]));

/// Elements that flow with surrounding text instead of starting a block.
pub(super) static INLINE_ELEMENTS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "abbr", "area", "audio", "b", "bdi", "bdo", "cite", "code", "data", "dfn", "em", "embed",
        "i", "iframe", "img", "kbd", "map", "mark", "object", "picture", "portal", "q", "rp",
        "rt", "ruby", "s", "samp", "small", "source", "span", "strong", "sub", "sup", "time",
        "track", "u", "var", "video", "wbr",
    ])
});

/// Extra inline elements for client output.
pub(super) static CLIENT_INLINE_ELEMENTS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| HashSet::from(["a"]));
