use strum_macros::{Display, EnumIter};

/// A scanner position in the template grammar.
///
/// Names loosely follow the HTML tokenization states: one state per semantic
/// position rather than per character class. The router never buffers, so
/// a driver tells token boundaries apart purely by watching these values
/// change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum LexerState {
    // Attributes
    /// Closing `"` of a quoted attribute value.
    AttrQuoteClosed,
    /// Opening `"` of a quoted attribute value.
    AttrQuote,
    /// `{` in attribute position, starting an attribute-map injection.
    AttrMapInjection,
    /// `=` between an attribute name and its value (and any whitespace after it).
    AttrSetter,
    /// Inside a quoted attribute value.
    AttrValue,
    /// Inside an unquoted attribute value.
    AttrValueUnquoted,
    /// Inside an attribute name.
    Attr,

    // Closing tags
    /// `>` ending a `</tag>` sequence.
    TailElementClosed,
    /// `/` right after `<`, plus any whitespace before the tail tag name.
    TailElementSolidus,
    /// Whitespace after a tail tag name.
    TailElementSpace,
    /// Inside a tail tag name.
    TailTag,

    // Injections
    /// `{` in text position, starting a descendant injection.
    DescendantInjection,
    /// `>` ending `</>`.
    FragmentClosed,
    /// `>` ending `<>`.
    Fragment,

    // Self-closing tags
    /// `>` ending a self-closing tag.
    EmptyElementClosed,
    /// After the `/` of a self-closing tag.
    EmptyElement,

    /// Start of a document.
    #[default]
    Initial,
    /// `}` ending an injection.
    InjectionConfirmed,
    /// Inside an injection expression.
    InjectionSpace,

    // Opening tags
    /// `>` ending an opening tag.
    ElementClosed,
    /// Whitespace between attributes.
    ElementSpace,
    /// `<` opening a tag, plus any whitespace before the tag name.
    Element,
    /// Inside an opening tag name.
    Tag,

    /// Free text between tags.
    Text,

    // Raw text
    /// Body of a raw-text element such as `script` or `style`.
    AltText,
    /// A partial match of the current raw-text close sequence.
    AltTextCloseSequence,
    /// Body of a comment.
    CommentText,
}
