//! The transition table.
//!
//! [`route`] dispatches on the *current* state first; each state then
//! classifies the character on its own terms. That is what lets `>` close an
//! element in one place, stay literal inside a quoted value, and be part of
//! the expression inside an injection.

use super::state::LexerState;

/// Compute the state reached by consuming `glyph` from `state`.
///
/// Total over every `(char, LexerState)` pair: malformed input never fails
/// here, it just never reaches a closing state. Raw-text bodies are opaque
/// to this table; use [`AltTextScanner`](super::alt_text::AltTextScanner) to
/// find where they end.
#[must_use]
pub fn route(glyph: char, state: LexerState) -> LexerState {
    match state {
        LexerState::Attr => from_attribute(glyph),
        LexerState::AttrMapInjection
        | LexerState::DescendantInjection
        | LexerState::InjectionSpace => from_injection(glyph),
        LexerState::AttrQuote | LexerState::AttrValue => from_attribute_quote(glyph),
        LexerState::AttrQuoteClosed => from_attribute_quote_closed(glyph),
        LexerState::AttrSetter => from_attribute_setter(glyph),
        LexerState::AttrValueUnquoted => from_attribute_value_unquoted(glyph),
        LexerState::Element => from_element(glyph),
        LexerState::ElementSpace => from_element_space(glyph),
        LexerState::EmptyElement => from_empty_element(glyph),
        LexerState::Tag => from_tag(glyph),
        LexerState::TailElementSolidus => from_tail_element_solidus(glyph),
        LexerState::TailElementSpace => from_tail_element_space(glyph),
        LexerState::TailTag => from_tail_tag(glyph),
        LexerState::AltText | LexerState::AltTextCloseSequence => LexerState::AltText,
        LexerState::CommentText => LexerState::CommentText,
        LexerState::Initial
        | LexerState::Text
        | LexerState::ElementClosed
        | LexerState::EmptyElementClosed
        | LexerState::TailElementClosed
        | LexerState::Fragment
        | LexerState::FragmentClosed
        | LexerState::InjectionConfirmed => from_initial(glyph),
    }
}

fn from_attribute(glyph: char) -> LexerState {
    match glyph {
        c if c.is_whitespace() => LexerState::ElementSpace,
        '=' => LexerState::AttrSetter,
        '>' => LexerState::ElementClosed,
        '/' => LexerState::EmptyElement,
        '{' => LexerState::AttrMapInjection,
        _ => LexerState::Attr,
    }
}

fn from_injection(glyph: char) -> LexerState {
    match glyph {
        '}' => LexerState::InjectionConfirmed,
        _ => LexerState::InjectionSpace,
    }
}

/// Quotes are not escape-aware: any `"` ends the value.
fn from_attribute_quote(glyph: char) -> LexerState {
    match glyph {
        '"' => LexerState::AttrQuoteClosed,
        _ => LexerState::AttrValue,
    }
}

fn from_attribute_quote_closed(glyph: char) -> LexerState {
    match glyph {
        '>' => LexerState::ElementClosed,
        '/' => LexerState::EmptyElement,
        _ => LexerState::ElementSpace,
    }
}

fn from_attribute_setter(glyph: char) -> LexerState {
    match glyph {
        c if c.is_whitespace() => LexerState::AttrSetter,
        '"' => LexerState::AttrQuote,
        _ => LexerState::AttrValueUnquoted,
    }
}

fn from_attribute_value_unquoted(glyph: char) -> LexerState {
    match glyph {
        c if c.is_whitespace() => LexerState::ElementSpace,
        '>' => LexerState::ElementClosed,
        _ => LexerState::AttrValueUnquoted,
    }
}

fn from_element(glyph: char) -> LexerState {
    match glyph {
        c if c.is_whitespace() => LexerState::Element,
        '>' => LexerState::Fragment,
        '/' => LexerState::TailElementSolidus,
        _ => LexerState::Tag,
    }
}

fn from_element_space(glyph: char) -> LexerState {
    match glyph {
        c if c.is_whitespace() => LexerState::ElementSpace,
        '>' => LexerState::ElementClosed,
        '/' => LexerState::EmptyElement,
        '{' => LexerState::AttrMapInjection,
        _ => LexerState::Attr,
    }
}

fn from_empty_element(glyph: char) -> LexerState {
    match glyph {
        '>' => LexerState::EmptyElementClosed,
        _ => LexerState::EmptyElement,
    }
}

fn from_tag(glyph: char) -> LexerState {
    match glyph {
        c if c.is_whitespace() => LexerState::ElementSpace,
        '>' => LexerState::ElementClosed,
        '/' => LexerState::EmptyElement,
        _ => LexerState::Tag,
    }
}

fn from_tail_element_solidus(glyph: char) -> LexerState {
    match glyph {
        c if c.is_whitespace() => LexerState::TailElementSolidus,
        '>' => LexerState::FragmentClosed,
        _ => LexerState::TailTag,
    }
}

fn from_tail_tag(glyph: char) -> LexerState {
    match glyph {
        c if c.is_whitespace() => LexerState::TailElementSpace,
        '>' => LexerState::TailElementClosed,
        _ => LexerState::TailTag,
    }
}

fn from_tail_element_space(glyph: char) -> LexerState {
    match glyph {
        '>' => LexerState::TailElementClosed,
        _ => LexerState::TailElementSpace,
    }
}

fn from_initial(glyph: char) -> LexerState {
    match glyph {
        '<' => LexerState::Element,
        '{' => LexerState::DescendantInjection,
        _ => LexerState::Text,
    }
}
