//! Byte classification.
//!
//! Maps a single input byte to one of the non-overlapping byte classes the
//! machine understands. The content class is deliberately broad: anything
//! that is not a bracket, separator, whitespace, or quote flows through as
//! token content, so punctuation, identifiers, and numbers are all echoed
//! unchanged. Classification is per-byte only; multi-byte encodings are
//! passed through without any Unicode awareness.

use super::state::Event;

/// Token content: not a bracket, not space/tab/newline, not `,`/`;`, not a quote
#[must_use]
pub fn is_content(b: u8) -> bool {
    !is_block_open(b)
        && !is_block_close(b)
        && !is_whitespace(b)
        && b != b'\n'
        && !matches!(b, b',' | b';')
        && !is_quote(b)
}

/// Line separator: comma, semicolon, or newline
#[must_use]
pub fn is_separator(b: u8) -> bool {
    matches!(b, b',' | b';' | b'\n')
}

/// Collapsible whitespace: space or tab (newline is a separator instead)
#[must_use]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t')
}

/// Whitespace including newline, as absorbed after separators and brackets
#[must_use]
pub fn is_whitespace_or_newline(b: u8) -> bool {
    is_whitespace(b) || b == b'\n'
}

#[must_use]
pub fn is_block_open(b: u8) -> bool {
    matches!(b, b'{' | b'(' | b'[')
}

#[must_use]
pub fn is_block_close(b: u8) -> bool {
    matches!(b, b'}' | b')' | b']')
}

#[must_use]
pub fn is_quote(b: u8) -> bool {
    matches!(b, b'\'' | b'"' | b'`')
}

/// Classify a byte into the event driving the next transition out of the
/// router state. Classes are checked in fixed priority order; since the
/// content class is the complement of the rest, every byte matches exactly
/// one class and [`Event::Unknown`] is never produced here. It remains the
/// fallback so a future narrowing of the content class stays fatal rather
/// than silent.
#[must_use]
pub fn classify(b: u8) -> Event {
    if is_content(b) {
        return Event::Alphanum;
    }
    if is_separator(b) {
        return Event::LineSeparator;
    }
    if is_whitespace(b) {
        return Event::Whitespace;
    }
    if is_block_open(b) {
        return Event::BlockOpenChar;
    }
    if is_block_close(b) {
        return Event::BlockCloseChar;
    }
    if is_quote(b) {
        return Event::Quote;
    }
    Event::Unknown
}
