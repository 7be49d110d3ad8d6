//! The state and event alphabets and the transition table.
//!
//! Both alphabets are closed enums. The transition table is a constant
//! exhaustive match over the reachable `(State, Event)` pairs: a `None`
//! result means the pair is outside the legal-move set, which the runner
//! treats as a construction bug because no action produces an event its
//! state has no entry for.

use std::fmt;

/// A named mode of the engine. Each state has one action (implemented on
/// the runner) and one row of the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Router: classifies the current byte, emits nothing
    Main,
    /// Echoing a run of content bytes
    Alphanum,
    /// A separator was seen; break the line and re-indent
    LineEnd,
    /// First byte of a whitespace run (the one byte that gets emitted)
    WhitespaceFirst,
    /// Continuation of a whitespace run (silently consumed)
    Whitespace,
    /// An opening bracket: emit, deepen, re-indent
    BlockOpen,
    /// A closing bracket: break, shallow, re-indent, emit
    BlockClose,
    /// Absorbing separators/whitespace immediately after a closing bracket
    BlockEnd,
    /// Emit the single line break owed after an absorbed run
    BlockEndNewline,
    /// An opening quote: remember the delimiter, start pass-through
    QuoteOpen,
    /// The matching closing quote: emit and clear the delimiter
    QuoteClose,
    /// Inside a quoted span; raw pass-through
    InString,
}

/// The classification result produced by a state's action, driving the
/// next transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// No classification rule matched; always fatal
    Unknown,
    /// Terminate the run cleanly. Produced by no default action; reserved.
    Stop,
    /// Unconditional fallback transition
    Any,
    Alphanum,
    NonAlphanum,
    Whitespace,
    NonWhitespace,
    LineSeparator,
    BlockOpenChar,
    BlockCloseChar,
    Quote,
}

impl State {
    /// Look up the successor for `event`, or `None` when the pair is not
    /// in the legal-move set.
    #[must_use]
    pub fn transition(self, event: Event) -> Option<State> {
        use Event as E;
        use State as S;

        match (self, event) {
            (S::Main, E::Alphanum) => Some(S::Alphanum),
            (S::Main, E::LineSeparator) => Some(S::LineEnd),
            (S::Main, E::Whitespace) => Some(S::WhitespaceFirst),
            (S::Main, E::BlockOpenChar) => Some(S::BlockOpen),
            (S::Main, E::BlockCloseChar) => Some(S::BlockClose),
            (S::Main, E::Quote) => Some(S::QuoteOpen),

            (S::Alphanum, E::Alphanum) => Some(S::Alphanum),
            (S::Alphanum, E::NonAlphanum) => Some(S::Main),

            (S::LineEnd | S::WhitespaceFirst | S::Whitespace | S::BlockOpen, E::Whitespace) => {
                Some(S::Whitespace)
            }
            (
                S::LineEnd | S::WhitespaceFirst | S::Whitespace | S::BlockOpen,
                E::NonWhitespace,
            ) => Some(S::Main),

            (S::BlockClose, E::LineSeparator) => Some(S::BlockEnd),
            (S::BlockClose, E::Any) => Some(S::Main),

            (S::BlockEnd, E::LineSeparator | E::Whitespace) => Some(S::BlockEnd),
            (S::BlockEnd, E::BlockCloseChar) => Some(S::BlockClose),
            (S::BlockEnd, E::Any) => Some(S::BlockEndNewline),

            (S::BlockEndNewline, E::Any) => Some(S::Main),

            (S::QuoteOpen | S::InString, E::Quote) => Some(S::QuoteClose),
            (S::QuoteOpen | S::InString, E::Any) => Some(S::InString),

            (S::QuoteClose, E::Any) => Some(S::Main),

            _ => None,
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            State::Main => "Main",
            State::Alphanum => "Alphanum",
            State::LineEnd => "LineEnd",
            State::WhitespaceFirst => "WhitespaceFirst",
            State::Whitespace => "Whitespace",
            State::BlockOpen => "BlockOpen",
            State::BlockClose => "BlockClose",
            State::BlockEnd => "BlockEnd",
            State::BlockEndNewline => "BlockEndNewline",
            State::QuoteOpen => "QuoteOpen",
            State::QuoteClose => "QuoteClose",
            State::InString => "InString",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Event::Unknown => "Unknown",
            Event::Stop => "Stop",
            Event::Any => "Any",
            Event::Alphanum => "Alphanum",
            Event::NonAlphanum => "NonAlphanum",
            Event::Whitespace => "Whitespace",
            Event::NonWhitespace => "NonWhitespace",
            Event::LineSeparator => "LineSeparator",
            Event::BlockOpenChar => "BlockOpenChar",
            Event::BlockCloseChar => "BlockCloseChar",
            Event::Quote => "Quote",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_row() {
        assert_eq!(State::Main.transition(Event::Alphanum), Some(State::Alphanum));
        assert_eq!(State::Main.transition(Event::LineSeparator), Some(State::LineEnd));
        assert_eq!(
            State::Main.transition(Event::Whitespace),
            Some(State::WhitespaceFirst)
        );
        assert_eq!(State::Main.transition(Event::BlockOpenChar), Some(State::BlockOpen));
        assert_eq!(State::Main.transition(Event::BlockCloseChar), Some(State::BlockClose));
        assert_eq!(State::Main.transition(Event::Quote), Some(State::QuoteOpen));
    }

    #[test]
    fn test_whitespace_runs_converge() {
        for s in [
            State::LineEnd,
            State::WhitespaceFirst,
            State::Whitespace,
            State::BlockOpen,
        ] {
            assert_eq!(s.transition(Event::Whitespace), Some(State::Whitespace));
            assert_eq!(s.transition(Event::NonWhitespace), Some(State::Main));
        }
    }

    #[test]
    fn test_block_end_absorption() {
        assert_eq!(
            State::BlockClose.transition(Event::LineSeparator),
            Some(State::BlockEnd)
        );
        assert_eq!(State::BlockEnd.transition(Event::LineSeparator), Some(State::BlockEnd));
        assert_eq!(State::BlockEnd.transition(Event::Whitespace), Some(State::BlockEnd));
        assert_eq!(
            State::BlockEnd.transition(Event::BlockCloseChar),
            Some(State::BlockClose)
        );
        assert_eq!(State::BlockEnd.transition(Event::Any), Some(State::BlockEndNewline));
        assert_eq!(State::BlockEndNewline.transition(Event::Any), Some(State::Main));
    }

    #[test]
    fn test_string_mode() {
        assert_eq!(State::QuoteOpen.transition(Event::Any), Some(State::InString));
        assert_eq!(State::QuoteOpen.transition(Event::Quote), Some(State::QuoteClose));
        assert_eq!(State::InString.transition(Event::Any), Some(State::InString));
        assert_eq!(State::InString.transition(Event::Quote), Some(State::QuoteClose));
        assert_eq!(State::QuoteClose.transition(Event::Any), Some(State::Main));
    }

    #[test]
    fn test_illegal_moves_are_absent() {
        assert_eq!(State::Main.transition(Event::Any), None);
        assert_eq!(State::Alphanum.transition(Event::Whitespace), None);
        assert_eq!(State::BlockEndNewline.transition(Event::Whitespace), None);
        assert_eq!(State::InString.transition(Event::Alphanum), None);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(State::BlockEndNewline.to_string(), "BlockEndNewline");
        assert_eq!(Event::NonWhitespace.to_string(), "NonWhitespace");
    }
}
