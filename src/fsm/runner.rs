//! The engine loop and the per-state actions.
//!
//! The runner owns the cursor, the output sink, and the indentation depth.
//! Each step invokes the current state's action, which may emit bytes,
//! advance the cursor, and adjust indentation, and then reports the event
//! that selects the next state from the transition table. Actions are the
//! only place mutation happens.
//!
//! End-of-input is reported by every action as `Ok(None)` and terminates
//! the loop cleanly, wherever it occurs. After a clean exit the output is
//! normalized to end with exactly one line terminator.

use std::io::{Read, Write};

use anyhow::bail;

use super::classify::{
    classify, is_block_close, is_content, is_separator, is_whitespace, is_whitespace_or_newline,
};
use super::cursor::Cursor;
use super::state::{Event, State};
use crate::config::Config;
use crate::error::Result;

/// Drives the transition table over one input stream.
pub struct Runner<R: Read, W: Write> {
    cursor: Cursor<R>,
    output: W,
    indent_unit: String,
    indent_level: usize,
    /// Last byte written, for end-of-run newline normalization
    last_out: Option<u8>,
    trace: bool,
}

impl<R: Read, W: Write> Runner<R, W> {
    pub fn new(input: R, output: W, config: &Config) -> Self {
        Self {
            cursor: Cursor::new(input),
            output,
            indent_unit: " ".repeat(config.indent),
            indent_level: 0,
            last_out: None,
            trace: config.trace,
        }
    }

    /// Run the machine from the router state until the input is exhausted.
    ///
    /// Fails on an unclassifiable byte, on a transition-table miss (a
    /// construction bug), or on any I/O error from the source or sink.
    pub fn run(&mut self) -> Result<()> {
        let mut state = State::Main;

        // Prime the cursor; empty input still yields one line terminator.
        if !self.cursor.advance()?.is_eof() {
            loop {
                let Some(event) = self.step(state)? else {
                    break;
                };

                if event == Event::Unknown {
                    bail!(
                        "no classification for byte {:?} in state {state}",
                        char::from(self.cursor.current())
                    );
                }
                if event == Event::Stop {
                    break;
                }

                let Some(next) = state.transition(event) else {
                    bail!("no transition from state {state} on event {event}");
                };

                if self.trace {
                    eprintln!(
                        "{state}({:?}): {event} -> {next}",
                        char::from(self.cursor.current())
                    );
                }

                state = next;
            }
        }

        if self.last_out != Some(b'\n') {
            self.newline()?;
        }
        Ok(())
    }

    /// Invoke the action for `state`. `Ok(None)` means the input ran out.
    fn step(&mut self, state: State) -> Result<Option<Event>> {
        match state {
            State::Main => self.route(),
            State::Alphanum => self.alphanum(),
            State::LineEnd => self.line_end(),
            State::WhitespaceFirst => self.whitespace_first(),
            State::Whitespace => self.whitespace(),
            State::BlockOpen => self.block_open(),
            State::BlockClose => self.block_close(),
            State::BlockEnd => self.block_end(),
            State::BlockEndNewline => self.block_end_newline(),
            State::QuoteOpen => self.quote_open(),
            State::QuoteClose => self.quote_close(),
            State::InString => self.in_string(),
        }
    }

    // --- actions ---

    /// Router: classify the byte in hand, emit nothing, advance nothing.
    fn route(&mut self) -> Result<Option<Event>> {
        Ok(Some(classify(self.cursor.current())))
    }

    /// Echo a content byte and keep going while the run lasts.
    fn alphanum(&mut self) -> Result<Option<Event>> {
        self.emit_current()?;
        if self.cursor.advance()?.is_eof() {
            return Ok(None);
        }
        Ok(Some(if is_content(self.cursor.current()) {
            Event::Alphanum
        } else {
            Event::NonAlphanum
        }))
    }

    /// A separator: emit it (unless it is itself a newline), break the
    /// line, and re-render indentation at the current depth.
    fn line_end(&mut self) -> Result<Option<Event>> {
        if self.cursor.current() != b'\n' {
            self.emit_current()?;
        }
        self.newline()?;
        self.render_indent()?;
        if self.cursor.advance()?.is_eof() {
            return Ok(None);
        }
        Ok(Some(if is_whitespace_or_newline(self.cursor.current()) {
            Event::Whitespace
        } else {
            Event::NonWhitespace
        }))
    }

    /// First byte of a whitespace run: the one byte that survives.
    fn whitespace_first(&mut self) -> Result<Option<Event>> {
        self.emit_current()?;
        self.whitespace()
    }

    /// Continuation of a whitespace run: silently consumed.
    fn whitespace(&mut self) -> Result<Option<Event>> {
        if self.cursor.advance()?.is_eof() {
            return Ok(None);
        }
        Ok(Some(if is_whitespace(self.cursor.current()) {
            Event::Whitespace
        } else {
            Event::NonWhitespace
        }))
    }

    /// Opening bracket: emit, deepen, start the block's first line.
    fn block_open(&mut self) -> Result<Option<Event>> {
        self.emit_current()?;
        self.newline()?;
        self.indent_level += 1;
        self.render_indent()?;
        if self.cursor.advance()?.is_eof() {
            return Ok(None);
        }
        Ok(Some(if is_whitespace_or_newline(self.cursor.current()) {
            Event::Whitespace
        } else {
            Event::NonWhitespace
        }))
    }

    /// Closing bracket: break the line, shallow, re-indent, then emit the
    /// bracket. A following separator hands off to `BlockEnd` so the run
    /// after the bracket is absorbed instead of accumulating blank lines.
    fn block_close(&mut self) -> Result<Option<Event>> {
        self.newline()?;
        self.indent_level = self.indent_level.saturating_sub(1);
        self.render_indent()?;
        self.emit_current()?;
        if self.cursor.advance()?.is_eof() {
            return Ok(None);
        }
        Ok(Some(if is_separator(self.cursor.current()) {
            Event::LineSeparator
        } else {
            Event::Any
        }))
    }

    /// Absorb the separator/whitespace run following a closing bracket,
    /// emitting only the one separator byte that is not whitespace.
    fn block_end(&mut self) -> Result<Option<Event>> {
        if !is_whitespace_or_newline(self.cursor.current()) {
            self.emit_current()?;
        }
        if self.cursor.advance()?.is_eof() {
            return Ok(None);
        }
        let b = self.cursor.current();
        Ok(Some(if is_separator(b) {
            Event::LineSeparator
        } else if is_whitespace_or_newline(b) {
            Event::Whitespace
        } else if is_block_close(b) {
            Event::BlockCloseChar
        } else {
            Event::Any
        }))
    }

    /// Pay out the single line break owed after an absorbed run.
    fn block_end_newline(&mut self) -> Result<Option<Event>> {
        self.newline()?;
        self.render_indent()?;
        Ok(Some(Event::Any))
    }

    /// Opening quote: remember the delimiter and enter pass-through mode.
    fn quote_open(&mut self) -> Result<Option<Event>> {
        self.cursor.open_quote(self.cursor.current());
        self.emit_current()?;
        if self.cursor.advance()?.is_eof() {
            return Ok(None);
        }
        // Empty string: the delimiter recurs immediately
        Ok(Some(if self.cursor.at_quote_delimiter() {
            Event::Quote
        } else {
            Event::Any
        }))
    }

    /// The matching closing quote: emit it and leave pass-through mode.
    fn quote_close(&mut self) -> Result<Option<Event>> {
        self.emit_current()?;
        self.cursor.close_quote();
        if self.cursor.advance()?.is_eof() {
            return Ok(None);
        }
        Ok(Some(Event::Any))
    }

    /// Raw pass-through until the active delimiter recurs.
    fn in_string(&mut self) -> Result<Option<Event>> {
        self.emit_current()?;
        if self.cursor.advance()?.is_eof() {
            return Ok(None);
        }
        Ok(Some(if self.cursor.at_quote_delimiter() {
            Event::Quote
        } else {
            Event::Any
        }))
    }

    // --- sink helpers ---

    fn emit_current(&mut self) -> Result<()> {
        let b = self.cursor.current();
        self.output.write_all(&[b])?;
        self.last_out = Some(b);
        Ok(())
    }

    fn newline(&mut self) -> Result<()> {
        self.output.write_all(b"\n")?;
        self.last_out = Some(b'\n');
        Ok(())
    }

    fn render_indent(&mut self) -> Result<()> {
        for _ in 0..self.indent_level {
            self.output.write_all(self.indent_unit.as_bytes())?;
            if let Some(&b) = self.indent_unit.as_bytes().last() {
                self.last_out = Some(b);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor as IoCursor;

    fn pretty(input: &str) -> String {
        let config = Config::default();
        let mut out = Vec::new();
        let mut runner = Runner::new(IoCursor::new(input.as_bytes().to_vec()), &mut out, &config);
        runner.run().unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_bare_token() {
        assert_eq!(pretty("ab"), "ab\n");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(pretty(""), "\n");
    }

    #[test]
    fn test_comma_breaks_line() {
        assert_eq!(pretty("a,b"), "a,\nb\n");
    }

    #[test]
    fn test_semicolon_breaks_line() {
        assert_eq!(pretty("a;b"), "a;\nb\n");
    }

    #[test]
    fn test_whitespace_collapses() {
        assert_eq!(pretty("a  b"), "a b\n");
        assert_eq!(pretty("a\t\t\tb"), "a\tb\n");
    }

    #[test]
    fn test_quoted_span_is_untouched() {
        assert_eq!(pretty("'ab',c"), "'ab',\nc\n");
    }

    #[test]
    fn test_block_indents() {
        assert_eq!(pretty("{a}\n"), "{\n    a\n}\n");
    }

    #[test]
    fn test_trailing_close_bracket_terminates_cleanly() {
        // Input ends on the closing bracket; the look-ahead hits
        // end-of-input and the run still finishes with clean output.
        assert_eq!(pretty("{a}"), "{\n    a\n}\n");
    }

    #[test]
    fn test_trailing_close_quote_terminates_cleanly() {
        assert_eq!(pretty("'ab'"), "'ab'\n");
    }

    #[test]
    fn test_nested_blocks() {
        assert_eq!(pretty("{a{b}}"), "{\n    a{\n        b\n    }\n}\n");
    }

    #[test]
    fn test_separator_inside_block_keeps_depth() {
        assert_eq!(pretty("{a,b}"), "{\n    a,\n    b\n}\n");
    }

    #[test]
    fn test_close_then_separator_collapses() {
        // "}," followed by indentation noise becomes a single clean line
        assert_eq!(pretty("{a},\n  b"), "{\n    a\n},\nb\n");
    }

    #[test]
    fn test_empty_string_literal() {
        assert_eq!(pretty("''"), "''\n");
    }

    #[test]
    fn test_string_preserves_structure_bytes() {
        assert_eq!(pretty("\"a,{ }b\""), "\"a,{ }b\"\n");
    }

    #[test]
    fn test_backtick_string() {
        assert_eq!(pretty("`x y`"), "`x y`\n");
    }

    #[test]
    fn test_mixed_quotes_inside_string() {
        // A double quote inside a single-quoted span is content
        assert_eq!(pretty("'a\"b'"), "'a\"b'\n");
    }

    #[test]
    fn test_trailing_newline_not_duplicated() {
        assert_eq!(pretty("ab\n"), "ab\n");
        assert_eq!(pretty("ab\n\n"), "ab\n");
    }

    #[test]
    fn test_indent_width_two() {
        let config = Config {
            indent: 2,
            ..Config::default()
        };
        let mut out = Vec::new();
        let mut runner = Runner::new(IoCursor::new(b"{a}".to_vec()), &mut out, &config);
        runner.run().unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\n  a\n}\n");
    }

    #[test]
    fn test_whitespace_collapsing_for_any_run_length() {
        for n in 1..40 {
            let input = format!("a{}b", " ".repeat(n));
            assert_eq!(pretty(&input), "a b\n", "run of {n} spaces");
        }
    }

    #[test]
    fn test_function_call_shape() {
        assert_eq!(
            pretty("fn some(param) { hi }"),
            "fn some(\n    param\n) {\n    hi \n}\n"
        );
    }
}
