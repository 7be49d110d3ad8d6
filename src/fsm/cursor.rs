//! One-byte input cursor.
//!
//! The cursor holds the single byte currently "in hand" plus the active
//! quote delimiter while inside a string. Advancing reads exactly one byte
//! from the source and reports end-of-input as a first-class [`Fetch::Eof`]
//! variant rather than a sentinel byte, so every action handles exhausted
//! input the same way.

use std::io::{ErrorKind, Read};

use crate::error::Result;

/// Result of advancing the cursor by one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fetch {
    /// A byte was read and is now the current byte
    Byte(u8),
    /// The source is exhausted; the current byte is no longer meaningful
    Eof,
}

impl Fetch {
    #[must_use]
    pub fn is_eof(self) -> bool {
        matches!(self, Fetch::Eof)
    }
}

/// Exactly one cursor exists per run, owned and mutated only by the runner.
pub struct Cursor<R: Read> {
    input: R,
    cur: u8,
    eof: bool,
    /// Active quote delimiter, `None` outside quoted spans
    quote: Option<u8>,
}

impl<R: Read> Cursor<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            cur: 0,
            eof: false,
            quote: None,
        }
    }

    /// The byte currently in hand. Only meaningful while the last advance
    /// returned [`Fetch::Byte`].
    #[must_use]
    pub fn current(&self) -> u8 {
        self.cur
    }

    #[must_use]
    pub fn at_end(&self) -> bool {
        self.eof
    }

    /// Read the next byte from the source. Interrupted reads are retried;
    /// a zero-length read marks the cursor exhausted.
    pub fn advance(&mut self) -> Result<Fetch> {
        let mut buf = [0u8; 1];
        loop {
            match self.input.read(&mut buf) {
                Ok(0) => {
                    self.eof = true;
                    return Ok(Fetch::Eof);
                }
                Ok(_) => {
                    self.cur = buf[0];
                    return Ok(Fetch::Byte(buf[0]));
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Remember the opening delimiter so the matching close can be found
    pub fn open_quote(&mut self, delim: u8) {
        self.quote = Some(delim);
    }

    pub fn close_quote(&mut self) {
        self.quote = None;
    }

    /// Whether the current byte matches the active quote delimiter
    #[must_use]
    pub fn at_quote_delimiter(&self) -> bool {
        self.quote == Some(self.cur)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor as IoCursor;

    #[test]
    fn test_advance_yields_bytes_in_order() {
        let mut cursor = Cursor::new(IoCursor::new(b"ab".to_vec()));
        assert_eq!(cursor.advance().unwrap(), Fetch::Byte(b'a'));
        assert_eq!(cursor.current(), b'a');
        assert_eq!(cursor.advance().unwrap(), Fetch::Byte(b'b'));
        assert_eq!(cursor.current(), b'b');
        assert_eq!(cursor.advance().unwrap(), Fetch::Eof);
        assert!(cursor.at_end());
    }

    #[test]
    fn test_empty_source_is_immediately_eof() {
        let mut cursor = Cursor::new(IoCursor::new(Vec::new()));
        assert!(cursor.advance().unwrap().is_eof());
    }

    #[test]
    fn test_quote_tracking() {
        let mut cursor = Cursor::new(IoCursor::new(b"'x'".to_vec()));
        cursor.advance().unwrap();
        assert!(!cursor.at_quote_delimiter());
        cursor.open_quote(cursor.current());
        assert!(cursor.at_quote_delimiter());
        cursor.advance().unwrap(); // x
        assert!(!cursor.at_quote_delimiter());
        cursor.advance().unwrap(); // '
        assert!(cursor.at_quote_delimiter());
        cursor.close_quote();
        assert!(!cursor.at_quote_delimiter());
    }
}
