//! Scan an AFM document, one token or one line at a time.
//!
//! The lexer knows nothing about the AFM grammar. It reads bytes from a
//! buffered source and hands back either whitespace-delimited tokens or the
//! text up to the end of a line. Bytes are decoded as Latin-1, so every byte
//! maps to exactly one `char`.
//!
//! The `Lexer` type is driven by a [Parser].
//!
//! [Parser]: crate::Parser

use std::io;

use crate::error::Error;

pub(crate) struct Lexer<R> {
    bytes: io::Bytes<R>,
}

impl<R: io::BufRead> Lexer<R> {
    pub(crate) fn new(reader: R) -> Self {
        Lexer {
            bytes: reader.bytes(),
        }
    }

    fn bump(&mut self) -> Result<Option<u8>, Error> {
        Ok(self.bytes.next().transpose()?)
    }

    /// Advance past whitespace, returning the first byte that isn't.
    fn skip_whitespace(&mut self) -> Result<Option<u8>, Error> {
        loop {
            match self.bump()? {
                Some(byte) if is_whitespace(byte) => continue,
                other => return Ok(other),
            }
        }
    }

    /// Read the next whitespace-delimited token.
    ///
    /// Returns `None` once the input is exhausted. The whitespace byte that
    /// ends the token is consumed.
    pub(crate) fn next_token(&mut self) -> Result<Option<String>, Error> {
        let Some(first) = self.skip_whitespace()? else {
            return Ok(None);
        };
        let mut buf = String::with_capacity(24);
        buf.push(first as char);
        while let Some(byte) = self.bump()? {
            if is_whitespace(byte) {
                break;
            }
            buf.push(byte as char);
        }
        Ok(Some(buf))
    }

    /// Read the next non-empty line, skipping any leading whitespace
    /// (including line breaks).
    ///
    /// Used both for record lines and for free-text values, so a value may sit
    /// on the line after its keyword. The line break that ends the line is
    /// consumed but not returned.
    pub(crate) fn read_line(&mut self) -> Result<Option<String>, Error> {
        let Some(first) = self.skip_whitespace()? else {
            return Ok(None);
        };
        let mut buf = String::with_capacity(60);
        buf.push(first as char);
        while let Some(byte) = self.bump()? {
            if is_eol(byte) {
                break;
            }
            buf.push(byte as char);
        }
        Ok(Some(buf))
    }
}

fn is_eol(byte: u8) -> bool {
    byte == b'\r' || byte == b'\n'
}

fn is_whitespace(byte: u8) -> bool {
    byte == b' ' || byte == b'\t' || is_eol(byte)
}
