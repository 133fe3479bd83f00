//! Splitting a single line of text into tokens.

/// The characters a [`LineTokenizer`] splits on.
///
/// Separators are dropped; punctuation characters are returned as tokens of
/// their own, so a `;` glued to the end of a name still shows up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Delimiters {
    separators: &'static [u8],
    punctuation: &'static [u8],
}

impl Delimiters {
    /// Space, tab, line feed, carriage return and form feed.
    pub const WHITESPACE: Delimiters = Delimiters {
        separators: b" \t\n\r\x0c",
        punctuation: b"",
    };

    /// Char metrics lines, where every field is closed by a `;` token.
    pub const CHAR_METRICS: Delimiters = Delimiters {
        separators: b" \t\n\r\x0c",
        punctuation: b";",
    };

    /// Composite lines, where `;` only separates parts.
    pub const COMPOSITES: Delimiters = Delimiters {
        separators: b" \t\n\r\x0c;",
        punctuation: b"",
    };

    pub const fn new(separators: &'static [u8], punctuation: &'static [u8]) -> Delimiters {
        Delimiters {
            separators,
            punctuation,
        }
    }

    fn is_separator(&self, byte: u8) -> bool {
        self.separators.contains(&byte)
    }

    fn is_punctuation(&self, byte: u8) -> bool {
        self.punctuation.contains(&byte)
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Delimiters::WHITESPACE
    }
}

/// A single forward pass over the tokens of a line.
///
/// Consecutive delimiters never produce empty tokens.
#[derive(Clone, Debug)]
pub struct LineTokenizer<'a> {
    line: &'a str,
    pos: usize,
    delimiters: Delimiters,
}

impl<'a> LineTokenizer<'a> {
    pub fn new(line: &'a str) -> LineTokenizer<'a> {
        LineTokenizer::with_delimiters(line, Delimiters::default())
    }

    pub fn with_delimiters(line: &'a str, delimiters: Delimiters) -> LineTokenizer<'a> {
        LineTokenizer {
            line,
            pos: 0,
            delimiters,
        }
    }

    fn skip_separators(&mut self) {
        let bytes = self.line.as_bytes();
        while self.pos < bytes.len() && self.delimiters.is_separator(bytes[self.pos]) {
            self.pos += 1;
        }
    }

    pub fn has_next(&mut self) -> bool {
        self.skip_separators();
        self.pos < self.line.len()
    }
}

impl<'a> Iterator for LineTokenizer<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if !self.has_next() {
            return None;
        }
        let bytes = self.line.as_bytes();
        let start = self.pos;
        if self.delimiters.is_punctuation(bytes[start]) {
            self.pos += 1;
        } else {
            while self.pos < bytes.len()
                && !self.delimiters.is_separator(bytes[self.pos])
                && !self.delimiters.is_punctuation(bytes[self.pos])
            {
                self.pos += 1;
            }
        }
        // delimiters are ASCII, so these are always char boundaries
        Some(&self.line[start..self.pos])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(line: &str, delimiters: Delimiters) -> Vec<&str> {
        LineTokenizer::with_delimiters(line, delimiters).collect()
    }

    #[test]
    fn no_empty_tokens() {
        assert_eq!(
            split("  a\t\tb \x0c c  ", Delimiters::WHITESPACE),
            vec!["a", "b", "c"]
        );
        assert!(split(" \t ", Delimiters::WHITESPACE).is_empty());
    }

    #[test]
    fn semicolon_is_its_own_token() {
        assert_eq!(
            split("C 102 ; WX 333 ; N f ; L i fi;L l fl ;", Delimiters::CHAR_METRICS),
            vec![
                "C", "102", ";", "WX", "333", ";", "N", "f", ";", "L", "i", "fi", ";", "L", "l",
                "fl", ";"
            ]
        );
    }

    #[test]
    fn composite_semicolons_are_dropped() {
        assert_eq!(
            split("CC Aacute 2 ; PCC A 0 0 ; PCC acute 194 214 ;", Delimiters::COMPOSITES),
            vec!["CC", "Aacute", "2", "PCC", "A", "0", "0", "PCC", "acute", "194", "214"]
        );
    }

    #[test]
    fn has_next_is_forward_only() {
        let mut tokens = LineTokenizer::new("N space");
        assert!(tokens.has_next());
        assert_eq!(tokens.next(), Some("N"));
        assert!(tokens.has_next());
        assert_eq!(tokens.next(), Some("space"));
        assert!(!tokens.has_next());
        assert_eq!(tokens.next(), None);
    }

    #[test]
    fn non_ascii_tokens() {
        assert_eq!(
            split("N \u{e9}t\u{e9} ;", Delimiters::CHAR_METRICS),
            vec!["N", "\u{e9}t\u{e9}", ";"]
        );
    }
}
