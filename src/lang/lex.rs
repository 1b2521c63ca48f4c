use super::token::*;

/// Lexes a whole line, yielding every token up to the end-of-line
/// marker. This is the producer side of the evaluator handoff: the
/// `EndOfLine` token never escapes this module's iterator.
pub fn lex(s: &str) -> Vec<Token> {
    Lexer::new(s).collect()
}

fn is_concat_whitespace(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

fn is_concat_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Byte-cursor scanner over one line of text.
///
/// Tokens are recognised by maximal munch with one byte of lookahead,
/// which is exactly enough to tell ".S" from ".". Scanning is
/// byte-indexed, but every token boundary falls on ASCII whitespace or
/// an ASCII glyph, so literal slices are always on char boundaries and
/// stray non-ASCII input simply rides along inside an unknown run.
pub struct Lexer<'a> {
    line: &'a str,
    start: usize,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(line: &'a str) -> Lexer<'a> {
        Lexer {
            line,
            start: 0,
            pos: 0,
        }
    }

    /// Restarts the scanner on a fresh line. A line is the unit of
    /// lexing; no token ever spans two of them.
    pub fn init(&mut self, line: &'a str) {
        self.line = line;
        self.start = 0;
        self.pos = 0;
    }

    /// Returns the next token, advancing the cursor. Once the line is
    /// exhausted this returns `EndOfLine` forever.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        if self.pos >= self.line.len() {
            return Token::EndOfLine;
        }
        match self.line.as_bytes()[self.pos] {
            b'+' => {
                self.pos += 1;
                Token::Operator(Operator::Plus)
            }
            b'-' => {
                self.pos += 1;
                Token::Operator(Operator::Minus)
            }
            b'*' => {
                self.pos += 1;
                Token::Operator(Operator::Multiply)
            }
            b'/' => {
                self.pos += 1;
                Token::Operator(Operator::Divide)
            }
            b'.' => {
                if self.peek() == b'S' {
                    self.pos += 2;
                    Token::PrintStack
                } else {
                    self.pos += 1;
                    Token::Print
                }
            }
            b if is_concat_digit(b) => self.integer(),
            _ => self.unknown(),
        }
    }

    // Unsigned digit runs only: "-" is always the subtraction operator
    // and "." is always a print, so "-5" and "5.2" are never numbers.
    fn integer(&mut self) -> Token {
        let bytes = self.line.as_bytes();
        self.start = self.pos;
        while self.pos < self.line.len() && is_concat_digit(bytes[self.pos]) {
            self.pos += 1;
        }
        Token::Integer(self.line[self.start..self.pos].to_string())
    }

    // Maximal run of anything unrecognised, ended by whitespace. Deciding
    // what to do about it is the evaluator's job, not a lex failure.
    fn unknown(&mut self) -> Token {
        let bytes = self.line.as_bytes();
        self.start = self.pos;
        while self.pos < self.line.len() && !is_concat_whitespace(bytes[self.pos]) {
            self.pos += 1;
        }
        Token::Unknown(self.line[self.start..self.pos].to_string())
    }

    // Space and tab, the same set used to end an unknown run.
    fn skip_whitespace(&mut self) {
        let bytes = self.line.as_bytes();
        while self.pos < self.line.len() && is_concat_whitespace(bytes[self.pos]) {
            self.pos += 1;
        }
    }

    // One byte of lookahead past the cursor. Reads as a space at end of
    // line, so a trailing "." lexes as a print.
    fn peek(&self) -> u8 {
        if self.pos + 1 < self.line.len() {
            self.line.as_bytes()[self.pos + 1]
        } else {
            b' '
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        match self.next_token() {
            Token::EndOfLine => None,
            token => Some(token),
        }
    }
}
