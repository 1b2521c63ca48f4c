use super::Error;
use crate::error;
use std::convert::TryFrom;

/// The complete token vocabulary of the concat notation.
///
/// A token remembers the exact text that produced it so the evaluator
/// can print values without ever re-reading the source line.
#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Unknown(String),
    Integer(String),
    Operator(Operator),
    Print,
    PrintStack,
    EndOfLine,
}

impl Token {
    /// Kind name shown by the `.S` diagnostic dump.
    pub fn kind(&self) -> &'static str {
        use Token::*;
        match self {
            Unknown(_) => "UNKNOWN",
            Integer(_) => "INTEGER",
            Operator(op) => op.kind(),
            Print => "PRINT",
            PrintStack => "PRINT-STACK",
            EndOfLine => "END-OF-LINE",
        }
    }

    /// The exact substring this token was lexed from. Operators carry
    /// their glyph; `PrintStack` stores nothing, as in the original
    /// notation, and `EndOfLine` never had source text at all.
    pub fn literal(&self) -> &str {
        use Token::*;
        match self {
            Unknown(s) => s,
            Integer(s) => s,
            Operator(op) => op.literal(),
            Print => ".",
            PrintStack => "",
            EndOfLine => "",
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.literal())
    }
}

/// Extracts the numeric value of a stack token. Digit runs too large
/// for an i64 are a fault here, at use, never a silent wrap.
impl TryFrom<&Token> for i64 {
    type Error = Error;
    fn try_from(token: &Token) -> Result<Self, Self::Error> {
        match token.literal().parse::<i64>() {
            Ok(value) => Ok(value),
            Err(_) => Err(error!(NotAnInteger; &token.to_string())),
        }
    }
}

/// The dyadic operators. Every kind listed here has exactly one entry
/// in the operation table; the set is closed.
#[derive(Debug, PartialEq, Clone)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl Operator {
    pub fn kind(&self) -> &'static str {
        use Operator::*;
        match self {
            Plus => "PLUS",
            Minus => "MINUS",
            Multiply => "MULTIPLY",
            Divide => "DIVIDE",
        }
    }

    pub fn literal(&self) -> &'static str {
        use Operator::*;
        match self {
            Plus => "+",
            Minus => "-",
            Multiply => "*",
            Divide => "/",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.literal())
    }
}
