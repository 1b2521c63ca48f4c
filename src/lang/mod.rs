/*!
# Rust Language Module

This Rust module provides lexical analysis of the concat notation:
unsigned integers, the dyadic operators `+ - * /`, and the print words
`.` and `.S`.

*/

#[macro_use]
mod error;
mod lex;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use lex::Lexer;
pub use token::Operator;
pub use token::Token;
