use super::{Operation, Stack};
use crate::error;
use crate::lang::{lex, Error, Token};
use std::collections::VecDeque;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// What `Runtime::execute` has to report. `Print` chunks are written
/// verbatim by the front end; a `Warning` is one undecorated line; an
/// `Error` is fatal and ends the run.
#[derive(Debug)]
pub enum Event {
    Stopped,
    Running,
    Print(String),
    Warning(String),
    Error(Error),
}

/// ## Evaluator
///
/// One token at a time, no backtracking: integers are pushed, print
/// words pop or dump, dyadic operators pull two operands back off the
/// stack. Lines queue their tokens in arrival order, so the queue is
/// the handoff between lexing and evaluation.
pub struct Runtime {
    stack: Stack,
    tokens: VecDeque<Token>,
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime {
            stack: Stack::new(),
            tokens: VecDeque::new(),
        }
    }

    /// Lexes a line onto the token queue. Returns true if the line
    /// contributed any tokens, which is what makes it history-worthy.
    pub fn enter(&mut self, line: &str) -> bool {
        let tokens = lex(line);
        let entered = !tokens.is_empty();
        self.tokens.extend(tokens);
        entered
    }

    /// Abandons whatever is left of the current line. The stack is
    /// untouched; an interrupt is not a fault.
    pub fn interrupt(&mut self) {
        self.tokens.clear();
    }

    /// Evaluates up to `cycles` tokens, returning on the first event
    /// worth reporting. `Stopped` means the queue ran dry; `Running`
    /// means the budget did, and the caller should come back after
    /// checking for interrupts.
    pub fn execute(&mut self, cycles: usize) -> Event {
        for _ in 0..cycles {
            let token = match self.tokens.pop_front() {
                Some(token) => token,
                None => return Event::Stopped,
            };
            match self.step(token) {
                Ok(Some(event)) => return event,
                Ok(None) => {}
                Err(error) => {
                    // A faulted line is dead. Nothing after the fault
                    // may run, even if more input was already queued.
                    self.tokens.clear();
                    return Event::Error(error);
                }
            }
        }
        Event::Running
    }

    fn step(&mut self, token: Token) -> Result<Option<Event>> {
        match token {
            Token::Integer(_) => {
                self.stack.push(token)?;
                Ok(None)
            }
            Token::Print => {
                let token = self.stack.pop()?;
                Ok(Some(Event::Print(format!("{}\n", token))))
            }
            Token::PrintStack => Ok(self.dump()),
            Token::Unknown(s) => Ok(Some(Event::Warning(format!(
                "Unrecognised input {} has been ignored",
                s
            )))),
            Token::Operator(operator) => {
                let (one, two) = self.stack.pop_2()?;
                let lhs = i64::try_from(&one)?;
                let rhs = i64::try_from(&two)?;
                let result = Operation::lookup(&operator)(lhs, rhs)?;
                self.stack.push(Token::Integer(result.to_string()))?;
                Ok(None)
            }
            // The lexer's iterator never lets this through.
            Token::EndOfLine => Err(error!(InternalError; "END OF LINE IN TOKEN STREAM")),
        }
    }

    // Top of the stack first, one line per occupied slot. An empty
    // stack dumps nothing at all.
    fn dump(&self) -> Option<Event> {
        if self.stack.is_empty() {
            return None;
        }
        let mut s = String::new();
        for (slot, token) in self.stack.iter() {
            s.push_str(&format!("{} {} {}\n", slot, token.kind(), token.literal()));
        }
        Some(Event::Print(s))
    }
}

impl Default for Runtime {
    fn default() -> Runtime {
        Runtime::new()
    }
}
