pub struct Error {
    code: ErrorCode,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            message: String::new(),
        }
    }

    pub fn message(mut self, message: &str) -> Error {
        debug_assert!(self.message.is_empty());
        self.message = message.to_string();
        self
    }
}

/// Faults that abort an evaluation. Unrecognised input is not listed
/// here because it is reported and skipped, never raised.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ErrorCode {
    StackOverflow,
    StackUnderflow,
    NotAnInteger,
    DivisionByZero,
    Overflow,
    InternalError,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self.code {
            StackOverflow => "STACK OVERFLOW",
            StackUnderflow => "STACK UNDERFLOW",
            NotAnInteger => "NOT AN INTEGER",
            DivisionByZero => "DIVISION BY ZERO",
            Overflow => "OVERFLOW",
            InternalError => "INTERNAL ERROR",
        };
        if self.message.is_empty() {
            write!(f, "{}", code_str)
        } else {
            write!(f, "{}; {}", code_str, self.message)
        }
    }
}
