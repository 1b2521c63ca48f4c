//! # concat
//!
//! An interactive postfix calculator in the Forth tradition.
//!
//! Numbers go on a stack; `+ - * /` take two off and put one back;
//! `.` pops and prints; `.S` shows the whole stack. One line of input
//! is one unit of evaluation.
//! ```text
//! > 2 3 + .
//! 5
//! > 10 2 - 4 * .S
//! 1 INTEGER 32
//! ```
//!
//! Exit with CTRL-D. CTRL-C abandons the line being evaluated but
//! keeps the stack.

#[path = "doc/manual.rs"]
#[allow(non_snake_case)]
pub mod _Manual;

pub mod lang;
pub mod mach;
pub mod term;
