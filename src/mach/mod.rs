/*!
## Rust Machine Module

This Rust module is the stack machine that evaluates concat tokens.

*/

mod operation;
mod runtime;
mod stack;

#[cfg(test)]
mod tests;

pub use operation::Operation;
pub use runtime::Event;
pub use runtime::Runtime;
pub use stack::Stack;
pub use stack::STACK_SIZE;
