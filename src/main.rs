//! # concat
//!
//! An interactive postfix calculator in the Forth tradition.
//!

fn main() {
    concat::term::main()
}
