use concat::mach::{Runtime, STACK_SIZE};

mod common;
use common::exec;

#[test]
fn test_dump_reverses_entered_integers() {
    let mut runtime = Runtime::default();
    runtime.enter("1 2 3 4 5");
    runtime.enter(".S");
    assert_eq!(
        exec(&mut runtime),
        "5 INTEGER 5\n4 INTEGER 4\n3 INTEGER 3\n2 INTEGER 2\n1 INTEGER 1\n"
    );
    // Dumping never consumed anything.
    runtime.enter(". . . . .");
    assert_eq!(exec(&mut runtime), "5\n4\n3\n2\n1\n");
}

#[test]
fn test_overflow_on_the_push_past_capacity() {
    let mut runtime = Runtime::default();
    let full = "1 ".repeat(STACK_SIZE);
    runtime.enter(&full);
    assert_eq!(exec(&mut runtime), "");
    runtime.enter("2");
    assert_eq!(exec(&mut runtime), "?STACK OVERFLOW\n");
}

#[test]
fn test_computed_results_count_against_capacity() {
    let mut runtime = Runtime::default();
    let full = "1 ".repeat(STACK_SIZE);
    runtime.enter(&full);
    assert_eq!(exec(&mut runtime), "");
    // An operator frees two slots and refills one.
    runtime.enter("+ 2");
    assert_eq!(exec(&mut runtime), "");
    runtime.enter("3");
    assert_eq!(exec(&mut runtime), "?STACK OVERFLOW\n");
}
