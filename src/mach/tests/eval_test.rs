use super::run;
use crate::mach::{Event, Runtime};

#[test]
fn test_add_then_print() {
    let mut r = Runtime::default();
    assert!(r.enter("2 3 +"));
    assert_eq!(run(&mut r), "");
    assert!(r.enter("."));
    assert_eq!(run(&mut r), "5\n");
}

#[test]
fn test_subtract_operand_order() {
    let mut r = Runtime::default();
    r.enter("10 2 -");
    r.enter(".");
    assert_eq!(run(&mut r), "8\n");
}

#[test]
fn test_divide_operand_order() {
    let mut r = Runtime::default();
    r.enter("10 2 /");
    r.enter(".");
    assert_eq!(run(&mut r), "5\n");
}

#[test]
fn test_division_by_zero_prints_nothing() {
    let mut r = Runtime::default();
    r.enter("5 0 /");
    r.enter(".");
    assert_eq!(run(&mut r), "?DIVISION BY ZERO\n");
}

#[test]
fn test_unknown_is_skipped_then_underflow() {
    let mut r = Runtime::default();
    r.enter("abc 3 +");
    assert_eq!(
        run(&mut r),
        "Unrecognised input abc has been ignored\n?STACK UNDERFLOW\n"
    );
}

#[test]
fn test_dump_is_reverse_push_order() {
    let mut r = Runtime::default();
    r.enter("7\t8 9");
    r.enter(".S");
    assert_eq!(run(&mut r), "3 INTEGER 9\n2 INTEGER 8\n1 INTEGER 7\n");
}

#[test]
fn test_dump_of_empty_stack_is_silent() {
    let mut r = Runtime::default();
    r.enter(".S");
    assert_eq!(run(&mut r), "");
}

#[test]
fn test_dump_slots_stay_dense_after_reuse() {
    let mut r = Runtime::default();
    r.enter("1 2 . 3 .S");
    assert_eq!(run(&mut r), "2\n2 INTEGER 3\n1 INTEGER 1\n");
}

#[test]
fn test_faulted_line_is_abandoned() {
    let mut r = Runtime::default();
    r.enter("5 0 / 7 .");
    assert_eq!(run(&mut r), "?DIVISION BY ZERO\n");
    // The 7 queued after the fault must never run.
    assert_eq!(run(&mut r), "");
    r.enter(".S");
    assert_eq!(run(&mut r), "");
}

#[test]
fn test_interrupt_preserves_stack() {
    let mut r = Runtime::default();
    r.enter("1 2");
    assert_eq!(run(&mut r), "");
    r.enter("99 .");
    r.interrupt();
    assert_eq!(run(&mut r), "");
    r.enter(".S");
    assert_eq!(run(&mut r), "2 INTEGER 2\n1 INTEGER 1\n");
}

#[test]
fn test_cycle_budget_reports_running() {
    let mut r = Runtime::default();
    r.enter("1 2 +");
    match r.execute(1) {
        Event::Running => {}
        event => panic!("expected Running, got {:?}", event),
    }
    match r.execute(5000) {
        Event::Stopped => {}
        event => panic!("expected Stopped, got {:?}", event),
    }
    r.enter(".");
    assert_eq!(run(&mut r), "3\n");
}

#[test]
fn test_enter_only_counts_tokens() {
    let mut r = Runtime::default();
    assert!(!r.enter(""));
    assert!(!r.enter(" \t  "));
    assert!(r.enter("7"));
}

#[test]
fn test_oversized_literal_faults_at_use() {
    let mut r = Runtime::default();
    r.enter("99999999999999999999 1 +");
    assert_eq!(
        run(&mut r),
        "?NOT AN INTEGER; 99999999999999999999\n"
    );
}

#[test]
fn test_arithmetic_overflow_is_fatal() {
    let mut r = Runtime::default();
    r.enter("9223372036854775807 1 +");
    assert_eq!(run(&mut r), "?OVERFLOW\n");
}

#[test]
fn test_result_feeds_next_operator() {
    let mut r = Runtime::default();
    r.enter("2 3 + 4 * .");
    assert_eq!(run(&mut r), "20\n");
}

#[test]
fn test_print_pops() {
    let mut r = Runtime::default();
    r.enter("1 2 . . .");
    assert_eq!(run(&mut r), "2\n1\n?STACK UNDERFLOW\n");
}
