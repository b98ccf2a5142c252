// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! End-to-end statement and expression semantics.

mod common;

use common::{run_program, run_with_input};
use pretty_assertions::assert_eq;
use steep_interp::{ErrorKind, RuntimeError};

fn expect_err(result: Result<(), RuntimeError>, kind: ErrorKind) {
    match result {
        Ok(()) => panic!("expected a {:?} error, program ran to completion", kind),
        Err(e) => assert_eq!(e.kind(), kind, "wrong error kind: {}", e),
    }
}

#[test]
fn set_field_then_print() {
    let (result, output) = run_program(
        r#"(class main
             (field x 0)
             (method main () (begin (set x 5) (print x))))"#,
    );
    assert!(result.is_ok());
    assert_eq!(output, ["5"]);
}

#[test]
fn print_concatenates_fragments() {
    let (result, output) = run_program(
        r#"(class main
             (field x 5)
             (method main () (print "x = " x " and null is " null)))"#,
    );
    assert!(result.is_ok());
    assert_eq!(output, ["x = 5 and null is null"]);
}

#[test]
fn booleans_print_as_keywords() {
    let (result, output) = run_program(
        r#"(class main
             (method main () (print (== 1 1) " " (! true))))"#,
    );
    assert!(result.is_ok());
    assert_eq!(output, ["true false"]);
}

#[test]
fn division_and_modulo_floor() {
    let (result, output) = run_program(
        r#"(class main
             (method main () (print (/ 7 2) " " (/ -7 2) " " (% -7 2))))"#,
    );
    assert!(result.is_ok());
    assert_eq!(output, ["3 -4 1"]);
}

#[test]
fn division_by_zero_is_fatal() {
    let (result, output) = run_program(
        r#"(class main
             (method main () (print (/ 1 0))))"#,
    );
    assert!(matches!(result, Err(RuntimeError::DivisionByZero)));
    assert!(output.is_empty());
}

#[test]
fn string_plus_concatenates() {
    let (result, output) = run_program(
        r#"(class main
             (method main () (print (+ "foo" "bar"))))"#,
    );
    assert!(result.is_ok());
    assert_eq!(output, ["foobar"]);
}

#[test]
fn mixed_operand_arithmetic_is_a_type_error() {
    let (result, _) = run_program(
        r#"(class main (method main () (print (+ 1 "a"))))"#,
    );
    expect_err(result, ErrorKind::Type);

    let (result, _) = run_program(
        r#"(class main (method main () (print (- "a" "b"))))"#,
    );
    expect_err(result, ErrorKind::Type);

    let (result, _) = run_program(
        r#"(class main (method main () (print (* true 2))))"#,
    );
    expect_err(result, ErrorKind::Type);
}

#[test]
fn equality_requires_matching_kinds() {
    let (result, output) = run_program(
        r#"(class main
             (method main () (print (== 5 5) " " (!= 5 6) " " (== "a" "b"))))"#,
    );
    assert!(result.is_ok());
    assert_eq!(output, ["true true false"]);

    let (result, _) = run_program(
        r#"(class main (method main () (print (== 5 "5"))))"#,
    );
    expect_err(result, ErrorKind::Type);
}

#[test]
fn object_equality_is_reference_identity() {
    let (result, output) = run_program(
        r#"(class box (field v 0))
           (class main
             (field a null)
             (field b null)
             (method main ()
               (begin
                 (set a (new box))
                 (set b (new box))
                 (print (== a a) " " (== a b) " " (== a null) " " (== null null)))))"#,
    );
    assert!(result.is_ok());
    assert_eq!(output, ["true false false true"]);
}

#[test]
fn relational_rejects_booleans() {
    let (result, _) = run_program(
        r#"(class main (method main () (print (< true false))))"#,
    );
    expect_err(result, ErrorKind::Type);
}

#[test]
fn logic_operators_require_booleans() {
    let (result, _) = run_program(
        r#"(class main (method main () (print (& true 1))))"#,
    );
    expect_err(result, ErrorKind::Type);

    let (result, _) = run_program(
        r#"(class main (method main () (print (| 1 false))))"#,
    );
    expect_err(result, ErrorKind::Type);

    let (result, _) = run_program(
        r#"(class main (method main () (print (! 5))))"#,
    );
    expect_err(result, ErrorKind::Type);
}

#[test]
fn while_shares_the_method_frame() {
    let (result, output) = run_program(
        r#"(class main
             (field n 0)
             (method main ()
               (begin
                 (while (< n 3) (begin (print n) (set n (+ n 1))))
                 (print "done " n))))"#,
    );
    assert!(result.is_ok());
    assert_eq!(output, ["0", "1", "2", "done 3"]);
}

#[test]
fn loop_bodies_do_not_shadow_the_frame() {
    let (result, output) = run_program(
        r#"(class main
             (method drain (k)
               (begin
                 (while (> k 0) (set k (- k 1)))
                 (return k)))
             (method main () (print (call me drain 3))))"#,
    );
    assert!(result.is_ok());
    assert_eq!(output, ["0"]);
}

#[test]
fn while_condition_must_be_boolean() {
    let (result, _) = run_program(
        r#"(class main (method main () (while 1 (print "x"))))"#,
    );
    expect_err(result, ErrorKind::Type);
}

#[test]
fn if_executes_the_matching_branch() {
    let (result, output) = run_program(
        r#"(class main
             (method main ()
               (begin
                 (if (> 2 1) (print "yes") (print "no"))
                 (if (> 1 2) (print "yes") (print "no"))
                 (if (> 1 2) (print "skipped")))))"#,
    );
    assert!(result.is_ok());
    assert_eq!(output, ["yes", "no"]);
}

#[test]
fn if_condition_must_be_boolean() {
    let (result, _) = run_program(
        r#"(class main (method main () (if 1 (print "x"))))"#,
    );
    expect_err(result, ErrorKind::Type);
}

#[test]
fn if_without_a_true_branch_is_a_syntax_error() {
    let (result, _) = run_program(r#"(class main (method main () (if true)))"#);
    expect_err(result, ErrorKind::Syntax);
}

#[test]
fn method_call_yields_its_return_value() {
    let (result, output) = run_program(
        r#"(class main
             (field r 0)
             (method add (a b) (return (+ a b)))
             (method main ()
               (begin
                 (set r (call me add 1 2))
                 (print r))))"#,
    );
    assert!(result.is_ok());
    assert_eq!(output, ["3"]);
}

#[test]
fn bare_return_terminates_only_the_method() {
    let (result, output) = run_program(
        r#"(class main
             (method speak () (begin (print "a") (return) (print "b")))
             (method main () (begin (call me speak) (print "after"))))"#,
    );
    assert!(result.is_ok());
    assert_eq!(output, ["a", "after"]);
}

#[test]
fn return_propagates_out_of_a_while_body() {
    let (result, output) = run_program(
        r#"(class main
             (method first () (while (< 0 1) (return 9)))
             (method main () (print (call me first))))"#,
    );
    assert!(result.is_ok());
    assert_eq!(output, ["9"]);
}

#[test]
fn void_result_cannot_feed_an_expression() {
    let (result, _) = run_program(
        r#"(class main
             (field x 0)
             (method noop () (return))
             (method main () (set x (call me noop))))"#,
    );
    expect_err(result, ErrorKind::Type);

    let (result, _) = run_program(
        r#"(class main
             (method noop () (print "side effect"))
             (method main () (print (+ 1 (call me noop)))))"#,
    );
    expect_err(result, ErrorKind::Type);
}

#[test]
fn arity_mismatch_is_a_type_error() {
    let (result, _) = run_program(
        r#"(class main
             (method pair (a b) (return a))
             (method main () (call me pair 1)))"#,
    );
    expect_err(result, ErrorKind::Type);
}

#[test]
fn unknown_method_is_a_name_error() {
    let (result, _) = run_program(
        r#"(class main (method main () (call me nope)))"#,
    );
    expect_err(result, ErrorKind::Name);
}

#[test]
fn calling_through_null_is_a_fault_error() {
    let (result, _) = run_program(
        r#"(class main
             (field f null)
             (method main () (call f poke)))"#,
    );
    expect_err(result, ErrorKind::Fault);
}

#[test]
fn calling_through_a_non_object_is_a_type_error() {
    let (result, _) = run_program(
        r#"(class main
             (field n 5)
             (method main () (call n poke)))"#,
    );
    expect_err(result, ErrorKind::Type);
}

#[test]
fn objects_are_assigned_by_reference() {
    let (result, output) = run_program(
        r#"(class box
             (field v 0)
             (method put (x) (set v x))
             (method take () (return v)))
           (class main
             (field a null)
             (field b null)
             (method main ()
               (begin
                 (set a (new box))
                 (set b a)
                 (call a put 7)
                 (print (call b take)))))"#,
    );
    assert!(result.is_ok());
    assert_eq!(output, ["7"]);
}

#[test]
fn each_instance_copies_the_field_defaults() {
    let (result, output) = run_program(
        r#"(class box
             (field v 0)
             (method put (x) (set v x))
             (method take () (return v)))
           (class main
             (field a null)
             (field b null)
             (method main ()
               (begin
                 (set a (new box))
                 (set b (new box))
                 (call a put 9)
                 (print (call a take) " " (call b take)))))"#,
    );
    assert!(result.is_ok());
    assert_eq!(output, ["9 0"]);
}

#[test]
fn objects_may_reference_each_other_cyclically() {
    let (result, output) = run_program(
        r#"(class node
             (field next null)
             (field tag 0)
             (method link (n) (set next n))
             (method mark (t) (set tag t))
             (method peek () (return next))
             (method label () (return tag)))
           (class main
             (field a null)
             (field b null)
             (method main ()
               (begin
                 (set a (new node))
                 (set b (new node))
                 (call a link b)
                 (call b link a)
                 (call a mark 1)
                 (call b mark 2)
                 (print (call (call a peek) label) (call (call b peek) label)))))"#,
    );
    assert!(result.is_ok());
    assert_eq!(output, ["21"]);
}

#[test]
fn new_of_an_unknown_class_stops_the_program() {
    let (result, output) = run_program(
        r#"(class main
             (field z null)
             (method main ()
               (begin
                 (print "one")
                 (set z (new missing))
                 (print "two"))))"#,
    );
    expect_err(result, ErrorKind::Type);
    assert_eq!(output, ["one"]);
}

#[test]
fn input_statements_read_lines() {
    let (result, output) = run_with_input(
        r#"(class main
             (field s "")
             (field n 0)
             (method main ()
               (begin (inputs s) (inputi n) (print s " " (+ n 1)))))"#,
        &["hi", "41"],
    );
    assert!(result.is_ok());
    assert_eq!(output, ["hi 42"]);
}

#[test]
fn inputi_rejects_a_non_integer_line() {
    let (result, _) = run_with_input(
        r#"(class main
             (field n 0)
             (method main () (inputi n)))"#,
        &["abc"],
    );
    expect_err(result, ErrorKind::Type);
}

#[test]
fn exhausted_input_aborts_the_run() {
    let (result, _) = run_program(
        r#"(class main
             (field n 0)
             (method main () (inputi n)))"#,
    );
    assert!(matches!(result, Err(RuntimeError::EndOfInput)));
}

#[test]
fn unbound_names_are_name_errors() {
    let (result, _) = run_program(r#"(class main (method main () (set y 1)))"#);
    expect_err(result, ErrorKind::Name);

    let (result, _) = run_program(r#"(class main (method main () (print y)))"#);
    expect_err(result, ErrorKind::Name);

    let (result, _) = run_with_input(
        r#"(class main (method main () (inputi y)))"#,
        &["5"],
    );
    expect_err(result, ErrorKind::Name);
}

#[test]
fn parameters_shadow_fields_in_the_frame() {
    let (result, output) = run_program(
        r#"(class main
             (field x 1)
             (method twice (x) (begin (set x (+ x x)) (return x)))
             (method main () (print (call me twice 5) " " x)))"#,
    );
    assert!(result.is_ok());
    assert_eq!(output, ["10 1"]);
}

#[test]
fn methods_recurse_through_me() {
    let (result, output) = run_program(
        r#"(class main
             (method fact (k)
               (if (< k 2)
                 (return 1)
                 (return (* k (call me fact (- k 1))))))
             (method main () (print (call me fact 5))))"#,
    );
    assert!(result.is_ok());
    assert_eq!(output, ["120"]);
}

#[test]
fn a_freshly_constructed_object_can_be_a_call_target() {
    let (result, output) = run_program(
        r#"(class box
             (field v 0)
             (method take () (return v)))
           (class main
             (method main () (print (call (new box) take))))"#,
    );
    assert!(result.is_ok());
    assert_eq!(output, ["0"]);
}

#[test]
fn me_is_not_an_ordinary_variable() {
    let (result, _) = run_program(r#"(class main (method main () (print me)))"#);
    expect_err(result, ErrorKind::Name);
}
