//! Integration tests for the code generator
//!
//! Tests rendering of target trees to output text.

use tinycall_foundation::ErrorKind;
use tinycall_language::{TargetNode, generate};

#[test]
fn generate_reference_program() {
    let program = TargetNode::program(vec![TargetNode::statement(TargetNode::call(
        "add",
        vec![
            TargetNode::number("2"),
            TargetNode::call(
                "subtract",
                vec![TargetNode::number("4"), TargetNode::number("2")],
            ),
        ],
    ))]);
    assert_eq!(generate(&program).unwrap(), "add(2, subtract(4, 2));");
}

#[test]
fn generate_each_statement_on_its_own_line() {
    let program = TargetNode::program(vec![
        TargetNode::statement(TargetNode::call("a", vec![])),
        TargetNode::statement(TargetNode::call("b", vec![])),
    ]);
    assert_eq!(generate(&program).unwrap(), "a();\nb();");
}

#[test]
fn generate_identifier_argument() {
    let call = TargetNode::call("f", vec![TargetNode::identifier("x"), TargetNode::number("1")]);
    assert_eq!(generate(&call).unwrap(), "f(x, 1)");
}

#[test]
fn generate_string_quotes_without_escaping() {
    let call = TargetNode::call("say", vec![TargetNode::string("it's \\ fine")]);
    assert_eq!(generate(&call).unwrap(), "say(\"it's \\ fine\")");
}

#[test]
fn generate_rejects_nested_program() {
    let program = TargetNode::program(vec![TargetNode::statement(TargetNode::program(vec![]))]);
    assert!(matches!(
        generate(&program).unwrap_err().kind,
        ErrorKind::CodeGenError(_)
    ));
}
