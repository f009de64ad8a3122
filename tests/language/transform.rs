//! Integration tests for the transformer
//!
//! Tests source-to-target tree construction.

use tinycall_foundation::ErrorKind;
use tinycall_language::{
    Node, NodeCounter, NodeKind, TargetNode, Transformer, parse, tokenize, transform,
};

fn source_tree(source: &str) -> Node {
    parse(&tokenize(source).unwrap()).unwrap()
}

#[test]
fn transform_reference_program() {
    let target = transform(&source_tree("(add 2 (subtract 4 2))")).unwrap();
    assert_eq!(
        target,
        TargetNode::program(vec![TargetNode::statement(TargetNode::call(
            "add",
            vec![
                TargetNode::number("2"),
                TargetNode::call(
                    "subtract",
                    vec![TargetNode::number("4"), TargetNode::number("2")]
                ),
            ]
        ))])
    );
}

#[test]
fn transform_string_argument() {
    let target = transform(&source_tree("(write \"hi\")")).unwrap();
    assert_eq!(
        target,
        TargetNode::program(vec![TargetNode::statement(TargetNode::call(
            "write",
            vec![TargetNode::string("hi")]
        ))])
    );
}

#[test]
fn transform_wraps_only_top_level_calls() {
    let target = transform(&source_tree("42 (f)")).unwrap();
    let body = target.as_program().unwrap();
    assert!(!body[0].is_statement());
    assert_eq!(body[0], TargetNode::number("42"));
    assert!(body[1].is_statement());
}

#[test]
fn transform_nested_zero_argument_calls() {
    let target = transform(&source_tree("(a (b) (c))")).unwrap();
    let statement = target.as_program().unwrap()[0].as_statement().unwrap();
    let (callee, args) = statement.as_call().unwrap();
    assert_eq!(callee, "a");
    assert_eq!(
        args,
        &[TargetNode::call("b", vec![]), TargetNode::call("c", vec![])]
    );
}

#[test]
fn transform_preserves_call_count() {
    let source = source_tree("(a (b 1 (c)) 2) (d) 3");
    let target = transform(&source).unwrap();
    assert_eq!(
        NodeCounter::count(&source).get(NodeKind::CallExpression),
        NodeCounter::count(&target).get(NodeKind::CallExpression)
    );
    assert_eq!(NodeCounter::count(&target).get(NodeKind::ExpressionStatement), 2);
}

#[test]
fn transform_is_repeatable() {
    let source = source_tree("(f 1) (g \"x\")");
    assert_eq!(transform(&source).unwrap(), transform(&source).unwrap());
}

#[test]
fn transform_rejects_malformed_trees() {
    let err = transform(&Node::number("1")).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TraversalError(_)));

    let nested = Node::program(vec![Node::program(vec![])]);
    let err = transform(&nested).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TraversalError(_)));
}

#[test]
fn transformer_depth_limit() {
    let source = source_tree("(a (b (c)))");
    assert!(Transformer::new().with_max_depth(Some(4)).transform(&source).is_ok());
    assert!(matches!(
        Transformer::new()
            .with_max_depth(Some(3))
            .transform(&source)
            .unwrap_err()
            .kind,
        ErrorKind::LimitExceeded(_)
    ));
}
