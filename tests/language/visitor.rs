//! Integration tests for the traversal engine
//!
//! Tests visit order, parent links, and build-context threading from outside
//! the crate.

use std::cell::RefCell;

use tinycall_foundation::{Error, ErrorKind, Result};
use tinycall_language::{
    DepthCalculator, Node, NodeKind, TargetNode, Traversal, Visitor, VisitorTable, parse,
    tokenize, transform, traverse,
};

fn source_tree(source: &str) -> Node {
    parse(&tokenize(source).unwrap()).unwrap()
}

#[test]
fn table_visits_in_depth_first_order() {
    let program = source_tree("(add 2 (subtract 4 2))");
    let log = RefCell::new(Vec::new());

    let mut table = VisitorTable::new()
        .on_enter(NodeKind::CallExpression, |node: &Node, _, _: &()| {
            let (name, _) = node.as_call().unwrap();
            log.borrow_mut().push(format!("enter {name}"));
            Ok(None)
        })
        .on_exit(NodeKind::CallExpression, |node: &Node, _, _: &()| {
            let (name, _) = node.as_call().unwrap();
            log.borrow_mut().push(format!("exit {name}"));
            Ok(())
        })
        .on_enter(NodeKind::NumberLiteral, |node: &Node, _, _: &()| {
            log.borrow_mut()
                .push(format!("number {}", node.literal_value().unwrap()));
            Ok(None)
        });
    traverse(&program, &mut table, ()).unwrap();
    drop(table);

    assert_eq!(
        log.into_inner(),
        vec![
            "enter add",
            "number 2",
            "enter subtract",
            "number 4",
            "number 2",
            "exit subtract",
            "exit add",
        ]
    );
}

/// Records, for each number, the name of the nearest enclosing call.
struct EnclosingCall {
    seen: Vec<(String, String)>,
}

impl Visitor<Node> for EnclosingCall {
    type Context = String;

    fn enter(
        &mut self,
        node: &Node,
        _parent: Option<&Node>,
        context: &String,
    ) -> Result<Option<String>> {
        match node {
            Node::CallExpression { name, .. } => Ok(Some(name.clone())),
            Node::NumberLiteral { value } => {
                self.seen.push((value.clone(), context.clone()));
                Ok(None)
            }
            Node::StringLiteral { .. } | Node::Program { .. } => Ok(None),
        }
    }
}

#[test]
fn context_flows_from_parent_to_children() {
    let program = source_tree("1 (f 2 (g 3) 4)");
    let mut visitor = EnclosingCall { seen: Vec::new() };
    traverse(&program, &mut visitor, "<top>".to_string()).unwrap();

    let seen: Vec<_> = visitor
        .seen
        .iter()
        .map(|(v, c)| format!("{v}@{c}"))
        .collect();
    assert_eq!(seen, vec!["1@<top>", "2@f", "3@g", "4@f"]);
}

#[test]
fn callback_error_aborts_walk() {
    let program = source_tree("(a) (b) (c)");
    let mut entered = 0;
    let mut table = VisitorTable::new().on_enter(NodeKind::CallExpression, |node: &Node, _, _: &()| {
        entered += 1;
        match node.as_call() {
            Some(("b", _)) => Err(Error::traversal("stop at b")),
            _ => Ok(None),
        }
    });
    let err = traverse(&program, &mut table, ()).unwrap_err();
    drop(table);

    assert_eq!(err.kind, ErrorKind::TraversalError("stop at b".to_string()));
    assert_eq!(entered, 2);
}

#[test]
fn target_trees_are_traversable() {
    let target = transform(&source_tree("(a (b (c)))")).unwrap();

    let mut depth = DepthCalculator::default();
    traverse(&target, &mut depth, ()).unwrap();
    // Program > ExpressionStatement > a > b > c
    assert_eq!(depth.max_depth, 5);

    let mut statements = 0;
    let mut table = VisitorTable::new().on_enter(
        NodeKind::ExpressionStatement,
        |_: &TargetNode, parent: Option<&TargetNode>, _: &()| {
            assert_eq!(parent.map(TargetNode::kind), Some(NodeKind::Program));
            statements += 1;
            Ok(None)
        },
    );
    traverse(&target, &mut table, ()).unwrap();
    drop(table);
    assert_eq!(statements, 1);
}

#[test]
fn bounded_traversal() {
    let program = source_tree("(a (b))");
    let mut depth = DepthCalculator::default();
    assert!(Traversal::new()
        .with_max_depth(Some(2))
        .run(&program, &mut depth, ())
        .is_err());
    assert!(Traversal::new()
        .with_max_depth(Some(3))
        .run(&program, &mut DepthCalculator::default(), ())
        .is_ok());
}
