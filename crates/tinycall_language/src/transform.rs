//! Source-to-target AST transformation.
//!
//! The [`Transformer`] is a [`Visitor`] over the source tree. Its build
//! context is a [`Slot`]: a handle to a collection in an arena that the
//! transformer owns. Each node appends its replacement to the slot it was
//! handed, and a call opens a fresh slot for its own arguments and hands
//! that to its children. Once the walk finishes the arena is assembled into
//! an owned [`TargetNode`] tree.
//!
//! Placement rule: a call whose source parent is another call becomes a bare
//! argument; any other call is wrapped in an `ExpressionStatement`.

use tinycall_foundation::{Error, Result};

use crate::ast::Node;
use crate::target::{Identifier, TargetNode};
use crate::visitor::{Traversal, Visitor};

/// Handle to an output collection in the transformer's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot(usize);

/// An appended entry whose children may still be arriving.
#[derive(Debug)]
enum Pending {
    Leaf(TargetNode),
    Call {
        callee: String,
        arguments: Slot,
        statement: bool,
    },
}

/// Output collections, indexed by [`Slot`].
#[derive(Debug, Default)]
struct Arena {
    collections: Vec<Vec<Pending>>,
}

impl Arena {
    /// Allocates an empty collection.
    fn open(&mut self) -> Slot {
        self.collections.push(Vec::new());
        Slot(self.collections.len() - 1)
    }

    fn push(&mut self, slot: Slot, entry: Pending) {
        self.collections[slot.0].push(entry);
    }

    /// Builds the owned nodes of a collection, consuming its entries.
    fn assemble(&mut self, slot: Slot) -> Vec<TargetNode> {
        let entries = std::mem::take(&mut self.collections[slot.0]);
        entries
            .into_iter()
            .map(|entry| match entry {
                Pending::Leaf(node) => node,
                Pending::Call {
                    callee,
                    arguments,
                    statement,
                } => {
                    let call = TargetNode::CallExpression {
                        callee: Identifier::new(callee),
                        arguments: self.assemble(arguments),
                    };
                    if statement {
                        TargetNode::statement(call)
                    } else {
                        call
                    }
                }
            })
            .collect()
    }
}

/// Builds a target AST from a source AST.
#[derive(Debug, Default)]
pub struct Transformer {
    arena: Arena,
    traversal: Traversal,
}

impl Transformer {
    /// Creates a new transformer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bounds the depth of source trees this transformer will walk.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.traversal = self.traversal.with_max_depth(max_depth);
        self
    }

    /// Transforms a source `Program` into a target `Program`.
    ///
    /// # Errors
    /// Returns a traversal error if `root` is not a `Program` or contains a
    /// nested `Program`.
    pub fn transform(mut self, root: &Node) -> Result<TargetNode> {
        if !matches!(root, Node::Program { .. }) {
            return Err(Error::traversal(format!(
                "transform root must be a Program, found {}",
                root.kind()
            )));
        }

        let body = self.arena.open();
        let traversal = self.traversal;
        traversal.run(root, &mut self, body)?;

        Ok(TargetNode::Program {
            body: self.arena.assemble(body),
        })
    }
}

impl Visitor<Node> for Transformer {
    type Context = Slot;

    fn enter(&mut self, node: &Node, parent: Option<&Node>, slot: &Slot) -> Result<Option<Slot>> {
        match node {
            Node::Program { .. } => {
                if parent.is_some() {
                    return Err(Error::traversal("Program node below the root"));
                }
                Ok(None)
            }
            Node::NumberLiteral { value } => {
                self.arena
                    .push(*slot, Pending::Leaf(TargetNode::number(value.clone())));
                Ok(None)
            }
            Node::StringLiteral { value } => {
                self.arena
                    .push(*slot, Pending::Leaf(TargetNode::string(value.clone())));
                Ok(None)
            }
            Node::CallExpression { name, .. } => {
                let arguments = self.arena.open();
                let nested = matches!(parent, Some(Node::CallExpression { .. }));
                self.arena.push(
                    *slot,
                    Pending::Call {
                        callee: name.clone(),
                        arguments,
                        statement: !nested,
                    },
                );
                Ok(Some(arguments))
            }
        }
    }
}

/// Transforms a source `Program` into a target `Program`.
///
/// # Errors
/// Returns a traversal error if `root` is not a well-formed `Program`.
pub fn transform(root: &Node) -> Result<TargetNode> {
    Transformer::new().transform(root)
}
