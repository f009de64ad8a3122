//! Generic tree traversal with build-context threading.
//!
//! The engine walks any [`Traversable`] tree depth-first, calling
//! [`Visitor::enter`] before a node's children and [`Visitor::exit`] after
//! them. Each callback receives the node, its parent (`None` for the root),
//! and the *build context* the parent established for it.
//!
//! `enter` may return a new context; when it does, that context is what the
//! node's children receive. Otherwise the children inherit the node's own
//! context. This is how a visitor building a second tree tells the engine
//! "my children's replacements go here" without writing anything onto the
//! nodes being walked.
//!
//! Two ways to supply callbacks:
//! - implement [`Visitor`] and `match` on the node (exhaustiveness-checked)
//! - build a [`VisitorTable`] of optional per-[`NodeKind`] closures
//!
//! # Example
//!
//! ```
//! use tinycall_language::{NodeKind, Node, VisitorTable, traverse};
//!
//! let program = Node::program(vec![Node::call("add", vec![Node::number("1")])]);
//! let mut names = Vec::new();
//! let mut table = VisitorTable::new().on_enter(NodeKind::CallExpression, |node: &Node, _, _: &()| {
//!     if let Some((name, _)) = node.as_call() {
//!         names.push(name.to_string());
//!     }
//!     Ok(None)
//! });
//! traverse(&program, &mut table, ()).unwrap();
//! drop(table);
//! assert_eq!(names, vec!["add"]);
//! ```

use tinycall_foundation::{Error, Result, SemanticLimit};

use crate::ast::{Node, NodeKind};
use crate::target::TargetNode;

// =============================================================================
// Traversable Trees
// =============================================================================

/// A tree the traversal engine can walk.
pub trait Traversable: Sized {
    /// The kind tag of this node.
    fn kind(&self) -> NodeKind;

    /// The children to recurse into, in order. Empty for leaves.
    fn children(&self) -> &[Self];
}

impl Traversable for Node {
    fn kind(&self) -> NodeKind {
        Node::kind(self)
    }

    fn children(&self) -> &[Self] {
        match self {
            Self::Program { body } => body,
            Self::CallExpression { params, .. } => params,
            Self::NumberLiteral { .. } | Self::StringLiteral { .. } => &[],
        }
    }
}

impl Traversable for TargetNode {
    fn kind(&self) -> NodeKind {
        TargetNode::kind(self)
    }

    fn children(&self) -> &[Self] {
        match self {
            Self::Program { body } => body,
            Self::CallExpression { arguments, .. } => arguments,
            Self::ExpressionStatement { expression } => std::slice::from_ref(&**expression),
            Self::NumberLiteral { .. } | Self::StringLiteral { .. } | Self::Identifier(_) => &[],
        }
    }
}

// =============================================================================
// Visitor
// =============================================================================

/// Callbacks driven by [`traverse`].
///
/// Both methods default to doing nothing.
#[allow(unused_variables)]
pub trait Visitor<N: Traversable> {
    /// The build context threaded from parents to children.
    type Context;

    /// Called before the node's children are visited.
    ///
    /// Returning `Some(context)` establishes the context for this node's
    /// children; `None` lets them inherit `context`.
    ///
    /// # Errors
    /// An error aborts the traversal and is returned from [`traverse`].
    fn enter(
        &mut self,
        node: &N,
        parent: Option<&N>,
        context: &Self::Context,
    ) -> Result<Option<Self::Context>> {
        Ok(None)
    }

    /// Called after all of the node's children have been visited.
    ///
    /// # Errors
    /// An error aborts the traversal and is returned from [`traverse`].
    fn exit(&mut self, node: &N, parent: Option<&N>, context: &Self::Context) -> Result<()> {
        Ok(())
    }
}

/// Drives a visitor over a tree.
///
/// Carries the optional nesting limit; [`traverse`] is the unbounded
/// shorthand.
#[derive(Clone, Copy, Debug, Default)]
pub struct Traversal {
    max_depth: Option<usize>,
}

impl Traversal {
    /// Creates an unbounded traversal.
    #[must_use]
    pub const fn new() -> Self {
        Self { max_depth: None }
    }

    /// Bounds the node depth (the root is depth 1).
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Walks `root`, handing it `context` as its build context.
    ///
    /// # Errors
    /// Returns the first error raised by a callback, or a limit error if the
    /// tree is deeper than the configured maximum.
    pub fn run<N, V>(&self, root: &N, visitor: &mut V, context: V::Context) -> Result<()>
    where
        N: Traversable,
        V: Visitor<N> + ?Sized,
    {
        self.walk(visitor, root, None, &context, 1)
    }

    fn walk<N, V>(
        &self,
        visitor: &mut V,
        node: &N,
        parent: Option<&N>,
        context: &V::Context,
        depth: usize,
    ) -> Result<()>
    where
        N: Traversable,
        V: Visitor<N> + ?Sized,
    {
        if let Some(limit) = self.max_depth {
            if depth > limit {
                return Err(Error::limit_exceeded(SemanticLimit::MaxDepth { limit }));
            }
        }

        let established = visitor.enter(node, parent, context)?;
        let child_context = established.as_ref().unwrap_or(context);

        for child in node.children() {
            self.walk(visitor, child, Some(node), child_context, depth + 1)?;
        }

        visitor.exit(node, parent, context)
    }
}

/// Walks `root` depth-first with `visitor`, starting from `context`.
///
/// # Errors
/// Returns the first error raised by a callback.
pub fn traverse<N, V>(root: &N, visitor: &mut V, context: V::Context) -> Result<()>
where
    N: Traversable,
    V: Visitor<N> + ?Sized,
{
    Traversal::new().run(root, visitor, context)
}

// =============================================================================
// Kind-Indexed Visitor Table
// =============================================================================

/// Enter callback stored in a [`VisitorTable`].
pub type EnterFn<'a, N, C> = Box<dyn FnMut(&N, Option<&N>, &C) -> Result<Option<C>> + 'a>;

/// Exit callback stored in a [`VisitorTable`].
pub type ExitFn<'a, N, C> = Box<dyn FnMut(&N, Option<&N>, &C) -> Result<()> + 'a>;

struct Hooks<'a, N, C> {
    enter: Option<EnterFn<'a, N, C>>,
    exit: Option<ExitFn<'a, N, C>>,
}

impl<N, C> Default for Hooks<'_, N, C> {
    fn default() -> Self {
        Self {
            enter: None,
            exit: None,
        }
    }
}

/// A visitor assembled from optional per-kind closures.
///
/// Kinds without a registered callback are still walked; they just have no
/// enter/exit action.
pub struct VisitorTable<'a, N, C> {
    hooks: [Hooks<'a, N, C>; NodeKind::COUNT],
}

impl<N, C> Default for VisitorTable<'_, N, C> {
    fn default() -> Self {
        Self {
            hooks: std::array::from_fn(|_| Hooks::default()),
        }
    }
}

impl<'a, N, C> VisitorTable<'a, N, C> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the enter callback for `kind`, replacing any previous one.
    #[must_use]
    pub fn on_enter<F>(mut self, kind: NodeKind, f: F) -> Self
    where
        F: FnMut(&N, Option<&N>, &C) -> Result<Option<C>> + 'a,
    {
        self.hooks[kind.index()].enter = Some(Box::new(f));
        self
    }

    /// Registers the exit callback for `kind`, replacing any previous one.
    #[must_use]
    pub fn on_exit<F>(mut self, kind: NodeKind, f: F) -> Self
    where
        F: FnMut(&N, Option<&N>, &C) -> Result<()> + 'a,
    {
        self.hooks[kind.index()].exit = Some(Box::new(f));
        self
    }

    /// Returns true if any callback is registered for `kind`.
    #[must_use]
    pub fn handles(&self, kind: NodeKind) -> bool {
        let hooks = &self.hooks[kind.index()];
        hooks.enter.is_some() || hooks.exit.is_some()
    }
}

impl<N: Traversable, C> Visitor<N> for VisitorTable<'_, N, C> {
    type Context = C;

    fn enter(&mut self, node: &N, parent: Option<&N>, context: &C) -> Result<Option<C>> {
        match self.hooks[node.kind().index()].enter.as_mut() {
            Some(f) => f(node, parent, context),
            None => Ok(None),
        }
    }

    fn exit(&mut self, node: &N, parent: Option<&N>, context: &C) -> Result<()> {
        match self.hooks[node.kind().index()].exit.as_mut() {
            Some(f) => f(node, parent, context),
            None => Ok(()),
        }
    }
}

// =============================================================================
// Utility Visitors
// =============================================================================

/// Counts nodes by kind.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NodeCounter {
    counts: [usize; NodeKind::COUNT],
}

impl NodeCounter {
    /// Counts every node in `root`.
    #[must_use]
    pub fn count<N: Traversable>(root: &N) -> Self {
        let mut counter = Self::default();
        traverse(root, &mut counter, ()).ok();
        counter
    }

    /// Returns the number of nodes of `kind`.
    #[must_use]
    pub fn get(&self, kind: NodeKind) -> usize {
        self.counts[kind.index()]
    }

    /// Returns the total number of nodes counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

impl<N: Traversable> Visitor<N> for NodeCounter {
    type Context = ();

    fn enter(&mut self, node: &N, _parent: Option<&N>, _context: &()) -> Result<Option<()>> {
        self.counts[node.kind().index()] += 1;
        Ok(None)
    }
}

/// Computes the maximum node depth of a tree (the root is depth 1).
#[derive(Debug, Default)]
pub struct DepthCalculator {
    current_depth: usize,
    /// Maximum depth encountered.
    pub max_depth: usize,
}

impl<N: Traversable> Visitor<N> for DepthCalculator {
    type Context = ();

    fn enter(&mut self, _node: &N, _parent: Option<&N>, _context: &()) -> Result<Option<()>> {
        self.current_depth += 1;
        self.max_depth = self.max_depth.max(self.current_depth);
        Ok(None)
    }

    fn exit(&mut self, _node: &N, _parent: Option<&N>, _context: &()) -> Result<()> {
        self.current_depth -= 1;
        Ok(())
    }
}
