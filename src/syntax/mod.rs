use std::fmt;

use crate::LintError;

mod kind;

pub use kind::{SourcePosition, SourceSpan, SyntaxKind};

/// Index of a node inside its `SyntaxTree`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct NodeData {
    kind: SyntaxKind,
    span: SourceSpan,
    text: Option<String>,
    // traversal only, the arena owns every node
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena holding the host tree for one source file.
///
/// The root is always `NodeId(0)`. Trees are only produced by `TreeBuilder`, which
/// guarantees a single root and one parent per non-root node.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    file: String,
    nodes: Vec<NodeData>,
}

impl SyntaxTree {
    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn root(&self) -> SyntaxNode<'_> {
        SyntaxNode { tree: self, id: NodeId(0) }
    }

    pub fn node(&self, id: NodeId) -> Result<SyntaxNode<'_>, LintError> {
        if id.0 < self.nodes.len() {
            Ok(SyntaxNode { tree: self, id })
        } else {
            Err(LintError::UnknownNode(id))
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Pre-order walk over every node, children in source order
    pub fn descendants(&self) -> impl Iterator<Item = SyntaxNode<'_>> {
        let mut stack = vec![NodeId(0)];
        std::iter::from_fn(move || {
            let id = stack.pop()?;
            stack.extend(self.nodes[id.0].children.iter().rev());
            Some(SyntaxNode { tree: self, id })
        })
    }
}

/// Borrowed handle to one node of a `SyntaxTree`
#[derive(Clone, Copy)]
pub struct SyntaxNode<'a> {
    tree: &'a SyntaxTree,
    id: NodeId,
}

impl<'a> SyntaxNode<'a> {
    fn data(self) -> &'a NodeData {
        &self.tree.nodes[self.id.0]
    }

    pub fn id(self) -> NodeId {
        self.id
    }

    pub fn file(self) -> &'a str {
        &self.tree.file
    }

    pub fn kind(self) -> SyntaxKind {
        self.data().kind
    }

    pub fn span(self) -> SourceSpan {
        self.data().span
    }

    /// Token text carried by the node: identifier names, operator tokens, literal
    /// text, or the name of a named attribute argument.
    pub fn text(self) -> Option<&'a str> {
        self.data().text.as_deref()
    }

    pub fn parent(self) -> Option<SyntaxNode<'a>> {
        let tree = self.tree;
        self.data().parent.map(|id| SyntaxNode { tree, id })
    }

    pub fn children(self) -> impl Iterator<Item = SyntaxNode<'a>> {
        let tree = self.tree;
        self.data().children.iter().map(move |&id| SyntaxNode { tree, id })
    }

    pub fn first_child(self) -> Option<SyntaxNode<'a>> {
        self.children().next()
    }

    pub fn children_of_kind(self, kind: SyntaxKind) -> impl Iterator<Item = SyntaxNode<'a>> {
        self.children().filter(move |child| child.kind() == kind)
    }

    /// Parent, grandparent, ... up to the root. Does not include `self`.
    pub fn ancestors(self) -> impl Iterator<Item = SyntaxNode<'a>> {
        std::iter::successors(self.parent(), |node| node.parent())
    }

    /// Name token of a declaration
    pub fn identifier(self) -> Option<SyntaxNode<'a>> {
        self.children_of_kind(SyntaxKind::Identifier).next()
    }
}

impl PartialEq for SyntaxNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for SyntaxNode<'_> {}

impl fmt::Debug for SyntaxNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyntaxNode")
            .field("id", &self.id.0)
            .field("kind", &self.kind())
            .field("text", &self.text())
            .finish()
    }
}

/// Builds a `SyntaxTree` in pre-order with `start_node` / `finish_node` pairs.
///
/// Structural mistakes are remembered and returned from `build`, so a host can feed
/// its whole tree without checking every call.
pub struct TreeBuilder {
    file: String,
    nodes: Vec<NodeData>,
    stack: Vec<NodeId>,
    error: Option<LintError>,
}

impl TreeBuilder {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            nodes: Vec::new(),
            stack: Vec::new(),
            error: None,
        }
    }

    pub fn start_node(&mut self, kind: SyntaxKind, span: SourceSpan) -> NodeId {
        let id = self.push(kind, None, span);
        self.stack.push(id);
        id
    }

    pub fn start_node_with_text(&mut self, kind: SyntaxKind, text: impl Into<String>, span: SourceSpan) -> NodeId {
        let id = self.push(kind, Some(text.into()), span);
        self.stack.push(id);
        id
    }

    /// Adds a leaf node under the currently open node
    pub fn token(&mut self, kind: SyntaxKind, text: impl Into<String>, span: SourceSpan) -> NodeId {
        self.push(kind, Some(text.into()), span)
    }

    pub fn finish_node(&mut self) {
        if self.stack.pop().is_none() {
            self.fail(LintError::UnbalancedTree("finish_node called with no open node".to_string()));
        }
    }

    pub fn build(self) -> Result<SyntaxTree, LintError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        if self.nodes.is_empty() {
            return Err(LintError::EmptyTree);
        }
        if let Some(open) = self.stack.last() {
            return Err(LintError::UnbalancedTree(format!(
                "{} node(s) left open, innermost is {:?}",
                self.stack.len(),
                self.nodes[open.0].kind
            )));
        }

        Ok(SyntaxTree {
            file: self.file,
            nodes: self.nodes,
        })
    }

    fn push(&mut self, kind: SyntaxKind, text: Option<String>, span: SourceSpan) -> NodeId {
        let id = NodeId(self.nodes.len());
        let parent = self.stack.last().copied();

        match parent {
            Some(parent) => self.nodes[parent.0].children.push(id),
            None if !self.nodes.is_empty() => self.fail(LintError::MultipleRoots(kind)),
            None => {}
        }

        self.nodes.push(NodeData {
            kind,
            span,
            text,
            parent,
            children: Vec::new(),
        });
        id
    }

    fn fail(&mut self, err: LintError) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }
}
