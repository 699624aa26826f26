use std::collections::HashMap;

use crate::syntax::{NodeId, SyntaxNode};

/// What a resolved symbol stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Namespace,
    NamedType,
    Method,
    Property,
    Field,
    Local,
    Parameter,
}

/// An annotation as the semantic model sees it on a symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeData {
    /// Fully qualified name of the attribute class
    pub class_name: String,
}

impl AttributeData {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
        }
    }
}

/// Resolved semantic identity bound to a declaration or expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub kind: SymbolKind,
    /// Display form of the symbol. Attribute usages resolve to the attribute
    /// constructor, e.g. `System.Data.Linq.Mapping.TableAttribute.TableAttribute()`.
    pub qualified_name: String,
    pub attributes: Vec<AttributeData>,
    /// Qualified name of the type or namespace declaring this symbol
    pub containing_symbol: Option<String>,
    /// Generic type arguments, for methods
    pub type_arguments: Vec<Symbol>,
}

impl Symbol {
    pub fn new(kind: SymbolKind, qualified_name: impl Into<String>) -> Self {
        Self {
            kind,
            qualified_name: qualified_name.into(),
            attributes: Vec::new(),
            containing_symbol: None,
            type_arguments: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, class_name: impl Into<String>) -> Self {
        self.attributes.push(AttributeData::new(class_name));
        self
    }

    pub fn with_containing_symbol(mut self, containing: impl Into<String>) -> Self {
        self.containing_symbol = Some(containing.into());
        self
    }

    pub fn with_type_argument(mut self, argument: Symbol) -> Self {
        self.type_arguments.push(argument);
        self
    }

    /// Prefix comparison, so constructor suffixes and generic arity markers on the
    /// display name do not defeat a match.
    pub fn name_starts_with(&self, prefix: &str) -> bool {
        self.qualified_name.starts_with(prefix)
    }
}

/// Read-only view of the host's binding results.
///
/// Implemented by whatever hosts the analyzer. Lookups that fail to resolve return
/// `None` and rules treat that as "does not apply".
pub trait SemanticModel: Send + Sync {
    fn symbol_info(&self, node: SyntaxNode<'_>) -> Option<&Symbol>;

    /// Display name of the static type of an expression (`char`, `char?`, ...)
    fn type_name(&self, node: SyntaxNode<'_>) -> Option<&str>;
}

/// Semantic model backed by precomputed node bindings
#[derive(Debug, Clone, Default)]
pub struct SemanticTable {
    symbols: HashMap<NodeId, Symbol>,
    types: HashMap<NodeId, String>,
}

impl SemanticTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind_symbol(&mut self, node: NodeId, symbol: Symbol) -> &mut Self {
        self.symbols.insert(node, symbol);
        self
    }

    pub fn bind_type(&mut self, node: NodeId, type_name: impl Into<String>) -> &mut Self {
        self.types.insert(node, type_name.into());
        self
    }
}

impl SemanticModel for SemanticTable {
    fn symbol_info(&self, node: SyntaxNode<'_>) -> Option<&Symbol> {
        self.symbols.get(&node.id())
    }

    fn type_name(&self, node: SyntaxNode<'_>) -> Option<&str> {
        self.types.get(&node.id()).map(String::as_str)
    }
}
