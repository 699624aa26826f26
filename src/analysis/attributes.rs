use crate::semantic::{SemanticModel, Symbol};
use crate::syntax::{SyntaxKind, SyntaxNode};

/// An attribute usage on a declaration, together with the symbol it resolved to
#[derive(Debug, Clone, Copy)]
pub struct AttributeInstance<'a> {
    pub node: SyntaxNode<'a>,
    pub symbol: &'a Symbol,
}

impl<'a> AttributeInstance<'a> {
    pub fn qualified_name(&self) -> &'a str {
        &self.symbol.qualified_name
    }

    /// Value expression of a `Name = value` argument
    pub fn named_argument(&self, name: &str) -> Option<SyntaxNode<'a>> {
        self.node
            .children_of_kind(SyntaxKind::AttributeArgumentList)
            .flat_map(|list| list.children_of_kind(SyntaxKind::AttributeArgument))
            .find(|argument| argument.text() == Some(name))
            .and_then(|argument| argument.first_child())
    }
}

/// Looks up attribute usages on a declaration by qualified name prefix
#[derive(Clone, Copy)]
pub struct AttributeQuery<'a> {
    model: &'a dyn SemanticModel,
}

impl<'a> AttributeQuery<'a> {
    pub fn new(model: &'a dyn SemanticModel) -> Self {
        Self { model }
    }

    /// Every attribute in every attribute list of `site` whose resolved name starts
    /// with `prefix`, in source order. Usages that did not resolve are skipped.
    pub fn find_all<'p>(
        self,
        site: SyntaxNode<'a>,
        prefix: &'p str,
    ) -> impl Iterator<Item = AttributeInstance<'a>> + 'p
    where
        'a: 'p,
    {
        let model = self.model;
        site.children_of_kind(SyntaxKind::AttributeList)
            .flat_map(|list| list.children_of_kind(SyntaxKind::Attribute))
            .filter_map(move |node| model.symbol_info(node).map(|symbol| AttributeInstance { node, symbol }))
            .filter(move |instance| instance.symbol.name_starts_with(prefix))
    }

    pub fn find(self, site: SyntaxNode<'a>, prefix: &str) -> Option<AttributeInstance<'a>> {
        self.find_all(site, prefix).next()
    }
}
