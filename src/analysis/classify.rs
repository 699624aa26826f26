use serde::Deserialize;

use crate::analysis::attributes::{AttributeInstance, AttributeQuery};
use crate::semantic::Symbol;
use crate::syntax::{SyntaxKind, SyntaxNode};

/// Qualified names the rules match against. The defaults target LINQ to SQL.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MappingNames {
    pub table_attribute: String,
    pub column_attribute: String,
    pub primary_key_argument: String,
    /// Containing type of the operators that are translated to a remote query
    pub query_operator_namespace: String,
    pub char_types: Vec<String>,
}

impl Default for MappingNames {
    fn default() -> Self {
        Self {
            table_attribute: "System.Data.Linq.Mapping.TableAttribute".to_string(),
            column_attribute: "System.Data.Linq.Mapping.ColumnAttribute".to_string(),
            primary_key_argument: "IsPrimaryKey".to_string(),
            query_operator_namespace: "System.Linq.Queryable".to_string(),
            char_types: vec!["char".to_string(), "char?".to_string()],
        }
    }
}

/// Semantic predicates shared by the rules
#[derive(Clone, Copy)]
pub struct SymbolClassifier<'a> {
    query: AttributeQuery<'a>,
    names: &'a MappingNames,
}

impl<'a> SymbolClassifier<'a> {
    pub fn new(query: AttributeQuery<'a>, names: &'a MappingNames) -> Self {
        Self { query, names }
    }

    pub fn is_mapped_entity(self, type_decl: SyntaxNode<'a>) -> bool {
        self.query.find(type_decl, &self.names.table_attribute).is_some()
    }

    /// Column attributes of a member. Only properties count, the mapping code
    /// generator never emits column fields.
    pub fn column_attributes(self, member: SyntaxNode<'a>) -> impl Iterator<Item = AttributeInstance<'a>> {
        let query = self.query;
        let prefix = self.names.column_attribute.as_str();
        (member.kind() == SyntaxKind::PropertyDeclaration)
            .then(move || query.find_all(member, prefix))
            .into_iter()
            .flatten()
    }

    pub fn is_mapped_column(self, member: SyntaxNode<'a>) -> bool {
        self.column_attributes(member).next().is_some()
    }

    /// `IsPrimaryKey = true` written as a literal. Constants and other expressions
    /// are not evaluated.
    pub fn is_primary_key_column(self, attribute: &AttributeInstance<'a>) -> bool {
        attribute
            .named_argument(&self.names.primary_key_argument)
            .is_some_and(|value| value.kind() == SyntaxKind::TrueLiteralExpression)
    }

    pub fn is_remote_query_operator(self, method: &Symbol) -> bool {
        method.containing_symbol.as_deref() == Some(self.names.query_operator_namespace.as_str())
    }

    pub fn type_has_table_attribute(self, type_symbol: &Symbol) -> bool {
        type_symbol
            .attributes
            .iter()
            .any(|attribute| attribute.class_name.starts_with(&self.names.table_attribute))
    }

    pub fn is_char_type(self, type_name: &str) -> bool {
        self.names.char_types.iter().any(|name| name == type_name)
    }
}
