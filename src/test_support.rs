//! Tree fixtures shaped like the host output for small C# sources.

use crate::semantic::{SemanticTable, Symbol, SymbolKind};
use crate::syntax::{NodeId, SourcePosition, SourceSpan, SyntaxKind, SyntaxTree, TreeBuilder};

pub(crate) const TABLE_ATTRIBUTE: &str = "System.Data.Linq.Mapping.TableAttribute";
pub(crate) const COLUMN_ATTRIBUTE: &str = "System.Data.Linq.Mapping.ColumnAttribute";
pub(crate) const QUERYABLE: &str = "System.Linq.Queryable";

pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub(crate) fn span(line: usize, column: usize, len: usize) -> SourceSpan {
    let offset = line.saturating_sub(1) * 120 + column.saturating_sub(1);
    SourceSpan::new(
        SourcePosition::new(line, column, offset),
        SourcePosition::new(line, column + len, offset + len),
    )
}

/// Symbol of an attribute usage, which resolves to the attribute constructor
pub(crate) fn attribute_symbol(class_name: &str) -> Symbol {
    let simple = class_name.rsplit('.').next().unwrap_or(class_name);
    Symbol::new(SymbolKind::Method, format!("{}.{}()", class_name, simple)).with_containing_symbol(class_name)
}

pub(crate) fn mapped_type_symbol(name: &str) -> Symbol {
    Symbol::new(SymbolKind::NamedType, format!("ConsoleApplication1.{}", name)).with_attribute(TABLE_ATTRIBUTE)
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum KeyValue {
    True,
    False,
    /// `IsPrimaryKey = KeyFlag`
    NonLiteral,
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum Column {
    /// No column attribute, or one that is commented out
    None,
    Plain,
    Key(KeyValue),
    /// `[Column(IsPrimaryKey = true)]` that the host could not bind
    Unresolved,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Member {
    pub kind: SyntaxKind,
    pub name: &'static str,
    pub column: Column,
}

impl Member {
    pub(crate) fn property(name: &'static str, column: Column) -> Self {
        Self {
            kind: SyntaxKind::PropertyDeclaration,
            name,
            column,
        }
    }

    pub(crate) fn field(name: &'static str, column: Column) -> Self {
        Self {
            kind: SyntaxKind::FieldDeclaration,
            name,
            column,
        }
    }

    pub(crate) fn method(name: &'static str) -> Self {
        Self {
            kind: SyntaxKind::MethodDeclaration,
            name,
            column: Column::None,
        }
    }
}

pub(crate) struct EntityFixture {
    pub tree: SyntaxTree,
    pub model: SemanticTable,
    pub class: NodeId,
}

/// ```text
/// namespace ConsoleApplication1
/// {
///     [System.Data.Linq.Mapping.TableAttribute(Name = "dbo.Table")]
///     public class <name>             <- line `class_line`
///     {
///         [Column(...)]
///         public int <member> {get;set;}
///         ...
/// ```
pub(crate) fn entity(name: &str, class_line: usize, table: bool, members: &[Member]) -> EntityFixture {
    let mut b = TreeBuilder::new("Test0.cs");
    let mut model = SemanticTable::new();
    b.start_node(SyntaxKind::CompilationUnit, span(1, 1, 2000));
    b.start_node(SyntaxKind::NamespaceDeclaration, span(class_line - 3, 1, 1500));
    b.token(SyntaxKind::Identifier, "ConsoleApplication1", span(class_line - 3, 11, 19));
    let class = entity_class(&mut b, &mut model, name, class_line, table, members);
    b.finish_node();
    b.finish_node();

    EntityFixture {
        tree: b.build().expect("entity fixture is balanced"),
        model,
        class,
    }
}

fn entity_class(
    b: &mut TreeBuilder,
    model: &mut SemanticTable,
    name: &str,
    class_line: usize,
    table: bool,
    members: &[Member],
) -> NodeId {
    let class = b.start_node(SyntaxKind::ClassDeclaration, span(class_line - 1, 5, 1000));

    if table {
        b.start_node(SyntaxKind::AttributeList, span(class_line - 1, 5, 63));
        let attribute = b.start_node(SyntaxKind::Attribute, span(class_line - 1, 6, 61));
        b.start_node(SyntaxKind::AttributeArgumentList, span(class_line - 1, 45, 21));
        b.start_node_with_text(SyntaxKind::AttributeArgument, "Name", span(class_line - 1, 46, 19));
        b.token(SyntaxKind::StringLiteralExpression, "\"dbo.Table\"", span(class_line - 1, 53, 11));
        b.finish_node();
        b.finish_node();
        b.finish_node();
        b.finish_node();
        model.bind_symbol(attribute, attribute_symbol(TABLE_ATTRIBUTE));
    }

    b.token(SyntaxKind::Identifier, name, span(class_line, 18, name.len()));

    for (i, member) in members.iter().enumerate() {
        emit_member(b, model, member, class_line + 2 + i * 2);
    }

    b.finish_node();
    class
}

fn emit_member(b: &mut TreeBuilder, model: &mut SemanticTable, member: &Member, line: usize) {
    b.start_node(member.kind, span(line, 9, 60));
    match member.column {
        Column::None => {}
        Column::Plain => column_attribute(b, model, line, None, true),
        Column::Key(value) => column_attribute(b, model, line, Some(value), true),
        Column::Unresolved => column_attribute(b, model, line, Some(KeyValue::True), false),
    }
    b.token(SyntaxKind::Identifier, member.name, span(line + 1, 20, member.name.len()));
    b.finish_node();
}

fn column_attribute(
    b: &mut TreeBuilder,
    model: &mut SemanticTable,
    line: usize,
    key: Option<KeyValue>,
    resolved: bool,
) {
    b.start_node(SyntaxKind::AttributeList, span(line, 9, 56));
    let attribute = b.start_node(SyntaxKind::Attribute, span(line, 10, 54));

    if let Some(value) = key {
        b.start_node(SyntaxKind::AttributeArgumentList, span(line, 43, 21));
        b.start_node_with_text(SyntaxKind::AttributeArgument, "IsPrimaryKey", span(line, 44, 19));
        match value {
            KeyValue::True => b.token(SyntaxKind::TrueLiteralExpression, "true", span(line, 59, 4)),
            KeyValue::False => b.token(SyntaxKind::FalseLiteralExpression, "false", span(line, 59, 5)),
            KeyValue::NonLiteral => b.token(SyntaxKind::IdentifierName, "KeyFlag", span(line, 59, 7)),
        };
        b.finish_node();
        b.finish_node();
    }

    b.finish_node();
    b.finish_node();
    if resolved {
        model.bind_symbol(attribute, attribute_symbol(COLUMN_ATTRIBUTE));
    }
}

/// Where the char comparison sits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Placement {
    /// `query.Where(x => x.CharCol == 'a');`
    QueryPredicate,
    /// `query.Where(x => x.Active && (x.CharCol == 'a'));`
    NestedInPredicate,
    /// `query.Where(x => Helpers.Check(x.CharCol == 'a'));`
    InnerCall,
    /// `(x.CharCol == 'a').Where(x => true);` the comparison is the call's receiver
    Receiver,
    /// `return x.CharCol == 'a';`
    MethodBody,
    /// `bool same = x.CharCol == 'a';` as a field
    FieldInitializer,
    /// `bool Same { get; } = x.CharCol == 'a';`
    PropertyInitializer,
    /// `var same = x.CharCol == 'a';` as a top-level statement
    TopLevelStatement,
}

pub(crate) struct QueryCase {
    pub placement: Placement,
    pub operator: SyntaxKind,
    pub left_type: Option<&'static str>,
    pub right_type: Option<&'static str>,
    pub operator_namespace: &'static str,
    pub element_mapped: bool,
    pub resolve_method: bool,
    /// Also declare the `[Table] class Row` without a key in the same file
    pub declare_entity: bool,
}

impl Default for QueryCase {
    fn default() -> Self {
        Self {
            placement: Placement::QueryPredicate,
            operator: SyntaxKind::EqualsExpression,
            left_type: Some("char"),
            right_type: Some("char"),
            operator_namespace: QUERYABLE,
            element_mapped: true,
            resolve_method: true,
            declare_entity: false,
        }
    }
}

pub(crate) struct QueryFixture {
    pub tree: SyntaxTree,
    pub model: SemanticTable,
    pub comparison: NodeId,
}

const STATEMENT_LINE: usize = 23;

impl QueryCase {
    pub(crate) fn build(&self) -> QueryFixture {
        let mut b = TreeBuilder::new("Test0.cs");
        let mut model = SemanticTable::new();
        b.start_node(SyntaxKind::CompilationUnit, span(1, 1, 3000));

        if self.declare_entity {
            entity_class(&mut b, &mut model, "Row", 3, true, &[Member::property("CharCol", Column::Plain)]);
        }

        let comparison = match self.placement {
            Placement::TopLevelStatement => {
                b.start_node(SyntaxKind::GlobalStatement, span(STATEMENT_LINE, 1, 30));
                b.start_node(SyntaxKind::LocalDeclarationStatement, span(STATEMENT_LINE, 1, 30));
                let comparison = self.initializer(&mut b, &mut model, SyntaxKind::VariableDeclarator, "same");
                b.finish_node();
                b.finish_node();
                comparison
            }
            Placement::FieldInitializer => {
                self.open_class(&mut b, "Holder");
                b.start_node(SyntaxKind::FieldDeclaration, span(STATEMENT_LINE, 9, 40));
                let comparison = self.initializer(&mut b, &mut model, SyntaxKind::VariableDeclarator, "same");
                b.finish_node();
                b.finish_node();
                comparison
            }
            Placement::PropertyInitializer => {
                self.open_class(&mut b, "Holder");
                let comparison = self.initializer(&mut b, &mut model, SyntaxKind::PropertyDeclaration, "Same");
                b.finish_node();
                comparison
            }
            Placement::MethodBody => {
                self.open_method(&mut b);
                b.start_node(SyntaxKind::ReturnStatement, span(STATEMENT_LINE, 13, 30));
                let comparison = self.comparison(&mut b, &mut model);
                b.finish_node();
                self.close_method(&mut b);
                comparison
            }
            Placement::QueryPredicate | Placement::NestedInPredicate | Placement::InnerCall | Placement::Receiver => {
                self.open_method(&mut b);
                b.start_node(SyntaxKind::ExpressionStatement, span(STATEMENT_LINE, 13, 60));
                let comparison = self.where_call(&mut b, &mut model);
                b.finish_node();
                self.close_method(&mut b);
                comparison
            }
        };

        b.finish_node();
        QueryFixture {
            tree: b.build().expect("query fixture is balanced"),
            model,
            comparison,
        }
    }

    fn open_class(&self, b: &mut TreeBuilder, name: &str) {
        b.start_node(SyntaxKind::ClassDeclaration, span(20, 5, 800));
        b.token(SyntaxKind::Identifier, name, span(20, 18, name.len()));
    }

    // class Program { void Run(IQueryable<Row> query) { ... } }
    fn open_method(&self, b: &mut TreeBuilder) {
        self.open_class(b, "Program");
        b.start_node(SyntaxKind::MethodDeclaration, span(21, 9, 400));
        b.token(SyntaxKind::Identifier, "Run", span(21, 21, 3));
        b.start_node(SyntaxKind::Parameter, span(21, 25, 23));
        b.token(SyntaxKind::Identifier, "query", span(21, 43, 5));
        b.finish_node();
        b.start_node(SyntaxKind::Block, span(22, 9, 300));
    }

    fn close_method(&self, b: &mut TreeBuilder) {
        b.finish_node();
        b.finish_node();
        b.finish_node();
    }

    // <declarator or property> <name> = <comparison>
    fn initializer(&self, b: &mut TreeBuilder, model: &mut SemanticTable, kind: SyntaxKind, name: &str) -> NodeId {
        b.start_node(kind, span(STATEMENT_LINE, 14, 30));
        b.token(SyntaxKind::Identifier, name, span(STATEMENT_LINE, 14, name.len()));
        b.start_node(SyntaxKind::EqualsValueClause, span(STATEMENT_LINE, 19, 20));
        let comparison = self.comparison(b, model);
        b.finish_node();
        b.finish_node();
        comparison
    }

    fn where_call(&self, b: &mut TreeBuilder, model: &mut SemanticTable) -> NodeId {
        let line = STATEMENT_LINE;
        b.start_node(SyntaxKind::InvocationExpression, span(line, 13, 50));
        let callee = b.start_node(SyntaxKind::SimpleMemberAccessExpression, span(line, 13, 11));
        let receiver = if self.placement == Placement::Receiver {
            b.start_node(SyntaxKind::ParenthesizedExpression, span(line, 13, 5));
            let comparison = self.comparison(b, model);
            b.finish_node();
            Some(comparison)
        } else {
            b.token(SyntaxKind::IdentifierName, "query", span(line, 13, 5));
            None
        };
        b.token(SyntaxKind::IdentifierName, "Where", span(line, 19, 5));
        b.finish_node();

        b.start_node(SyntaxKind::ArgumentList, span(line, 24, 39));
        b.start_node(SyntaxKind::Argument, span(line, 25, 37));
        b.start_node(SyntaxKind::SimpleLambdaExpression, span(line, 25, 37));
        b.start_node(SyntaxKind::Parameter, span(line, 25, 1));
        b.token(SyntaxKind::Identifier, "x", span(line, 25, 1));
        b.finish_node();

        let comparison = match self.placement {
            Placement::NestedInPredicate => {
                b.start_node_with_text(SyntaxKind::LogicalAndExpression, "&&", span(line, 30, 30));
                b.start_node(SyntaxKind::SimpleMemberAccessExpression, span(line, 30, 8));
                b.token(SyntaxKind::IdentifierName, "x", span(line, 30, 1));
                b.token(SyntaxKind::IdentifierName, "Active", span(line, 32, 6));
                b.finish_node();
                b.start_node(SyntaxKind::ParenthesizedExpression, span(line, 42, 18));
                let comparison = self.comparison(b, model);
                b.finish_node();
                b.finish_node();
                comparison
            }
            Placement::InnerCall => {
                b.start_node(SyntaxKind::InvocationExpression, span(line, 30, 31));
                let check = b.start_node(SyntaxKind::SimpleMemberAccessExpression, span(line, 30, 13));
                b.token(SyntaxKind::IdentifierName, "Helpers", span(line, 30, 7));
                b.token(SyntaxKind::IdentifierName, "Check", span(line, 38, 5));
                b.finish_node();
                b.start_node(SyntaxKind::ArgumentList, span(line, 43, 18));
                b.start_node(SyntaxKind::Argument, span(line, 44, 16));
                let comparison = self.comparison(b, model);
                b.finish_node();
                b.finish_node();
                b.finish_node();
                model.bind_symbol(
                    check,
                    Symbol::new(SymbolKind::Method, "ConsoleApplication1.Helpers.Check(bool)")
                        .with_containing_symbol("ConsoleApplication1.Helpers"),
                );
                comparison
            }
            Placement::Receiver => {
                b.token(SyntaxKind::TrueLiteralExpression, "true", span(line, 30, 4));
                receiver.expect("receiver comparison was emitted")
            }
            _ => self.comparison(b, model),
        };

        b.finish_node();
        b.finish_node();
        b.finish_node();
        b.finish_node();

        if self.resolve_method {
            let element = if self.element_mapped {
                mapped_type_symbol("Row")
            } else {
                Symbol::new(SymbolKind::NamedType, "ConsoleApplication1.Row")
            };
            let method = Symbol::new(
                SymbolKind::Method,
                format!(
                    "{}.Where<ConsoleApplication1.Row>(System.Linq.IQueryable<ConsoleApplication1.Row>, \
                     System.Linq.Expressions.Expression<System.Func<ConsoleApplication1.Row, bool>>)",
                    self.operator_namespace
                ),
            )
            .with_containing_symbol(self.operator_namespace)
            .with_type_argument(element);
            model.bind_symbol(callee, method);
        }

        comparison
    }

    // x.CharCol <op> 'a'
    fn comparison(&self, b: &mut TreeBuilder, model: &mut SemanticTable) -> NodeId {
        let line = STATEMENT_LINE;
        let text = self.operator.operator_token().unwrap_or("==");
        let comparison = b.start_node_with_text(self.operator, text, span(line, 44, 16));
        let left = b.start_node(SyntaxKind::SimpleMemberAccessExpression, span(line, 44, 9));
        b.token(SyntaxKind::IdentifierName, "x", span(line, 44, 1));
        b.token(SyntaxKind::IdentifierName, "CharCol", span(line, 46, 7));
        b.finish_node();
        let right = b.token(SyntaxKind::CharacterLiteralExpression, "'a'", span(line, 57, 3));
        b.finish_node();

        if let Some(left_type) = self.left_type {
            model.bind_type(left, left_type);
        }
        if let Some(right_type) = self.right_type {
            model.bind_type(right, right_type);
        }
        comparison
    }
}
