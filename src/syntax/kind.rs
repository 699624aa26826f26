use serde::{Deserialize, Serialize};

/// Represents a position in the source code
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcePosition {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl SourcePosition {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self { line, column, offset }
    }
}

/// Represents a span in the source code (start and end positions)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpan {
    pub start: SourcePosition,
    pub end: SourcePosition,
}

impl SourceSpan {
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Self { start, end }
    }
}

/// Kind tag of a node in the host tree.
///
/// The names follow the host compiler's syntax kinds so a host can map its own
/// tags one to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SyntaxKind {
    CompilationUnit,
    NamespaceDeclaration,

    // Type declarations and members
    ClassDeclaration,
    StructDeclaration,
    InterfaceDeclaration,
    MethodDeclaration,
    PropertyDeclaration,
    FieldDeclaration,
    VariableDeclarator,
    EqualsValueClause,
    Parameter,

    // Annotations
    AttributeList,
    Attribute,
    AttributeArgumentList,
    AttributeArgument,

    // Statements
    Block,
    GlobalStatement,
    ExpressionStatement,
    LocalDeclarationStatement,
    ReturnStatement,

    // Expressions
    InvocationExpression,
    SimpleMemberAccessExpression,
    ArgumentList,
    Argument,
    SimpleLambdaExpression,
    ParenthesizedLambdaExpression,
    ConditionalExpression,
    ParenthesizedExpression,
    LogicalAndExpression,
    LogicalOrExpression,
    LogicalNotExpression,
    EqualsExpression,
    NotEqualsExpression,
    IdentifierName,
    CharacterLiteralExpression,
    StringLiteralExpression,
    NumericLiteralExpression,
    TrueLiteralExpression,
    FalseLiteralExpression,
    NullLiteralExpression,

    // Tokens
    Identifier,
}

impl SyntaxKind {
    /// Operator token text for binary expression kinds
    pub fn operator_token(self) -> Option<&'static str> {
        match self {
            SyntaxKind::EqualsExpression => Some("=="),
            SyntaxKind::NotEqualsExpression => Some("!="),
            SyntaxKind::LogicalAndExpression => Some("&&"),
            SyntaxKind::LogicalOrExpression => Some("||"),
            _ => None,
        }
    }
}
