use thiserror::Error;

pub mod analysis;
pub mod semantic;
pub mod syntax;

#[cfg(test)]
pub(crate) mod test_support;

pub use analysis::cancellation::CancellationToken;
pub use analysis::classify::MappingNames;
pub use analysis::diagnostic::{Diagnostic, DiagnosticSeverity, Location};
pub use analysis::external_api::{AnalysisReport, AnalyzerConfig, CompilationUnit};
pub use analysis::rule::{RuleDescriptor, SemanticRule};
pub use analysis::SemanticAnalyzer;
pub use semantic::{AttributeData, SemanticModel, SemanticTable, Symbol, SymbolKind};
pub use syntax::{NodeId, SourcePosition, SourceSpan, SyntaxKind, SyntaxNode, SyntaxTree, TreeBuilder};

#[derive(Debug, Error)]
pub enum LintError {
    #[error("Analysis was cancelled by the host")]
    Cancelled,
    #[error("Syntax tree has no nodes")]
    EmptyTree,
    #[error("Syntax tree has more than one root, second root is a {0:?}")]
    MultipleRoots(SyntaxKind),
    #[error("Syntax tree is unbalanced: {0}")]
    UnbalancedTree(String),
    #[error("Node {0:?} does not belong to this syntax tree")]
    UnknownNode(NodeId),
    #[error("Invalid analyzer configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
