use log::debug;

use crate::LintError;
use crate::analysis::ancestors::AncestorSearch;
use crate::analysis::context::AnalysisContext;
use crate::analysis::diagnostic::DiagnosticSeverity;
use crate::analysis::rule::{RuleDescriptor, SemanticRule};
use crate::semantic::SymbolKind;
use crate::syntax::{SyntaxKind, SyntaxNode};

pub static QUERYABLE_CHAR_EQUALITY: RuleDescriptor = RuleDescriptor {
    id: "IQueryableCharEqualsCharAnalyzer",
    title: "LinqToSql CharEqualsEqualsCharAnalyzer",
    message_format: "{0} {1} {2} can have bad Sql performance. Please use <{0}>.Equals(<{2}>) instead.",
    category: "LinqToSql",
    severity: DiagnosticSeverity::Warning,
    enabled_by_default: true,
};

// Nothing inside these can be an argument of a call, stop looking
const ENCLOSING_CALL: AncestorSearch<'static> = AncestorSearch::new(
    SyntaxKind::InvocationExpression,
    &[
        SyntaxKind::FieldDeclaration,
        SyntaxKind::PropertyDeclaration,
        SyntaxKind::GlobalStatement,
    ],
);

/// Flags `==` / `!=` between chars when the comparison sits in a predicate handed to
/// a remote query operator over a mapped entity. The translated SQL compares through
/// a conversion and defeats indexes.
pub struct QueryableCharEqualityRule;

impl SemanticRule for QueryableCharEqualityRule {
    fn descriptor(&self) -> &'static RuleDescriptor {
        &QUERYABLE_CHAR_EQUALITY
    }

    fn kinds(&self) -> &'static [SyntaxKind] {
        &[SyntaxKind::EqualsExpression, SyntaxKind::NotEqualsExpression]
    }

    fn check(&self, ctx: &AnalysisContext, node: SyntaxNode<'_>) -> Result<(), LintError> {
        let classifier = ctx.classifier();

        let mut operands = node.children();
        let (Some(left), Some(right)) = (operands.next(), operands.next()) else {
            return Ok(());
        };
        let Some(left_type) = ctx.model.type_name(left).filter(|t| classifier.is_char_type(t)) else {
            return Ok(());
        };
        let Some(right_type) = ctx.model.type_name(right).filter(|t| classifier.is_char_type(t)) else {
            return Ok(());
        };

        // The nearest call wins, receiver and argument positions are not told apart
        let Some(invocation) = ENCLOSING_CALL.upward_until(node, ctx.cancellation)? else {
            return Ok(());
        };

        let Some(callee) = invocation
            .first_child()
            .filter(|callee| callee.kind() == SyntaxKind::SimpleMemberAccessExpression)
        else {
            return Ok(());
        };
        let Some(method) = ctx
            .model
            .symbol_info(callee)
            .filter(|symbol| symbol.kind == SymbolKind::Method)
        else {
            return Ok(());
        };
        if !classifier.is_remote_query_operator(method) {
            return Ok(());
        }

        let Some(element_type) = method.type_arguments.first() else {
            return Ok(());
        };
        if !classifier.type_has_table_attribute(element_type) {
            return Ok(());
        }

        let operator = node
            .text()
            .or_else(|| node.kind().operator_token())
            .unwrap_or_default();

        debug!(
            "char comparison {} {} {} inside {}",
            left_type, operator, right_type, method.qualified_name
        );
        ctx.report(self.descriptor(), node.span(), &[left_type, operator, right_type]);
        Ok(())
    }
}
