use log::debug;

use crate::LintError;
use crate::analysis::context::AnalysisContext;
use crate::analysis::diagnostic::DiagnosticSeverity;
use crate::analysis::rule::{RuleDescriptor, SemanticRule};
use crate::syntax::{SyntaxKind, SyntaxNode};

pub static MISSING_PRIMARY_KEY: RuleDescriptor = RuleDescriptor {
    id: "LinqToSqlTableMissingPrimaryKey",
    title: "LinqToSql table is missing a primary key",
    message_format: "LinqToSql Object {0} is missing a Primary Key field and will not be able to be updated.",
    category: "LinqToSql",
    severity: DiagnosticSeverity::Warning,
    enabled_by_default: true,
};

// Mapped entity types must declare at least one primary key column, otherwise the
// data context can read them but never update them
pub struct MissingPrimaryKeyRule;

impl SemanticRule for MissingPrimaryKeyRule {
    fn descriptor(&self) -> &'static RuleDescriptor {
        &MISSING_PRIMARY_KEY
    }

    fn kinds(&self) -> &'static [SyntaxKind] {
        &[SyntaxKind::ClassDeclaration, SyntaxKind::StructDeclaration]
    }

    fn check(&self, ctx: &AnalysisContext, node: SyntaxNode<'_>) -> Result<(), LintError> {
        let classifier = ctx.classifier();
        if !classifier.is_mapped_entity(node) {
            return Ok(());
        }

        let has_key = node.children().any(|member| {
            classifier
                .column_attributes(member)
                .any(|column| classifier.is_primary_key_column(&column))
        });
        if has_key {
            return Ok(());
        }

        let Some(name) = node.identifier() else {
            debug!("mapped type declaration without a name token at {:?}", node.span());
            return Ok(());
        };
        let type_name = name.text().unwrap_or_default();

        debug!("{} has no primary key column", type_name);
        ctx.report(self.descriptor(), name.span(), &[type_name]);
        Ok(())
    }
}
