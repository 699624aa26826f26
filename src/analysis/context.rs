use std::collections::HashSet;

use crate::analysis::attributes::AttributeQuery;
use crate::analysis::cancellation::CancellationToken;
use crate::analysis::classify::{MappingNames, SymbolClassifier};
use crate::analysis::diagnostic::DiagnosticCollector;
use crate::analysis::rule::RuleDescriptor;
use crate::semantic::SemanticModel;
use crate::syntax::{SourceSpan, SyntaxTree};

/// Everything a rule may look at while one tree is analyzed. Borrowed from the
/// host and the analyzer for the duration of a single pass.
pub struct AnalysisContext<'a> {
    pub tree: &'a SyntaxTree,
    pub model: &'a dyn SemanticModel,
    pub diagnostics: &'a DiagnosticCollector,
    pub names: &'a MappingNames,
    pub cancellation: &'a CancellationToken,
    pub disabled_rules: &'a HashSet<String>,
}

impl<'a> AnalysisContext<'a> {
    pub fn is_rule_enabled(&self, rule_id: &str) -> bool {
        !self.disabled_rules.contains(rule_id)
    }

    pub fn attributes(&self) -> AttributeQuery<'a> {
        AttributeQuery::new(self.model)
    }

    pub fn classifier(&self) -> SymbolClassifier<'a> {
        SymbolClassifier::new(self.attributes(), self.names)
    }

    pub fn report(&self, descriptor: &RuleDescriptor, span: SourceSpan, args: &[&str]) {
        self.diagnostics.report(descriptor, self.tree.file(), span, args);
    }
}
