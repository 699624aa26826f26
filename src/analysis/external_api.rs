use rayon::prelude::*;
use serde::Deserialize;

use crate::LintError;
use crate::analysis::SemanticAnalyzer;
use crate::analysis::cancellation::CancellationToken;
use crate::analysis::classify::MappingNames;
use crate::analysis::context::AnalysisContext;
use crate::analysis::diagnostic::{Diagnostic, DiagnosticCollector, DiagnosticSeverity, Location};
use crate::analysis::rule::RuleDescriptor;
use crate::semantic::SemanticModel;
use crate::syntax::{SourceSpan, SyntaxTree};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub disabled_rules: Vec<String>,
    pub warning_as_error: bool,
    pub error_limit: Option<usize>,
    pub mapping: MappingNames,
}

impl AnalyzerConfig {
    pub fn from_json(json: &str) -> Result<Self, LintError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// One tree and the semantic model the host bound for it
#[derive(Clone, Copy)]
pub struct CompilationUnit<'a> {
    pub tree: &'a SyntaxTree,
    pub model: &'a dyn SemanticModel,
}

#[derive(Debug, Default)]
pub struct AnalysisReport {
    pub diagnostics: Vec<Diagnostic>,
    /// At least one node's analysis was abandoned on host cancellation
    pub cancelled: bool,
}

impl AnalysisReport {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity == DiagnosticSeverity::Error)
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity == DiagnosticSeverity::Warning)
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl SemanticAnalyzer {
    pub fn analyze_with_config(
        &self,
        tree: &SyntaxTree,
        model: &dyn SemanticModel,
        config: &AnalyzerConfig,
        cancellation: &CancellationToken,
    ) -> AnalysisReport {
        self.analyze_units(&[CompilationUnit { tree, model }], config, cancellation)
    }

    /// Analyze several compilation units in parallel. All units report into one
    /// collector; the order of the returned diagnostics across units is unspecified.
    pub fn analyze_units(
        &self,
        units: &[CompilationUnit<'_>],
        config: &AnalyzerConfig,
        cancellation: &CancellationToken,
    ) -> AnalysisReport {
        let disabled_rules = self.effective_disabled_rules(config);
        let collector = DiagnosticCollector::new();

        let cancelled = units
            .par_iter()
            .map(|unit| {
                let ctx = AnalysisContext {
                    tree: unit.tree,
                    model: unit.model,
                    diagnostics: &collector,
                    names: &config.mapping,
                    cancellation,
                    disabled_rules: &disabled_rules,
                };
                self.visit_tree(&ctx)
            })
            .reduce(|| false, |a, b| a || b);

        let mut report = AnalysisReport {
            diagnostics: collector.into_diagnostics(),
            cancelled,
        };
        apply_config(&mut report.diagnostics, config);
        report
    }

    // Method to get all available rules
    pub fn list_rules(&self) -> Vec<&'static RuleDescriptor> {
        self.rule_registry
            .get_all_rules()
            .iter()
            .map(|rule| rule.descriptor())
            .collect()
    }
}

fn apply_config(diagnostics: &mut Vec<Diagnostic>, config: &AnalyzerConfig) {
    if config.warning_as_error {
        for diag in diagnostics.iter_mut() {
            if diag.severity == DiagnosticSeverity::Warning {
                diag.severity = DiagnosticSeverity::Error;
            }
        }
    }

    if let Some(limit) = config.error_limit {
        let error_count = diagnostics
            .iter()
            .filter(|d| d.severity == DiagnosticSeverity::Error)
            .count();

        if error_count > limit {
            diagnostics.push(Diagnostic {
                rule_id: "error-limit".to_string(),
                severity: DiagnosticSeverity::Info,
                message: format!("Too many errors ({}), limit is {}", error_count, limit),
                location: Location::default(),
                span: SourceSpan::default(),
                enabled: true,
            });
        }
    }
}
