pub mod ancestors;
pub mod attributes;
pub mod cancellation;
pub mod classify;
pub mod context;
pub mod diagnostic;
pub mod external_api;
pub mod rule;
pub mod rule_registry;
pub mod rules;

use std::collections::HashSet;

use log::{debug, trace, warn};

use crate::LintError;
use crate::analysis::cancellation::CancellationToken;
use crate::analysis::context::AnalysisContext;
use crate::analysis::external_api::{AnalysisReport, AnalyzerConfig};
use crate::analysis::rule_registry::RuleRegistry;
use crate::analysis::rules::missing_primary_key::MissingPrimaryKeyRule;
use crate::analysis::rules::queryable_char_equality::QueryableCharEqualityRule;
use crate::semantic::SemanticModel;
use crate::syntax::SyntaxTree;

pub struct SemanticAnalyzer {
    rule_registry: RuleRegistry,
}

impl SemanticAnalyzer {
    pub fn new() -> Self {
        let mut registry = RuleRegistry::new();

        // Register built-in rules
        registry.register(MissingPrimaryKeyRule);
        registry.register(QueryableCharEqualityRule);

        Self {
            rule_registry: registry,
        }
    }

    /// Analyze one tree with the default configuration
    pub fn analyze(&self, tree: &SyntaxTree, model: &dyn SemanticModel) -> AnalysisReport {
        self.analyze_with_config(tree, model, &AnalyzerConfig::default(), &CancellationToken::new())
    }

    /// Single pre-order pass over `tree`. Returns `true` if any node's analysis was
    /// abandoned because the host cancelled it; the remaining nodes are still visited.
    fn visit_tree(&self, ctx: &AnalysisContext) -> bool {
        let mut cancelled = false;

        for node in ctx.tree.descendants() {
            for rule in self.rule_registry.rules_for(node.kind()) {
                if !ctx.is_rule_enabled(rule.id()) {
                    continue;
                }

                trace!("{} on {:?}", rule.id(), node);
                // a failed check only drops the finding for this node
                if let Err(err) = rule.check(ctx, node) {
                    cancelled |= matches!(err, LintError::Cancelled);
                    debug!("{} abandoned {:?}: {}", rule.id(), node.kind(), err);
                }
            }
        }

        cancelled
    }

    fn effective_disabled_rules(&self, config: &AnalyzerConfig) -> HashSet<String> {
        let mut disabled: HashSet<String> = self
            .rule_registry
            .get_all_rules()
            .into_iter()
            .filter(|rule| !rule.enabled_by_default())
            .map(|rule| rule.id().to_string())
            .collect();

        for rule_id in &config.disabled_rules {
            if !self.rule_registry.contains(rule_id) {
                warn!("configuration disables unknown rule '{}'", rule_id);
            }
            disabled.insert(rule_id.clone());
        }
        disabled
    }
}

impl Default for SemanticAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
