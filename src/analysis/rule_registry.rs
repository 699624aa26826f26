use std::collections::HashMap;

use crate::analysis::rule::SemanticRule;
use crate::syntax::SyntaxKind;

/// Rules keyed by id, plus the node kind -> rules index used during dispatch.
/// Filled while the analyzer is constructed and read-only afterwards.
pub struct RuleRegistry {
    rules: Vec<Box<dyn SemanticRule>>,
    by_id: HashMap<&'static str, usize>,
    by_kind: HashMap<SyntaxKind, Vec<usize>>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            by_id: HashMap::new(),
            by_kind: HashMap::new(),
        }
    }

    /// Registering a rule with an id that is already present replaces it
    pub fn register<R: SemanticRule + 'static>(&mut self, rule: R) {
        let rule_id = rule.id();
        let index = match self.by_id.get(rule_id) {
            Some(&index) => {
                for subscribers in self.by_kind.values_mut() {
                    subscribers.retain(|&i| i != index);
                }
                self.rules[index] = Box::new(rule);
                index
            }
            None => {
                self.rules.push(Box::new(rule));
                self.rules.len() - 1
            }
        };

        self.by_id.insert(rule_id, index);
        for &kind in self.rules[index].kinds() {
            self.by_kind.entry(kind).or_default().push(index);
        }
    }

    pub fn get_rule(&self, rule_id: &str) -> Option<&dyn SemanticRule> {
        self.by_id.get(rule_id).map(|&i| self.rules[i].as_ref())
    }

    pub fn contains(&self, rule_id: &str) -> bool {
        self.by_id.contains_key(rule_id)
    }

    /// All rules in registration order
    pub fn get_all_rules(&self) -> Vec<&dyn SemanticRule> {
        self.rules.iter().map(|r| r.as_ref()).collect()
    }

    pub fn rules_for(&self, kind: SyntaxKind) -> impl Iterator<Item = &dyn SemanticRule> {
        self.by_kind
            .get(&kind)
            .into_iter()
            .flatten()
            .map(|&i| self.rules[i].as_ref())
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
