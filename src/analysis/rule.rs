use crate::LintError;
use crate::analysis::context::AnalysisContext;
use crate::analysis::diagnostic::DiagnosticSeverity;
use crate::syntax::{SyntaxKind, SyntaxNode};

/// Static metadata of a rule, shared by every diagnostic it produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    /// Message with positional placeholders `{0}`, `{1}`, ...
    pub message_format: &'static str,
    pub category: &'static str,
    pub severity: DiagnosticSeverity,
    pub enabled_by_default: bool,
}

impl RuleDescriptor {
    /// Substitutes positional placeholders. Placeholders without a matching
    /// argument are left as written.
    pub fn format_message(&self, args: &[&str]) -> String {
        let mut out = String::with_capacity(self.message_format.len());
        let mut rest = self.message_format;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let placeholder = after
                .find('}')
                .and_then(|close| after[..close].parse::<usize>().ok().map(|index| (close, index)));

            match placeholder {
                Some((close, index)) if index < args.len() => {
                    out.push_str(args[index]);
                    rest = &after[close + 1..];
                }
                _ => {
                    out.push('{');
                    rest = after;
                }
            }
        }

        out.push_str(rest);
        out
    }
}

pub trait SemanticRule: Send + Sync {
    fn descriptor(&self) -> &'static RuleDescriptor;

    // Node kinds this rule is dispatched for
    fn kinds(&self) -> &'static [SyntaxKind];

    // Apply the rule to one node. Rules never fail on unresolved symbols, an
    // `Err` only means the analysis of this node was abandoned.
    fn check(&self, ctx: &AnalysisContext, node: SyntaxNode<'_>) -> Result<(), LintError>;

    fn id(&self) -> &'static str {
        self.descriptor().id
    }

    fn description(&self) -> &'static str {
        self.descriptor().title
    }

    fn severity(&self) -> DiagnosticSeverity {
        self.descriptor().severity
    }

    fn enabled_by_default(&self) -> bool {
        self.descriptor().enabled_by_default
    }
}
