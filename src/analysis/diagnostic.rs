use std::fmt;
use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use crate::analysis::rule::RuleDescriptor;
use crate::syntax::SourceSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticSeverity::Info => write!(f, "info"),
            DiagnosticSeverity::Warning => write!(f, "warning"),
            DiagnosticSeverity::Error => write!(f, "error"),
        }
    }
}

/// Where a diagnostic points: file, 1-based line and column, byte offset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub file: String,
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Location {
    pub fn new(file: &str, span: SourceSpan) -> Self {
        Self {
            file: file.to_string(),
            line: span.start.line,
            column: span.start.column,
            offset: span.start.offset,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    #[serde(rename = "id")]
    pub rule_id: String,
    pub severity: DiagnosticSeverity,
    pub message: String,
    pub location: Location,
    #[serde(skip)]
    pub span: SourceSpan,
    #[serde(skip)]
    pub enabled: bool,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({},{}): {} {}: {}",
            self.location.file, self.location.line, self.location.column, self.severity, self.rule_id, self.message
        )
    }
}

/// Sink for diagnostics. Appends may come from several threads at once when
/// compilation units are analyzed in parallel.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, diagnostic: Diagnostic) {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic);
    }

    /// Creates a diagnostic from a rule descriptor, substituting `args` into its
    /// message template
    pub fn report(&self, descriptor: &RuleDescriptor, file: &str, span: SourceSpan, args: &[&str]) {
        self.add(Diagnostic {
            rule_id: descriptor.id.to_string(),
            severity: descriptor.severity,
            message: descriptor.format_message(args),
            location: Location::new(file, span),
            span,
            enabled: descriptor.enabled_by_default,
        });
    }

    pub fn len(&self) -> usize {
        self.diagnostics.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|d| d.severity == DiagnosticSeverity::Error)
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}
