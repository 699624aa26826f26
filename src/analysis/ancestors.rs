use log::trace;

use crate::LintError;
use crate::analysis::cancellation::CancellationToken;
use crate::syntax::{SyntaxKind, SyntaxNode};

/// Upward search for the nearest ancestor of a given kind, abandoned as soon as a
/// boundary kind shows up first.
#[derive(Debug, Clone, Copy)]
pub struct AncestorSearch<'k> {
    pub stop: SyntaxKind,
    pub bail_out: &'k [SyntaxKind],
}

impl<'k> AncestorSearch<'k> {
    pub const fn new(stop: SyntaxKind, bail_out: &'k [SyntaxKind]) -> Self {
        Self { stop, bail_out }
    }

    /// Walks `start.parent`, `start.parent.parent`, ... and returns the first node of
    /// the stop kind. Returns `Ok(None)` on a bail-out kind or at the root.
    ///
    /// The token is checked before every step; a cancelled walk returns
    /// `LintError::Cancelled`.
    pub fn upward_until<'a>(
        &self,
        start: SyntaxNode<'a>,
        cancellation: &CancellationToken,
    ) -> Result<Option<SyntaxNode<'a>>, LintError> {
        for node in start.ancestors() {
            cancellation.check()?;
            trace!("ancestor search from {:?} at {:?}", start.kind(), node.kind());

            if self.bail_out.contains(&node.kind()) {
                return Ok(None);
            }
            if node.kind() == self.stop {
                return Ok(Some(node));
            }
        }

        Ok(None)
    }
}
