use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::LintError;

/// Host-controlled cancellation flag. Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation of ongoing work.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Clear any pending cancellation request so new work can proceed.
    pub fn clear(&self) {
        self.cancelled.store(false, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    pub fn check(&self) -> Result<(), LintError> {
        if self.is_cancelled() {
            Err(LintError::Cancelled)
        } else {
            Ok(())
        }
    }
}
