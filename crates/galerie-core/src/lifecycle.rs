//! Cancellation handles for component-scoped async work
//!
//! A component creates an [`AbortHandle`] when it mounts and aborts it when
//! it unmounts. Async continuations go through [`AbortHandle::run`], which
//! turns late state updates into no-ops.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct AbortHandle {
    aborted: Arc<AtomicBool>,
}

impl AbortHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn abort(&self) {
        self.aborted.store(true, Ordering::Release);
    }

    pub fn is_aborted(&self) -> bool {
        self.aborted.load(Ordering::Acquire)
    }

    /// Run `f` unless the owner has been torn down
    ///
    /// Returns `None` when the handle was aborted.
    pub fn run<R>(&self, f: impl FnOnce() -> R) -> Option<R> {
        if self.is_aborted() {
            None
        } else {
            Some(f())
        }
    }
}
