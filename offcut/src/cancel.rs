use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Polled by the scanner to find out whether it should stop early.
/// Only consulted at row boundaries, column boundaries and after yield points.
pub trait AbortSignal {
    fn is_aborted(&self) -> bool;
}

/// Cloneable cancellation flag. All clones share the same state.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl AbortSignal for CancellationToken {
    fn is_aborted(&self) -> bool {
        self.is_cancelled()
    }
}

impl<F> AbortSignal for F
where
    F: Fn() -> bool,
{
    fn is_aborted(&self) -> bool {
        self()
    }
}

/// Signal which never aborts
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverAbort;

impl AbortSignal for NeverAbort {
    fn is_aborted(&self) -> bool {
        false
    }
}
