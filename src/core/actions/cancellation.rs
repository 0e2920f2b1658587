use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use thiserror::Error;

/// Pixels evaluated between two polls of a [`CancelToken`] within one row.
pub const CANCEL_CHECK_INTERVAL_PIXELS: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("operation cancelled")]
pub struct Cancelled;

/// Polled by long-running renders between batches of pixels.
pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;

    /// `Err(Cancelled)` once cancellation has been requested.
    #[inline]
    fn check(&self) -> Result<(), Cancelled> {
        if self.is_cancelled() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}

/// Cancels a render when an explicit flag is raised or when a newer render
/// has claimed a later generation.
#[derive(Debug, Clone, Copy)]
pub struct GenerationToken<'a> {
    cancelled: &'a AtomicBool,
    current: &'a AtomicU64,
    generation: u64,
}

impl<'a> GenerationToken<'a> {
    #[must_use]
    pub fn new(cancelled: &'a AtomicBool, current: &'a AtomicU64, generation: u64) -> Self {
        Self {
            cancelled,
            current,
            generation,
        }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True once a later render has started.
    #[must_use]
    pub fn is_superseded(&self) -> bool {
        self.current.load(Ordering::Relaxed) != self.generation
    }
}

impl CancelToken for GenerationToken<'_> {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed) || self.is_superseded()
    }
}
