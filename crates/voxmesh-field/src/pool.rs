//! Per-call worker pools.
//!
//! Every extraction and resampling call takes an explicit thread count and
//! runs on its own rayon pool, so nothing about parallelism leaks between
//! calls through global configuration.

use log::trace;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::{FieldError, Result};

/// Resolved worker count for a parallel call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadCount(usize);

impl ThreadCount {
    /// Largest accepted explicit thread count.
    pub const MAX: i64 = 1000;

    /// Clamp a requested thread count.
    ///
    /// Values in `[1, 1000]` are used as given; anything else (zero,
    /// negative, or excessive) falls back to the host's hardware parallelism.
    pub fn resolve(requested: i64) -> Self {
        if (1..=Self::MAX).contains(&requested) {
            Self(requested as usize)
        } else {
            Self(Self::host())
        }
    }

    /// Number of hardware threads on this host (at least 1).
    pub fn host() -> usize {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    }

    /// The resolved count.
    pub fn get(&self) -> usize {
        self.0
    }
}

/// Build a dedicated pool for one call.
pub fn build_pool(requested: i64) -> Result<ThreadPool> {
    let threads = ThreadCount::resolve(requested);
    trace!("building pool: requested={requested} resolved={}", threads.get());
    ThreadPoolBuilder::new()
        .num_threads(threads.get())
        .build()
        .map_err(|e| FieldError::ThreadPool(e.to_string()))
}
