//! Process-lifetime call counter.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counter shared by all request handlers.
///
/// axum may run handlers concurrently, so every update is a single atomic
/// operation; `increment` returns the value produced by this call, never a
/// value observed after another caller's update.
#[derive(Debug, Default)]
pub struct Counter {
    value: AtomicU64,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one and return the new count.
    pub fn increment(&self) -> u64 {
        self.value.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn reset(&self) {
        self.value.store(0, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }
}
