//! Mounted-guard flag for async completions.
//!
//! A page creates one guard on mount. Spawned request tasks check it before
//! writing to signals so a response that lands after navigation is dropped.

#[cfg(test)]
#[path = "mounted_test.rs"]
mod mounted_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct Mounted(Arc<AtomicBool>);

impl Mounted {
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// Create a guard released by the current reactive owner's cleanup.
    #[must_use]
    pub fn install() -> Self {
        let guard = Self::new();
        let released = guard.clone();
        leptos::prelude::on_cleanup(move || released.release());
        guard
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn release(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

impl Default for Mounted {
    fn default() -> Self {
        Self::new()
    }
}
