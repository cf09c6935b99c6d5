//! Polling Lifecycle
//!
//! Time is injected so the loop runs on browser timers in the site and on
//! fakes in tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

/// Something that can wait
#[async_trait(?Send)]
pub trait Sleeper {
    async fn sleep(&self, duration: Duration);
}

/// Cancels the poll loop of the registry it came from
///
/// `Send + Sync`, so it can be moved into view cleanup hooks.
#[derive(Debug, Clone, Default)]
pub struct Disposer(Arc<AtomicBool>);

impl Disposer {
    pub fn dispose(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_disposed(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
