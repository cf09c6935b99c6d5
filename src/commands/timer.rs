//! Timer Commands

use std::time::Duration;

use async_trait::async_trait;
use wedding_registry::sync::Sleeper;

/// `Sleeper` on browser timers
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSleeper;

#[async_trait(?Send)]
impl Sleeper for BrowserSleeper {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}
