//! Trait definitions with mockall annotations for testing
//!
//! The orchestrator never calls `tokio::time::sleep` directly; it goes
//! through [`Clock`] so tests can inject a mock (or zero durations) and
//! drive a full race without waiting out the pacing delays.

use std::time::Duration;

/// Clock abstraction for the orchestrator's timed suspension points.
#[mockall::automock]
#[async_trait::async_trait]
pub trait Clock: Send + Sync {
    /// Suspend the current task for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Production clock backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

#[async_trait::async_trait]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}
