//! Recurring reading refresh: the timer that stands in for a live feed.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::info;

use crate::Controller;

// ---

/// Handle to the background refresh schedule.
///
/// The schedule must not outlive the session: `main` aborts it on shutdown,
/// and dropping the handle aborts it as a backstop.
pub struct RefreshTask {
    handle: JoinHandle<()>,
}

impl RefreshTask {
    /// Spawn the refresh loop, ticking the controller on a fixed period.
    ///
    /// The controller seeds its own initial reading, so the interval's
    /// immediate first fire is skipped and the first refresh lands one full
    /// period after startup.
    pub fn spawn(controller: Controller, period: Duration) -> Self {
        // ---
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.tick().await;
            loop {
                interval.tick().await;
                controller.tick().await;
            }
        });
        info!("Reading refresh scheduled every {:?}", period);
        Self { handle }
    }

    /// Cancel the schedule.
    pub fn abort(&self) {
        self.handle.abort();
    }
}

impl Drop for RefreshTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use crate::{Profile, ReadingSource, SourceInfo, SourceStatus, WaterData};
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    /// Writes a call counter into `tds` so the tests can count refreshes.
    struct CountingSource {
        calls: AtomicU32,
    }

    impl ReadingSource for CountingSource {
        fn generate(&self, source_id: &str) -> WaterData {
            // ---
            let call = self.calls.fetch_add(1, Ordering::Relaxed) + 1;
            WaterData {
                tds: call as f32,
                turbidity: 0.0,
                temperature: 20.0,
                estimated_ph: 7.0,
                health_score: 100.0,
                timestamp: source_id.to_string(),
            }
        }
    }

    fn counting_controller() -> Controller {
        // ---
        let source = SourceInfo {
            id: "overhead-tank".to_string(),
            name: "Overhead Tank".to_string(),
            device_id: "AQ-OHT-001".to_string(),
            location: "Test Bench".to_string(),
            usage_type: "Testing".to_string(),
            status: SourceStatus::Online,
            signal_strength: 90,
        };
        let profile = Profile {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
        };
        let reader = Arc::new(CountingSource { calls: AtomicU32::new(0) });
        Controller::new(vec![source], vec![], profile, reader).unwrap()
    }

    async fn settle() {
        // Give the spawned loop a chance to observe the advanced clock
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_fires_on_schedule() {
        // ---
        let controller = counting_controller();
        let initial = controller.snapshot().await.current_reading.tds;

        let task = RefreshTask::spawn(controller.clone(), Duration::from_secs(5));
        settle().await;

        tokio::time::advance(Duration::from_secs(5)).await;
        settle().await;

        let refreshed = controller.snapshot().await.current_reading.tds;
        assert!(refreshed > initial, "no refresh after one period");

        task.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_abort_stops_the_schedule() {
        // ---
        let controller = counting_controller();
        let task = RefreshTask::spawn(controller.clone(), Duration::from_secs(5));
        settle().await;

        task.abort();
        settle().await;
        let at_abort = controller.snapshot().await.current_reading.tds;

        tokio::time::advance(Duration::from_secs(30)).await;
        settle().await;

        let after = controller.snapshot().await.current_reading.tds;
        assert_eq!(after, at_abort, "aborted schedule kept ticking");
    }
}
