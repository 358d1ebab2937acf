//! Countdown before a live capture.
//!
//! A single-shot ticking timer: with the default settings it ticks once per
//! second, reporting the remaining count (2, then 1), then fires completion
//! on the third second. At most one run is active per timer; starting again
//! cancels the previous run.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

pub const DEFAULT_START_COUNT: u32 = 3;
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

pub struct CountdownTimer {
    start_count: u32,
    interval: Duration,
    task: Option<JoinHandle<()>>,
}

impl CountdownTimer {
    pub fn new() -> Self {
        Self::with_settings(DEFAULT_START_COUNT, DEFAULT_TICK_INTERVAL)
    }

    /// Timer with a custom count and tick interval. The count is the number
    /// of intervals before completion fires.
    pub fn with_settings(start_count: u32, interval: Duration) -> Self {
        Self {
            start_count,
            interval,
            task: None,
        }
    }

    /// Begin ticking. `on_tick` receives the remaining count after each
    /// elapsed interval (for count 3: values 2, then 1); `on_complete` fires
    /// exactly once after the final interval. Any prior run is cancelled
    /// first.
    pub fn start<T, C>(&mut self, mut on_tick: T, on_complete: C)
    where
        T: FnMut(u32) + Send + 'static,
        C: FnOnce() + Send + 'static,
    {
        self.cancel();

        let count = self.start_count;
        let interval = self.interval;
        self.task = Some(tokio::spawn(async move {
            for remaining in (1..count).rev() {
                tokio::time::sleep(interval).await;
                on_tick(remaining);
            }
            tokio::time::sleep(interval).await;
            on_complete();
        }));
    }

    /// Stop ticking before completion. `on_complete` is never invoked once a
    /// run is cancelled. Idempotent.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("Countdown cancelled");
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().map(|t| !t.is_finished()).unwrap_or(false)
    }

    pub fn start_count(&self) -> u32 {
        self.start_count
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::{Arc, Mutex};

    const TEST_INTERVAL: Duration = Duration::from_millis(20);

    fn recording_callbacks() -> (
        Arc<Mutex<Vec<u32>>>,
        Arc<AtomicU32>,
        impl FnMut(u32) + Send + 'static,
        impl FnOnce() + Send + 'static,
    ) {
        let ticks = Arc::new(Mutex::new(Vec::new()));
        let completions = Arc::new(AtomicU32::new(0));
        let ticks_in = ticks.clone();
        let completions_in = completions.clone();
        (
            ticks,
            completions,
            move |remaining| ticks_in.lock().unwrap().push(remaining),
            move || {
                completions_in.fetch_add(1, Ordering::SeqCst);
            },
        )
    }

    #[test]
    fn default_settings_match_booth_flow() {
        let timer = CountdownTimer::new();
        assert_eq!(timer.start_count(), 3);
        assert_eq!(timer.interval(), Duration::from_secs(1));
    }

    #[tokio::test]
    async fn ticks_down_then_completes_once() {
        let (ticks, completions, on_tick, on_complete) = recording_callbacks();
        let mut timer = CountdownTimer::with_settings(3, TEST_INTERVAL);

        timer.start(on_tick, on_complete);
        tokio::time::sleep(TEST_INTERVAL * 6).await;

        assert_eq!(*ticks.lock().unwrap(), vec![2, 1]);
        assert_eq!(completions.load(Ordering::SeqCst), 1);
        assert!(!timer.is_running());
    }

    #[tokio::test]
    async fn cancel_before_first_tick_suppresses_everything() {
        let (ticks, completions, on_tick, on_complete) = recording_callbacks();
        let mut timer = CountdownTimer::with_settings(3, TEST_INTERVAL);

        timer.start(on_tick, on_complete);
        timer.cancel();
        tokio::time::sleep(TEST_INTERVAL * 6).await;

        assert!(ticks.lock().unwrap().is_empty());
        assert_eq!(completions.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn cancel_is_idempotent() {
        let (_, completions, on_tick, on_complete) = recording_callbacks();
        let mut timer = CountdownTimer::with_settings(3, TEST_INTERVAL);

        timer.start(on_tick, on_complete);
        timer.cancel();
        timer.cancel();
        tokio::time::sleep(TEST_INTERVAL * 6).await;

        assert_eq!(completions.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn restart_cancels_prior_run() {
        let (_, first_completions, first_tick, first_complete) = recording_callbacks();
        let (ticks, completions, on_tick, on_complete) = recording_callbacks();
        let mut timer = CountdownTimer::with_settings(3, TEST_INTERVAL);

        timer.start(first_tick, first_complete);
        // Restart immediately; only the second run may complete.
        timer.start(on_tick, on_complete);
        tokio::time::sleep(TEST_INTERVAL * 6).await;

        assert_eq!(first_completions.load(Ordering::SeqCst), 0);
        assert_eq!(*ticks.lock().unwrap(), vec![2, 1]);
        assert_eq!(completions.load(Ordering::SeqCst), 1);
    }
}
