//! Live hosts for the animated renderers.
//!
//! A driver owns the mutable stage state behind a mutex plus the tickers that
//! mutate it, so stage changes and teardown are race-free: `set_stage` resets
//! under the lock (visible to the next tick that acquires it), and `unmount`
//! cancels every ticker synchronously before returning. The compact renderer
//! has no timers and therefore no driver.

use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::Duration,
};

use crate::{
    core::StageIndex,
    scene::{VerticalScene, WideScene},
    ticker::Ticker,
    vertical::{STREAM_PERIOD_MS, VerticalStage},
    wide::{PROGRESS_PERIOD_MS, TRAIL_PERIOD_MS, WideStage},
};

fn lock<T>(state: &Mutex<T>) -> MutexGuard<'_, T> {
    // Tick transitions never panic while holding the lock.
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub struct WideDriver {
    state: Arc<Mutex<WideStage>>,
    tickers: Vec<Ticker>,
}

impl WideDriver {
    /// Mount the wide renderer at `stage` and start its two tickers.
    pub fn mount(stage: StageIndex) -> Self {
        let state = Arc::new(Mutex::new(WideStage::new(stage)));
        tracing::debug!(stage = stage.index(), "mounting wide renderer");

        let progress_state = Arc::clone(&state);
        let progress = Ticker::spawn(
            "wide-progress",
            Duration::from_millis(PROGRESS_PERIOD_MS),
            move || lock(&progress_state).progress_tick(),
        );

        let trail_state = Arc::clone(&state);
        let trail = Ticker::spawn(
            "wide-trail",
            Duration::from_millis(TRAIL_PERIOD_MS),
            move || lock(&trail_state).trail_tick(),
        );

        Self {
            state,
            tickers: vec![progress, trail],
        }
    }

    /// Push a navigation change. Resets all per-stage animation state when the
    /// stage actually changes; the reset happens under the state lock, so it
    /// is visible to every tick that fires afterwards.
    pub fn set_stage(&self, stage: StageIndex) {
        lock(&self.state).set_stage(stage);
    }

    pub fn snapshot(&self) -> WideScene {
        lock(&self.state).scene()
    }

    /// Stop both tickers and wait for them. Idempotent.
    pub fn unmount(&mut self) {
        for t in &mut self.tickers {
            t.cancel();
        }
        tracing::debug!("wide renderer unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.tickers.iter().any(|t| !t.is_cancelled())
    }

    #[doc(hidden)]
    pub fn state_handle(&self) -> Arc<Mutex<WideStage>> {
        Arc::clone(&self.state)
    }
}

impl Drop for WideDriver {
    fn drop(&mut self) {
        self.unmount();
    }
}

pub struct VerticalDriver {
    state: Arc<Mutex<VerticalStage>>,
    ticker: Option<Ticker>,
}

impl VerticalDriver {
    pub fn mount(stage: StageIndex) -> Self {
        let state = Arc::new(Mutex::new(VerticalStage::new(stage)));
        tracing::debug!(stage = stage.index(), "mounting vertical renderer");

        let tick_state = Arc::clone(&state);
        let ticker = Ticker::spawn(
            "vertical-stream",
            Duration::from_millis(STREAM_PERIOD_MS),
            move || lock(&tick_state).tick(),
        );

        Self {
            state,
            ticker: Some(ticker),
        }
    }

    pub fn set_stage(&self, stage: StageIndex) {
        lock(&self.state).set_stage(stage);
    }

    pub fn snapshot(&self) -> VerticalScene {
        lock(&self.state).scene()
    }

    pub fn unmount(&mut self) {
        if let Some(t) = &mut self.ticker {
            t.cancel();
        }
        tracing::debug!("vertical renderer unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.ticker.as_ref().is_some_and(|t| !t.is_cancelled())
    }

    #[doc(hidden)]
    pub fn state_handle(&self) -> Arc<Mutex<VerticalStage>> {
        Arc::clone(&self.state)
    }
}

impl Drop for VerticalDriver {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn wide_driver_animates_and_resets() {
        let driver = WideDriver::mount(StageIndex::new(0));
        thread::sleep(Duration::from_millis(200));
        let scene = driver.snapshot();
        assert!(scene.segments[0].fill > 0.0);
        assert!(!scene.trail.is_empty());

        driver.set_stage(StageIndex::new(1));
        let scene = driver.snapshot();
        // The reset is observed immediately after set_stage returns; at most
        // one fresh tick can have landed in between.
        assert!(scene.segments[1].fill <= 0.05);
    }

    #[test]
    fn unmount_is_idempotent_and_freezes_state() {
        let mut driver = WideDriver::mount(StageIndex::new(2));
        thread::sleep(Duration::from_millis(120));
        driver.unmount();
        assert!(!driver.is_mounted());

        let frozen = driver.snapshot();
        thread::sleep(Duration::from_millis(120));
        assert_eq!(driver.snapshot(), frozen);

        driver.unmount();
        assert!(!driver.is_mounted());
    }

    #[test]
    fn vertical_driver_streams_and_tears_down() {
        let mut driver = VerticalDriver::mount(StageIndex::new(1));
        thread::sleep(Duration::from_millis(150));
        let phase = { driver.snapshot().packet_offsets[0] };
        assert!(phase > 0.0);

        driver.unmount();
        let frozen = driver.snapshot();
        thread::sleep(Duration::from_millis(100));
        assert_eq!(driver.snapshot(), frozen);
    }
}
