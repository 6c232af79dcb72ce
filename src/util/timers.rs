//! Timer hosts for the comparison slider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ManualTimers` is a virtual clock: nothing elapses until `advance` is
//! called, which makes it the host for headless runs and tests.
//! `BrowserTimers` backs the same seam with `gloo_timers` callbacks and is
//! only available with the `csr` feature.

#[cfg(test)]
#[path = "timers_test.rs"]
mod timers_test;

use crate::state::slider::{SliderSession, SliderTimer, Timers};

/// A timer armed on a [`ManualTimers`] clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArmedTimer {
    pub key: SliderTimer,
    pub due_ms: u64,
    pub period_ms: Option<u32>,
    seq: u64,
}

/// Deterministic virtual-time timer host.
#[derive(Clone, Debug, Default)]
pub struct ManualTimers {
    now_ms: u64,
    next_seq: u64,
    armed: Vec<ArmedTimer>,
}

impl ManualTimers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn armed(&self) -> &[ArmedTimer] {
        &self.armed
    }

    pub fn is_armed(&self, key: SliderTimer) -> bool {
        self.armed.iter().any(|t| t.key == key)
    }

    pub fn count(&self, key: SliderTimer) -> usize {
        self.armed.iter().filter(|t| t.key == key).count()
    }

    /// Milliseconds until `key` next fires.
    pub fn due_in(&self, key: SliderTimer) -> Option<u64> {
        self.armed
            .iter()
            .find(|t| t.key == key)
            .map(|t| t.due_ms.saturating_sub(self.now_ms))
    }

    /// Pop the earliest timer due at or before `until_ms`, moving the clock
    /// to its deadline. Repeating timers are re-armed one period later.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<SliderTimer> {
        let (index, timer) = self
            .armed
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= until_ms)
            .min_by_key(|(_, t)| (t.due_ms, t.seq))?;

        self.now_ms = self.now_ms.max(timer.due_ms);
        match timer.period_ms {
            Some(period) => {
                let seq = self.bump_seq();
                let slot = &mut self.armed[index];
                slot.due_ms = timer.due_ms + u64::from(period.max(1));
                slot.seq = seq;
            }
            None => {
                self.armed.remove(index);
            }
        }
        Some(timer.key)
    }

    fn settle(&mut self, until_ms: u64) {
        self.now_ms = self.now_ms.max(until_ms);
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    fn arm(&mut self, key: SliderTimer, delay_ms: u32, period_ms: Option<u32>) {
        self.cancel(key);
        let seq = self.bump_seq();
        self.armed.push(ArmedTimer { key, due_ms: self.now_ms + u64::from(delay_ms), period_ms, seq });
    }
}

impl Timers for ManualTimers {
    fn every(&mut self, key: SliderTimer, period_ms: u32) {
        let period = period_ms.max(1);
        self.arm(key, period, Some(period));
    }

    fn after(&mut self, key: SliderTimer, delay_ms: u32) {
        self.arm(key, delay_ms, None);
    }

    fn cancel(&mut self, key: SliderTimer) {
        self.armed.retain(|t| t.key != key);
    }
}

impl SliderSession<ManualTimers> {
    /// Run the virtual clock forward, firing every timer that falls due.
    pub fn advance(&mut self, ms: u64) {
        let until = self.timers().now_ms() + ms;
        while let Some(key) = self.timers_mut().pop_due(until) {
            self.fire(key);
        }
        self.timers_mut().settle(until);
    }
}

#[cfg(feature = "csr")]
pub use browser::BrowserTimers;

#[cfg(feature = "csr")]
mod browser {
    use std::collections::HashMap;
    use std::rc::Rc;

    use gloo_timers::callback::{Interval, Timeout};

    use crate::state::slider::{SliderTimer, Timers};

    /// `gloo_timers` host. Elapsed timers are forwarded to `dispatch`.
    pub struct BrowserTimers {
        dispatch: Rc<dyn Fn(SliderTimer)>,
        intervals: HashMap<SliderTimer, Interval>,
        timeouts: HashMap<SliderTimer, Timeout>,
    }

    impl BrowserTimers {
        pub fn new(dispatch: impl Fn(SliderTimer) + 'static) -> Self {
            Self { dispatch: Rc::new(dispatch), intervals: HashMap::new(), timeouts: HashMap::new() }
        }
    }

    impl std::fmt::Debug for BrowserTimers {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("BrowserTimers")
                .field("intervals", &self.intervals.keys().collect::<Vec<_>>())
                .field("timeouts", &self.timeouts.keys().collect::<Vec<_>>())
                .finish_non_exhaustive()
        }
    }

    impl Timers for BrowserTimers {
        fn every(&mut self, key: SliderTimer, period_ms: u32) {
            self.cancel(key);
            let dispatch = Rc::clone(&self.dispatch);
            self.intervals
                .insert(key, Interval::new(period_ms, move || dispatch(key)));
        }

        fn after(&mut self, key: SliderTimer, delay_ms: u32) {
            self.cancel(key);
            let dispatch = Rc::clone(&self.dispatch);
            self.timeouts
                .insert(key, Timeout::new(delay_ms, move || dispatch(key)));
        }

        fn cancel(&mut self, key: SliderTimer) {
            // Dropping a gloo handle clears the underlying browser timer.
            self.intervals.remove(&key);
            self.timeouts.remove(&key);
        }
    }
}
