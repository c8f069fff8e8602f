//! Named, cancellable timers driven by a virtual millisecond clock.
//!
//! Each game owns one `Scheduler` keyed by its own timer enum. The main loop
//! feeds elapsed time with [`Scheduler::advance`] and then drains fired timers
//! one at a time with [`Scheduler::next_fired`], handling each before asking
//! for the next. Because draining is incremental, a handler that cancels or
//! replaces another timer takes effect before that timer could fire.
//!
//! Scheduling a key that is already pending replaces the old timer, so a
//! superseded one-shot (such as a round reset) can never fire late.

/// One pending timer.
#[derive(Debug, Clone)]
struct Timer<K> {
    key: K,
    due_ms: u64,
    /// `Some(interval)` for repeating timers, `None` for one-shots.
    interval_ms: Option<u64>,
    /// Scheduling order, used to break ties between timers due at the same instant.
    seq: u64,
}

/// A set of named timers.
#[derive(Debug, Clone)]
pub struct Scheduler<K> {
    timers: Vec<Timer<K>>,
    /// Current clock. Set to each timer's due time as it fires.
    now_ms: u64,
    /// How far the clock may run during the current drain.
    horizon_ms: u64,
    next_seq: u64,
}

impl<K: Copy + Eq> Default for Scheduler<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq> Scheduler<K> {
    pub fn new() -> Self {
        Self {
            timers: Vec::new(),
            now_ms: 0,
            horizon_ms: 0,
            next_seq: 0,
        }
    }

    /// Current virtual time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Schedule `key` to fire every `interval_ms`, first firing one interval from now.
    /// Replaces any pending timer with the same key.
    pub fn every(&mut self, key: K, interval_ms: u64) {
        let interval_ms = interval_ms.max(1);
        self.insert(key, self.now_ms + interval_ms, Some(interval_ms));
    }

    /// Schedule `key` to fire once after `delay_ms`. Replaces any pending timer
    /// with the same key.
    pub fn once(&mut self, key: K, delay_ms: u64) {
        self.insert(key, self.now_ms + delay_ms, None);
    }

    fn insert(&mut self, key: K, due_ms: u64, interval_ms: Option<u64>) {
        self.cancel(key);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.push(Timer {
            key,
            due_ms,
            interval_ms,
            seq,
        });
    }

    /// Cancel the timer for `key`. Returns true if one was pending.
    pub fn cancel(&mut self, key: K) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.key != key);
        self.timers.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.timers.clear();
    }

    pub fn is_scheduled(&self, key: K) -> bool {
        self.timers.iter().any(|t| t.key == key)
    }

    /// Milliseconds until `key` next fires, if it is pending.
    pub fn remaining_ms(&self, key: K) -> Option<u64> {
        self.timers
            .iter()
            .find(|t| t.key == key)
            .map(|t| t.due_ms.saturating_sub(self.now_ms))
    }

    /// Number of pending timers.
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Let `dt_ms` more milliseconds elapse. Fired timers are collected with
    /// [`Scheduler::next_fired`].
    pub fn advance(&mut self, dt_ms: u64) {
        self.horizon_ms = self.horizon_ms.max(self.now_ms) + dt_ms;
    }

    /// Pop the earliest timer due within the current horizon.
    ///
    /// Repeating timers are re-armed one interval after their due time;
    /// one-shots are removed. Returns `None` once nothing else is due, at which
    /// point the clock has caught up with the horizon.
    pub fn next_fired(&mut self) -> Option<K> {
        let horizon = self.horizon_ms;
        let index = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= horizon)
            .min_by_key(|(_, t)| (t.due_ms, t.seq))
            .map(|(i, _)| i);

        let Some(index) = index else {
            self.now_ms = self.now_ms.max(horizon);
            return None;
        };

        let timer = &mut self.timers[index];
        self.now_ms = self.now_ms.max(timer.due_ms);
        let key = timer.key;
        match timer.interval_ms {
            Some(interval) => {
                timer.due_ms += interval;
                timer.seq = self.next_seq;
                self.next_seq += 1;
            }
            None => {
                self.timers.swap_remove(index);
            }
        }
        Some(key)
    }

    /// Advance by `dt_ms` and collect every fired key in order. Handy when no
    /// handler needs to touch the scheduler between firings.
    pub fn drain(&mut self, dt_ms: u64) -> Vec<K> {
        self.advance(dt_ms);
        let mut fired = Vec::new();
        while let Some(key) = self.next_fired() {
            fired.push(key);
        }
        fired
    }
}
