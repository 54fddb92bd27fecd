//! Virtual-time scheduler driven by host ticks.
//!
//! The host reports wall time through [`Scheduler::advance`]; delayed timers
//! fire once their deadline has been reached and frame callbacks fire on the
//! tick after they were requested.

/// What a fired callback is for. Owners match on this to route the callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKey {
    NotificationExpiry,
    PanelFrame,
    PanelExit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub key: TimerKey,
    pub handle: TimerHandle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingTimer {
    handle: TimerHandle,
    key: TimerKey,
    deadline_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Scheduler {
    now_ms: u64,
    next_handle: u64,
    timers: Vec<PendingTimer>,
    frames: Vec<Fired>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Schedules `key` to fire `delay_ms` after the current time.
    pub fn schedule(&mut self, delay_ms: u64, key: TimerKey) -> TimerHandle {
        let handle = self.next_handle();
        self.timers.push(PendingTimer {
            handle,
            key,
            deadline_ms: self.now_ms.saturating_add(delay_ms),
        });
        handle
    }

    /// Requests a frame-aligned callback on the next tick.
    pub fn request_frame(&mut self, key: TimerKey) -> TimerHandle {
        let handle = self.next_handle();
        self.frames.push(Fired { key, handle });
        handle
    }

    /// Cancels a pending timer or frame callback. Unknown handles are ignored.
    pub fn cancel(&mut self, handle: TimerHandle) {
        self.timers.retain(|timer| timer.handle != handle);
        self.frames.retain(|frame| frame.handle != handle);
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.timers.iter().any(|timer| timer.handle == handle)
            || self.frames.iter().any(|frame| frame.handle == handle)
    }

    /// Advances the clock and drains everything due on this tick.
    ///
    /// Frame callbacks come first, then expired timers in deadline order.
    /// Anything scheduled while the caller processes the result waits for a
    /// later tick.
    pub fn advance(&mut self, now_ms: u64) -> Vec<Fired> {
        self.now_ms = self.now_ms.max(now_ms);

        let mut fired = std::mem::take(&mut self.frames);

        let now = self.now_ms;
        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.timers)
            .into_iter()
            .partition(|timer| timer.deadline_ms <= now);
        self.timers = pending;
        // Stable sort keeps schedule order for equal deadlines.
        due.sort_by_key(|timer| timer.deadline_ms);
        fired.extend(due.into_iter().map(|timer| Fired {
            key: timer.key,
            handle: timer.handle,
        }));
        fired
    }

    fn next_handle(&mut self) -> TimerHandle {
        self.next_handle += 1;
        TimerHandle(self.next_handle)
    }
}
