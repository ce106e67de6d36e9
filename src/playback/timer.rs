//! Schedule-callback-after-delay primitive used by the scheduler.
//!
//! Timers never call back on their own: the owner polls
//! [`Timer::take_expired`] and hands the id to the scheduler, which keeps
//! everything on one thread.

use std::time::{Duration, Instant};

/// Handle for one scheduled tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

pub trait Timer {
    fn schedule(&mut self, delay: Duration) -> TimerId;

    /// Cancelling an id that already fired or was already cancelled is a
    /// no-op.
    fn cancel(&mut self, id: TimerId);

    /// Removes and returns a tick whose deadline has passed.
    fn take_expired(&mut self) -> Option<TimerId>;

    /// Time until the earliest pending tick, `None` when idle.
    fn time_until_due(&self) -> Option<Duration>;

    fn pending(&self) -> usize;
}

#[derive(Debug)]
struct Queue<T> {
    next_id: u64,
    entries: Vec<(TimerId, T)>,
}

impl<T: Copy + Ord> Queue<T> {
    fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    fn push(&mut self, due: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, due));
        id
    }

    fn remove(&mut self, id: TimerId) {
        self.entries.retain(|(entry, _)| *entry != id);
    }

    fn earliest(&self) -> Option<(TimerId, T)> {
        self.entries.iter().copied().min_by_key(|(_, due)| *due)
    }

    fn pop_due(&mut self, now: T) -> Option<TimerId> {
        let (id, due) = self.earliest()?;
        if due > now {
            return None;
        }
        self.remove(id);
        Some(id)
    }
}

/// Wall-clock timer backed by [`Instant`].
#[derive(Debug)]
pub struct DeadlineTimer {
    queue: Queue<Instant>,
}

impl DeadlineTimer {
    pub fn new() -> Self {
        Self {
            queue: Queue::new(),
        }
    }
}

impl Default for DeadlineTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer for DeadlineTimer {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        self.queue.push(Instant::now() + delay)
    }

    fn cancel(&mut self, id: TimerId) {
        self.queue.remove(id);
    }

    fn take_expired(&mut self) -> Option<TimerId> {
        self.queue.pop_due(Instant::now())
    }

    fn time_until_due(&self) -> Option<Duration> {
        self.queue
            .earliest()
            .map(|(_, due)| due.saturating_duration_since(Instant::now()))
    }

    fn pending(&self) -> usize {
        self.queue.entries.len()
    }
}

/// Virtual-clock timer: time only moves when [`ManualTimer::advance`] is
/// called. Records every requested delay.
#[derive(Debug)]
pub struct ManualTimer {
    now: Duration,
    queue: Queue<Duration>,
    scheduled: Vec<Duration>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            queue: Queue::new(),
            scheduled: Vec::new(),
        }
    }

    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }

    /// Jumps the clock to the earliest pending deadline.
    pub fn advance_to_next(&mut self) -> bool {
        match self.queue.earliest() {
            Some((_, due)) => {
                self.now = self.now.max(due);
                true
            }
            None => false,
        }
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Every delay passed to `schedule`, oldest first.
    pub fn scheduled_delays(&self) -> &[Duration] {
        &self.scheduled
    }

    pub fn last_delay(&self) -> Option<Duration> {
        self.scheduled.last().copied()
    }
}

impl Default for ManualTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer for ManualTimer {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        self.scheduled.push(delay);
        self.queue.push(self.now + delay)
    }

    fn cancel(&mut self, id: TimerId) {
        self.queue.remove(id);
    }

    fn take_expired(&mut self) -> Option<TimerId> {
        self.queue.pop_due(self.now)
    }

    fn time_until_due(&self) -> Option<Duration> {
        self.queue
            .earliest()
            .map(|(_, due)| due.saturating_sub(self.now))
    }

    fn pending(&self) -> usize {
        self.queue.entries.len()
    }
}
