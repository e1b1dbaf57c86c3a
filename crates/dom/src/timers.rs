//! Virtual-time timer queue.
//!
//! The document owns a millisecond clock that only moves when the host
//! calls [`Document::advance`]. Due timers fire in deadline order;
//! ties fire in scheduling order.

use crate::Document;
use std::time::Duration;

/// Identifier of a scheduled timeout, usable for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub(crate) u64);

pub(crate) type TimerCallback = Box<dyn FnOnce(&mut Document)>;

pub(crate) struct TimerEntry {
    pub(crate) id: TimerId,
    pub(crate) deadline_ms: u64,
    /// Scheduling sequence number; orders timers with equal deadlines.
    pub(crate) seq: u64,
    pub(crate) callback: TimerCallback,
}

#[derive(Default)]
pub(crate) struct TimerQueue {
    pub(crate) now_ms: u64,
    entries: Vec<TimerEntry>,
    next_id: u64,
    next_seq: u64,
}

impl TimerQueue {
    pub(crate) fn schedule(&mut self, delay: Duration, callback: TimerCallback) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(TimerEntry {
            id,
            deadline_ms: self.now_ms.saturating_add(delay.as_millis() as u64),
            seq,
            callback,
        });
        id
    }

    pub(crate) fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Remove and return the next timer due at or before `target_ms`.
    pub(crate) fn pop_due(&mut self, target_ms: u64) -> Option<TimerEntry> {
        let index = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.deadline_ms <= target_ms)
            .min_by_key(|(_, entry)| (entry.deadline_ms, entry.seq))
            .map(|(index, _)| index)?;
        Some(self.entries.remove(index))
    }
}

impl Document {
    /// Current virtual time since document creation.
    pub fn now(&self) -> Duration {
        Duration::from_millis(self.timers.now_ms)
    }

    /// Schedule `callback` to run once `delay` of virtual time has passed.
    pub fn set_timeout(
        &mut self,
        delay: Duration,
        callback: impl FnOnce(&mut Document) + 'static,
    ) -> TimerId {
        self.timers.schedule(delay, Box::new(callback))
    }

    /// Cancel a pending timeout. Returns false if it already fired.
    pub fn cancel_timer(&mut self, id: TimerId) -> bool {
        self.timers.cancel(id)
    }

    /// Advance the virtual clock, firing due timers in deadline order.
    ///
    /// Timers scheduled by a firing callback are themselves fired within
    /// the same call when their deadline falls inside the window.
    pub fn advance(&mut self, delta: Duration) {
        let target_ms = self
            .timers
            .now_ms
            .saturating_add(delta.as_millis() as u64);
        while let Some(entry) = self.timers.pop_due(target_ms) {
            self.timers.now_ms = self.timers.now_ms.max(entry.deadline_ms);
            (entry.callback)(self);
        }
        self.timers.now_ms = target_ms;
    }
}
