//! The single pending tick owned by a session.
//!
//! A timer here is plain data: an id and a due instant. Nothing runs on its
//! own. The event loop sleeps until [`TimerSlot::deadline`] and then asks the
//! scheduler to poll; a cancelled timer is simply gone from the slot, so it
//! cannot fire late.

use std::time::Instant;

/// Identifies one armed tick, unique for the life of a scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(pub u64);

/// Hands out increasing [`TimerId`]s.
#[derive(Debug, Default)]
pub struct TimerIds {
    next: u64,
}

impl TimerIds {
    pub fn next_id(&mut self) -> TimerId {
        self.next += 1;
        TimerId(self.next)
    }
}

/// A scheduled tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTimer {
    pub id: TimerId,
    pub due: Instant,
}

/// Holds at most one [`PendingTimer`].
#[derive(Debug, Default)]
pub struct TimerSlot {
    pending: Option<PendingTimer>,
}

impl TimerSlot {
    /// Arm the slot. Arming over a pending timer is a programming error: it
    /// panics in debug builds and is logged (replacing the old timer) in
    /// release builds.
    pub fn arm(&mut self, id: TimerId, due: Instant) {
        debug_assert!(
            self.pending.is_none(),
            "timer {id:?} armed while {:?} is still pending",
            self.pending
        );
        if let Some(stale) = self.pending.replace(PendingTimer { id, due }) {
            tracing::error!(
                stale = stale.id.0,
                armed = id.0,
                "double dispatch prevented: replaced a pending timer"
            );
        }
    }

    /// Drop the pending timer, if any. It will never be returned by
    /// [`take_due`](Self::take_due).
    pub fn cancel(&mut self) -> Option<PendingTimer> {
        self.pending.take()
    }

    /// Remove and return the pending timer if it is due at `now`.
    pub fn take_due(&mut self, now: Instant) -> Option<PendingTimer> {
        match self.pending {
            Some(timer) if timer.due <= now => self.pending.take(),
            _ => None,
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|timer| timer.due)
    }

    pub fn pending(&self) -> Option<PendingTimer> {
        self.pending
    }
}
