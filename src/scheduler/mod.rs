//! Animation scheduler: plays an [`EventStream`] onto a presentation surface
//! one event per tick.
//!
//! Producers emit their whole history instantly; the display must reveal it
//! at a fixed cadence; the user may pause, restart or switch away at any
//! moment. The scheduler reconciles the three by pulling exactly one event
//! per tick and re-arming a single timer after each dispatch.
//!
//! # Timing
//!
//! Every operation takes the current [`Instant`]. The scheduler never sleeps
//! or spawns anything; the caller waits until [`Scheduler::next_deadline`]
//! and then calls [`Scheduler::poll`]. This keeps "at most one pending timer"
//! a property of the data: the session owns one [`TimerSlot`], and disposing
//! the session drops the slot with it.
//!
//! # Step loop
//!
//! On each due tick:
//! 1. pull the next event;
//! 2. at end of stream, clear the last event's non-persistent tints, log
//!    `Visualization complete! Total steps: N`, mark the session complete and
//!    return [`TickOutcome::Completed`];
//! 3. otherwise clear the previous event's tints (persistent highlights
//!    are restored to their held tint), apply the event, log it, and arm the
//!    next tick one cadence from now unless paused.
//!
//! A malformed event loses its visual effect, gets a diagnostic log line, and
//! playback carries on.

mod log;
mod timer;

pub use log::OperationLog;
pub use timer::{PendingTimer, TimerId, TimerIds, TimerSlot};

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use crate::error::DispatchError;
use crate::events::{AlgorithmEvent, Tint};
use crate::producers::{EventSource, EventStream};
use crate::surface::PresentationSurface;

/// Interval between dispatches unless configured otherwise.
pub const DEFAULT_CADENCE: Duration = Duration::from_millis(1000);

/// What a call to [`Scheduler::poll`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing was due (or there is no live session).
    Idle,
    /// One event was dispatched; `step` is its 1-based step number.
    Dispatched { step: usize },
    /// The stream ran out; the session is now complete.
    Completed { total_steps: usize },
}

/// Live scheduling state for one playback.
pub struct AnimationSession {
    source: EventSource,
    stream: EventStream,
    cadence: Duration,
    step_index: usize,
    timer: TimerSlot,
    /// Indices held past their step, with the tint to restore them to
    persistent: BTreeMap<usize, Tint>,
    last_dispatched: Option<AlgorithmEvent>,
    paused: bool,
    complete: bool,
    log: OperationLog,
}

impl AnimationSession {
    fn new(source: EventSource, cadence: Duration) -> Self {
        let stream = source.stream();
        Self {
            source,
            stream,
            cadence,
            step_index: 0,
            timer: TimerSlot::default(),
            persistent: BTreeMap::new(),
            last_dispatched: None,
            paused: false,
            complete: false,
            log: OperationLog::new(),
        }
    }

    fn arm(&mut self, ids: &mut TimerIds, now: Instant) {
        self.timer.arm(ids.next_id(), now + self.cadence);
    }

    fn dispatch_next<S: PresentationSurface>(
        &mut self,
        surface: &mut S,
        ids: &mut TimerIds,
        now: Instant,
    ) -> TickOutcome {
        let Some(event) = self.stream.next() else {
            self.finish(surface);
            return TickOutcome::Completed {
                total_steps: self.step_index,
            };
        };

        self.clear_previous(surface);
        let step = self.step_index + 1;

        let line = match event
            .validate(surface.len())
            .map_err(DispatchError::from)
            .and_then(|()| self.apply(surface, &event, step))
        {
            Ok(line) => {
                tracing::debug!(step, kind = %event.kind(), "dispatched");
                self.last_dispatched = Some(event);
                line
            }
            Err(err) => {
                tracing::warn!(
                    step,
                    code = err.error_code(),
                    error = %err,
                    "dropped visual effect of malformed event"
                );
                let line = log::skipped_line(step, &event, &err);
                self.last_dispatched = None;
                line
            }
        };

        self.log.push(line);
        self.step_index = step;

        if !self.paused {
            self.arm(ids, now);
        }
        TickOutcome::Dispatched { step }
    }

    /// Apply one validated event to the surface and describe it.
    fn apply<S: PresentationSurface>(
        &mut self,
        surface: &mut S,
        event: &AlgorithmEvent,
        step: usize,
    ) -> Result<String, DispatchError> {
        match event {
            AlgorithmEvent::Swap { first, second } => {
                let (first, second) = (*first, *second);
                let first_value = surface.value(first)?;
                let second_value = surface.value(second)?;
                surface.set_value(first, second_value)?;
                surface.set_value(second, first_value)?;
                surface.set_tint(first, Some(Tint::SwapSource))?;
                surface.set_tint(second, Some(Tint::SwapTarget))?;
                Ok(log::swap_line(
                    step,
                    (first, first_value),
                    (second, second_value),
                ))
            }
            AlgorithmEvent::Compare { indices } => {
                let values = indices
                    .iter()
                    .map(|&index| surface.value(index))
                    .collect::<Result<Vec<_>, _>>()?;
                for &index in indices {
                    surface.set_tint(index, Some(Tint::Compare))?;
                }
                Ok(log::compare_line(step, &values))
            }
            AlgorithmEvent::Highlight {
                indices,
                color,
                persist,
            } => {
                let tint = color.unwrap_or(Tint::Highlight);
                for &index in indices {
                    surface.set_tint(index, Some(tint))?;
                }
                if *persist {
                    self.persistent
                        .extend(indices.iter().map(|&index| (index, tint)));
                }
                Ok(log::highlight_line(step, indices))
            }
            AlgorithmEvent::Clear { indices } => {
                if indices.is_empty() {
                    for index in std::mem::take(&mut self.persistent).into_keys() {
                        surface.set_tint(index, None)?;
                    }
                } else {
                    for &index in indices {
                        surface.set_tint(index, None)?;
                        self.persistent.remove(&index);
                    }
                }
                Ok(log::clear_line(step, indices))
            }
        }
    }

    /// Undo the tints of the last dispatched event. Persistent indices get
    /// their held tint back, since a later event may have painted over it.
    fn clear_previous<S: PresentationSurface>(&mut self, surface: &mut S) {
        let Some(previous) = self.last_dispatched.take() else {
            return;
        };
        for index in previous.indices() {
            let held = self.persistent.get(&index).copied();
            if let Err(err) = surface.set_tint(index, held) {
                tracing::debug!(error = %err, "could not clear previous tint");
            }
        }
    }

    fn finish<S: PresentationSurface>(&mut self, surface: &mut S) {
        self.clear_previous(surface);
        self.log.push(log::completion_line(self.step_index));
        self.complete = true;
        tracing::info!(
            algorithm = self.source.name(),
            total_steps = self.step_index,
            "visualization complete"
        );
    }
}

/// Drives at most one [`AnimationSession`] onto a surface it owns.
///
/// Owning the surface makes the scheduler its only writer; the UI reads it
/// through [`Scheduler::surface`].
pub struct Scheduler<S: PresentationSurface> {
    surface: S,
    session: Option<AnimationSession>,
    ids: TimerIds,
}

impl<S: PresentationSurface> Scheduler<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            session: None,
            ids: TimerIds::default(),
        }
    }

    /// Begin playing `source` at `cadence`, replacing any live session.
    ///
    /// The old session's pending tick is cancelled before anything else
    /// happens, the surface is resynced to the source's input (dropping every
    /// tint), and the first event is scheduled one cadence from `now`.
    pub fn start(&mut self, source: EventSource, cadence: Duration, now: Instant) {
        self.dispose();
        self.surface.resync(source.input());

        tracing::info!(
            algorithm = source.name(),
            elements = source.input().len(),
            cadence_ms = cadence.as_millis() as u64,
            "session started"
        );

        let mut session = AnimationSession::new(source, cadence);
        session.arm(&mut self.ids, now);
        self.session = Some(session);
    }

    /// Stop dispatching without losing progress. Idempotent; a no-op when
    /// there is no session or it is already complete.
    pub fn pause(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.paused || session.complete {
            return;
        }
        session.timer.cancel();
        session.paused = true;
        tracing::debug!(step = session.step_index, "paused");
    }

    /// Re-arm dispatch of the next undispatched event one cadence from `now`.
    /// A no-op unless the session is paused and not complete.
    pub fn resume(&mut self, now: Instant) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if !session.paused || session.complete {
            return;
        }
        session.paused = false;
        session.arm(&mut self.ids, now);
        tracing::debug!(step = session.step_index, "resumed");
    }

    /// Start over with a fresh stream from the same producer and input.
    pub fn restart(&mut self, now: Instant) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let source = session.source.clone();
        let cadence = session.cadence;
        self.start(source, cadence, now);
    }

    /// Cancel pending work and drop the session for good.
    pub fn dispose(&mut self) {
        if let Some(mut session) = self.session.take() {
            let cancelled = session.timer.cancel();
            tracing::debug!(
                algorithm = session.source.name(),
                cancelled_timer = cancelled.map(|timer| timer.id.0),
                "session disposed"
            );
        }
    }

    /// [`dispose`](Self::dispose) and show `values` untinted.
    pub fn reset(&mut self, values: &[i64]) {
        self.dispose();
        self.surface.resync(values);
    }

    /// Dispatch one event if the pending tick is due at `now`.
    pub fn poll(&mut self, now: Instant) -> TickOutcome {
        let Some(session) = self.session.as_mut() else {
            return TickOutcome::Idle;
        };
        let Some(timer) = session.timer.take_due(now) else {
            return TickOutcome::Idle;
        };
        tracing::trace!(timer = timer.id.0, "tick");
        session.dispatch_next(&mut self.surface, &mut self.ids, now)
    }

    /// When the caller should next [`poll`](Self::poll).
    pub fn next_deadline(&self) -> Option<Instant> {
        self.session
            .as_ref()
            .and_then(|session| session.timer.deadline())
    }

    pub fn pending_timer(&self) -> Option<PendingTimer> {
        self.session
            .as_ref()
            .and_then(|session| session.timer.pending())
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn operation_log(&self) -> &[String] {
        self.session
            .as_ref()
            .map(|session| session.log.lines())
            .unwrap_or_default()
    }

    pub fn is_live(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_paused(&self) -> bool {
        self.session.as_ref().is_some_and(|session| session.paused)
    }

    pub fn is_complete(&self) -> bool {
        self.session.as_ref().is_some_and(|session| session.complete)
    }

    /// Number of events dispatched so far.
    pub fn step_index(&self) -> usize {
        self.session
            .as_ref()
            .map_or(0, |session| session.step_index)
    }

    pub fn persistent_highlights(&self) -> Vec<usize> {
        self.session
            .as_ref()
            .map(|session| session.persistent.keys().copied().collect())
            .unwrap_or_default()
    }

    pub fn cadence(&self) -> Option<Duration> {
        self.session.as_ref().map(|session| session.cadence)
    }

    /// Name of the producer being played.
    pub fn algorithm_name(&self) -> Option<&'static str> {
        self.session.as_ref().map(|session| session.source.name())
    }
}
