//! Shared fixtures for the integration tests.
//!
//! Drives schedulers with synthetic instants: every helper advances time by
//! exactly one cadence per poll, so tests never sleep.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::{Duration, Instant};

use algoviz::events::AlgorithmEvent;
use algoviz::producers::{EventProducer, EventSource, EventStream};
use algoviz::scheduler::{Scheduler, TickOutcome};
use algoviz::surface::ArraySurface;

pub const CADENCE: Duration = Duration::from_millis(100);

/// Arrays exercised by the property-style tests.
pub fn datasets() -> Vec<Vec<i64>> {
    vec![
        vec![],
        vec![42],
        vec![2, 1],
        vec![1, 2, 3, 4],
        vec![4, 3, 2, 1],
        vec![5, 5, 5],
        vec![3, -1, 3, 0, -1],
        vec![23, 7, 15, 92, 4],
        vec![23, 7, 15, 92, 4, 68, 31, 55, 12, 89],
        (0..40).map(|i| (i * 37) % 23 - 11).collect(),
    ]
}

/// Producer that replays a fixed event list regardless of input.
pub struct Scripted {
    pub events: Vec<AlgorithmEvent>,
}

impl EventProducer for Scripted {
    fn name(&self) -> &'static str {
        "Scripted"
    }

    fn produce(&self, _input: &[i64]) -> EventStream {
        Box::new(self.events.clone().into_iter())
    }
}

pub fn scripted_source(events: Vec<AlgorithmEvent>, input: &[i64]) -> EventSource {
    EventSource::new(Arc::new(Scripted { events }), input.to_vec())
}

/// A scheduler already started on `source` at `t0`.
pub fn started(source: EventSource, t0: Instant) -> Scheduler<ArraySurface> {
    let mut scheduler = Scheduler::new(ArraySurface::default());
    scheduler.start(source, CADENCE, t0);
    scheduler
}

/// Poll at each deadline until completion; returns the completion time.
///
/// Panics if the session stalls (no deadline) before completing.
pub fn drain(scheduler: &mut Scheduler<ArraySurface>) -> Instant {
    loop {
        let deadline = scheduler
            .next_deadline()
            .expect("session stalled before completion");
        if let TickOutcome::Completed { .. } = scheduler.poll(deadline) {
            return deadline;
        }
    }
}

/// Poll at the next `steps` deadlines; returns the time of the last poll.
pub fn advance(scheduler: &mut Scheduler<ArraySurface>, steps: usize) -> Instant {
    let mut now = Instant::now();
    for _ in 0..steps {
        now = scheduler
            .next_deadline()
            .expect("no pending tick to advance to");
        scheduler.poll(now);
    }
    now
}

pub fn is_sorted(values: &[i64]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}

pub fn sorted(values: &[i64]) -> Vec<i64> {
    let mut values = values.to_vec();
    values.sort_unstable();
    values
}
