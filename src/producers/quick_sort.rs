//! Quick sort (Lomuto partition, last element as pivot) with pivot narration.
//!
//! For every partition the stream emits:
//! 1. a persistent `Pivot` highlight on the pivot,
//! 2. one Swap per exchange that actually moves something,
//! 3. once the pivot lands, a Clear of its old index and a persistent
//!    `Sorted` highlight on its final index.
//!
//! Single-element ranges are already in place and get a `Sorted` highlight
//! straight away, so a finished run leaves every index marked sorted.

use std::collections::VecDeque;

use super::{EventProducer, EventStream};
use crate::events::{AlgorithmEvent, Tint};

#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

impl EventProducer for QuickSort {
    fn name(&self) -> &'static str {
        "Quick Sort"
    }

    fn produce(&self, input: &[i64]) -> EventStream {
        let ranges = if input.is_empty() {
            Vec::new()
        } else {
            vec![(0, input.len() - 1)]
        };
        Box::new(QuickSortSteps {
            values: input.to_vec(),
            ranges,
            partition: None,
            pending: VecDeque::new(),
        })
    }
}

/// In-progress Lomuto partition over `low..=high`.
struct Partition {
    low: usize,
    high: usize,
    pivot: i64,
    /// Next slot for an element smaller than the pivot
    store: usize,
    /// Next element to compare against the pivot
    scan: usize,
}

struct QuickSortSteps {
    values: Vec<i64>,
    /// Inclusive ranges still to sort; the top of the stack is processed next
    ranges: Vec<(usize, usize)>,
    partition: Option<Partition>,
    /// Events already decided but not yet yielded
    pending: VecDeque<AlgorithmEvent>,
}

impl QuickSortSteps {
    /// Advance the active partition by one comparison. Returns a Swap when the
    /// comparison moved an element; finishes the partition when the scan is done.
    fn step_partition(&mut self) -> Option<AlgorithmEvent> {
        let part = self.partition.as_mut()?;

        if part.scan < part.high {
            let j = part.scan;
            part.scan += 1;
            if self.values[j] < part.pivot {
                let slot = part.store;
                part.store += 1;
                if slot != j {
                    self.values.swap(slot, j);
                    return Some(AlgorithmEvent::swap(slot, j));
                }
            }
            return None;
        }

        let Partition {
            low, high, store, ..
        } = *part;
        self.partition = None;
        self.place_pivot(low, high, store);
        None
    }

    fn place_pivot(&mut self, low: usize, high: usize, store: usize) {
        if store != high {
            self.values.swap(store, high);
            self.pending.push_back(AlgorithmEvent::swap(store, high));
        }
        self.pending.push_back(AlgorithmEvent::clear([high]));
        self.pending
            .push_back(AlgorithmEvent::persistent_highlight([store], Tint::Sorted));

        // Right half goes on the stack first so the left half is sorted first.
        if store < high {
            self.ranges.push((store + 1, high));
        }
        if store > low {
            self.ranges.push((low, store - 1));
        }
    }
}

impl Iterator for QuickSortSteps {
    type Item = AlgorithmEvent;

    fn next(&mut self) -> Option<AlgorithmEvent> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Some(event);
            }

            if self.partition.is_some() {
                if let Some(event) = self.step_partition() {
                    return Some(event);
                }
                continue;
            }

            let (low, high) = self.ranges.pop()?;
            if low == high {
                return Some(AlgorithmEvent::persistent_highlight([low], Tint::Sorted));
            }

            self.partition = Some(Partition {
                low,
                high,
                pivot: self.values[high],
                store: low,
                scan: low,
            });
            return Some(AlgorithmEvent::persistent_highlight([high], Tint::Pivot));
        }
    }
}
