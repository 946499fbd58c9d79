//! Insertion sort expressed as adjacent swaps.

use super::{EventProducer, EventStream};
use crate::events::AlgorithmEvent;

/// Insertion sort that walks each new element left by swapping it with its
/// larger neighbour until it rests in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSort;

impl EventProducer for InsertionSort {
    fn name(&self) -> &'static str {
        "Insertion Sort"
    }

    fn produce(&self, input: &[i64]) -> EventStream {
        Box::new(InsertionSortSteps {
            values: input.to_vec(),
            next_unsorted: 1,
            position: 1,
        })
    }
}

struct InsertionSortSteps {
    values: Vec<i64>,
    /// First index not yet inserted into the sorted prefix
    next_unsorted: usize,
    /// Current position of the element being inserted
    position: usize,
}

impl Iterator for InsertionSortSteps {
    type Item = AlgorithmEvent;

    fn next(&mut self) -> Option<AlgorithmEvent> {
        while self.next_unsorted < self.values.len() {
            let j = self.position;
            if j > 0 && self.values[j - 1] > self.values[j] {
                self.values.swap(j - 1, j);
                self.position -= 1;
                return Some(AlgorithmEvent::swap(j - 1, j));
            }
            self.next_unsorted += 1;
            self.position = self.next_unsorted;
        }
        None
    }
}
