//! Bubble sort, one Swap event per actual exchange.

use super::{EventProducer, EventStream};
use crate::events::AlgorithmEvent;

/// Classic bubble sort: each pass bubbles the largest remaining element to the
/// end of the unsorted prefix. Comparisons that do not swap emit nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl EventProducer for BubbleSort {
    fn name(&self) -> &'static str {
        "Bubble Sort"
    }

    fn produce(&self, input: &[i64]) -> EventStream {
        Box::new(BubbleSortSteps {
            pass_end: input.len(),
            values: input.to_vec(),
            cursor: 0,
        })
    }
}

/// Iterator state for one run. `pass_end` is the exclusive end of the
/// unsorted prefix; `cursor` is the left element of the next pair to look at.
struct BubbleSortSteps {
    values: Vec<i64>,
    pass_end: usize,
    cursor: usize,
}

impl Iterator for BubbleSortSteps {
    type Item = AlgorithmEvent;

    fn next(&mut self) -> Option<AlgorithmEvent> {
        loop {
            if self.pass_end <= 1 {
                return None;
            }
            if self.cursor + 1 >= self.pass_end {
                self.pass_end -= 1;
                self.cursor = 0;
                continue;
            }

            let j = self.cursor;
            self.cursor += 1;
            if self.values[j] > self.values[j + 1] {
                self.values.swap(j, j + 1);
                return Some(AlgorithmEvent::swap(j, j + 1));
            }
        }
    }
}
