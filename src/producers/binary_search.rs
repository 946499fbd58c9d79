//! Binary search over a sorted array.

use super::{EventProducer, EventStream};
use crate::events::{AlgorithmEvent, Tint};

/// Binary search for `target`.
///
/// Each probe highlights the live window and then compares its midpoint; a hit
/// leaves a persistent `Found` highlight. The input is expected to be sorted
/// (see [`Algorithm::prepare_input`](super::Algorithm::prepare_input)).
#[derive(Debug, Clone, Copy, Default)]
pub struct BinarySearch {
    target: Option<i64>,
}

impl BinarySearch {
    /// Without a target the search looks for the element two thirds of the
    /// way into the input, so the default run always finds something.
    pub fn new(target: Option<i64>) -> Self {
        Self { target }
    }

    pub fn target_for(&self, input: &[i64]) -> Option<i64> {
        self.target.or_else(|| input.get(input.len() * 2 / 3).copied())
    }
}

impl EventProducer for BinarySearch {
    fn name(&self) -> &'static str {
        "Binary Search"
    }

    fn produce(&self, input: &[i64]) -> EventStream {
        let target = self.target_for(input);
        Box::new(BinarySearchSteps {
            phase: if target.is_some() {
                Phase::ShowWindow
            } else {
                Phase::Done
            },
            target: target.unwrap_or_default(),
            values: input.to_vec(),
            low: 0,
            high: input.len(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    ShowWindow,
    Compare(usize),
    Resolve(usize),
    Done,
}

struct BinarySearchSteps {
    values: Vec<i64>,
    target: i64,
    /// Half-open window `low..high` that may still contain the target
    low: usize,
    high: usize,
    phase: Phase,
}

impl Iterator for BinarySearchSteps {
    type Item = AlgorithmEvent;

    fn next(&mut self) -> Option<AlgorithmEvent> {
        loop {
            match self.phase {
                Phase::Done => return None,
                Phase::ShowWindow => {
                    if self.low >= self.high {
                        self.phase = Phase::Done;
                        return None;
                    }
                    let mid = self.low + (self.high - self.low) / 2;
                    self.phase = Phase::Compare(mid);
                    let last = self.high - 1;
                    let window = if self.low == last {
                        vec![self.low]
                    } else {
                        vec![self.low, last]
                    };
                    return Some(AlgorithmEvent::highlight(window));
                }
                Phase::Compare(mid) => {
                    self.phase = Phase::Resolve(mid);
                    return Some(AlgorithmEvent::compare([mid]));
                }
                Phase::Resolve(mid) => {
                    let value = self.values[mid];
                    if value == self.target {
                        self.phase = Phase::Done;
                        return Some(AlgorithmEvent::persistent_highlight([mid], Tint::Found));
                    }
                    if value < self.target {
                        self.low = mid + 1;
                    } else {
                        self.high = mid;
                    }
                    self.phase = Phase::ShowWindow;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_target_with_narration() {
        let input = [1, 3, 5, 7, 9];
        let events: Vec<_> = BinarySearch::new(Some(7)).produce(&input).collect();
        assert_eq!(
            events,
            vec![
                AlgorithmEvent::highlight([0, 4]),
                AlgorithmEvent::compare([2]),
                AlgorithmEvent::highlight([3, 4]),
                AlgorithmEvent::compare([4]),
                AlgorithmEvent::highlight([3]),
                AlgorithmEvent::compare([3]),
                AlgorithmEvent::persistent_highlight([3], Tint::Found),
            ]
        );
    }

    #[test]
    fn test_missing_target_ends_without_found() {
        let events: Vec<_> = BinarySearch::new(Some(4)).produce(&[1, 3, 5, 7]).collect();
        assert!(!events.is_empty());
        assert!(!events
            .iter()
            .any(|event| matches!(event, AlgorithmEvent::Highlight { persist: true, .. })));
    }

    #[test]
    fn test_default_target_is_present() {
        let input = [4, 7, 12, 15, 23, 31, 55, 68, 89, 92];
        let search = BinarySearch::new(None);
        assert_eq!(search.target_for(&input), Some(55));
        let last = search.produce(&input).last();
        assert_eq!(last, Some(AlgorithmEvent::persistent_highlight([6], Tint::Found)));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(BinarySearch::new(None).produce(&[]).count(), 0);
        assert_eq!(BinarySearch::new(Some(3)).produce(&[]).count(), 0);
    }
}
