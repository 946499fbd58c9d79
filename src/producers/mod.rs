//! Event producers: algorithms that narrate themselves as [`AlgorithmEvent`]s.
//!
//! A producer receives a borrowed input slice, copies it, and returns a lazy
//! [`EventStream`] that runs the algorithm on that copy one step per `next()`.
//! Streams are finite, strictly forward, and never fail. Running the same
//! producer again on the same input yields a fresh, independent stream.
//!
//! # Producers
//!
//! | [`Algorithm`] | Category | Events |
//! |---------------|----------|--------|
//! | `bubble-sort` | Sorting | Swap |
//! | `insertion-sort` | Sorting | Swap |
//! | `quick-sort` | Sorting | Swap, Highlight (pivot/sorted), Clear |
//! | `binary-search` | Searching | Highlight, Compare |

mod binary_search;
mod bubble_sort;
mod insertion_sort;
mod quick_sort;

pub use binary_search::BinarySearch;
pub use bubble_sort::BubbleSort;
pub use insertion_sort::InsertionSort;
pub use quick_sort::QuickSort;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::ConfigError;
use crate::events::AlgorithmEvent;

/// Lazy, ordered, finite sequence of events from one producer run.
pub type EventStream = Box<dyn Iterator<Item = AlgorithmEvent> + Send>;

/// Anything that can turn an input array into an [`EventStream`].
///
/// Implementations must not keep state between calls to [`produce`](Self::produce).
pub trait EventProducer: Send + Sync {
    /// Display name used in logs and the sidebar.
    fn name(&self) -> &'static str;

    /// Start a new run over a private copy of `input`.
    fn produce(&self, input: &[i64]) -> EventStream;
}

/// A producer bound to the input it animates.
///
/// The scheduler keeps one of these per session so that a restart can derive
/// a brand-new stream from the same algorithm and data.
#[derive(Clone)]
pub struct EventSource {
    producer: Arc<dyn EventProducer>,
    input: Arc<[i64]>,
}

impl EventSource {
    pub fn new(producer: Arc<dyn EventProducer>, input: impl Into<Arc<[i64]>>) -> Self {
        Self {
            producer,
            input: input.into(),
        }
    }

    /// A fresh stream over the bound input.
    pub fn stream(&self) -> EventStream {
        self.producer.produce(&self.input)
    }

    /// The array the surface shows before the first dispatch.
    pub fn input(&self) -> &[i64] {
        &self.input
    }

    pub fn name(&self) -> &'static str {
        self.producer.name()
    }
}

impl fmt::Debug for EventSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventSource")
            .field("producer", &self.producer.name())
            .field("input", &self.input)
            .finish()
    }
}

/// Menu grouping for algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmCategory {
    Sorting,
    Searching,
}

impl AlgorithmCategory {
    pub fn label(self) -> &'static str {
        match self {
            AlgorithmCategory::Sorting => "Sorting",
            AlgorithmCategory::Searching => "Searching",
        }
    }
}

/// Identifier of every algorithm the visualizer can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    BubbleSort,
    InsertionSort,
    QuickSort,
    BinarySearch,
}

impl Algorithm {
    /// Menu order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::BubbleSort,
        Algorithm::InsertionSort,
        Algorithm::QuickSort,
        Algorithm::BinarySearch,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "Bubble Sort",
            Algorithm::InsertionSort => "Insertion Sort",
            Algorithm::QuickSort => "Quick Sort",
            Algorithm::BinarySearch => "Binary Search",
        }
    }

    /// Command-line name.
    pub fn slug(self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "bubble-sort",
            Algorithm::InsertionSort => "insertion-sort",
            Algorithm::QuickSort => "quick-sort",
            Algorithm::BinarySearch => "binary-search",
        }
    }

    pub fn category(self) -> AlgorithmCategory {
        match self {
            Algorithm::BinarySearch => AlgorithmCategory::Searching,
            _ => AlgorithmCategory::Sorting,
        }
    }

    /// Build the producer. `search_target` only matters for searching algorithms.
    pub fn producer(self, search_target: Option<i64>) -> Arc<dyn EventProducer> {
        match self {
            Algorithm::BubbleSort => Arc::new(BubbleSort),
            Algorithm::InsertionSort => Arc::new(InsertionSort),
            Algorithm::QuickSort => Arc::new(QuickSort),
            Algorithm::BinarySearch => Arc::new(BinarySearch::new(search_target)),
        }
    }

    /// The array this algorithm animates, derived from the configured dataset.
    ///
    /// Searching algorithms need ordered data, so they get a sorted copy.
    pub fn prepare_input(self, dataset: &[i64]) -> Vec<i64> {
        let mut input = dataset.to_vec();
        if self.category() == AlgorithmCategory::Searching {
            input.sort_unstable();
        }
        input
    }

    /// Producer and prepared input in one step.
    pub fn source(self, dataset: &[i64], search_target: Option<i64>) -> EventSource {
        EventSource::new(self.producer(search_target), self.prepare_input(dataset))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    /// Accepts the slug, the slug without the suffix, or the label in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace([' ', '_'], "-");
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| {
                let slug = algorithm.slug();
                wanted == slug || slug.split('-').next() == Some(wanted.as_str())
            })
            .ok_or_else(|| ConfigError::UnknownAlgorithm {
                name: s.to_string(),
                expected: Algorithm::ALL
                    .iter()
                    .map(|algorithm| algorithm.slug())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_slugs_and_short_names() {
        assert_eq!("bubble-sort".parse::<Algorithm>().unwrap(), Algorithm::BubbleSort);
        assert_eq!("quick".parse::<Algorithm>().unwrap(), Algorithm::QuickSort);
        assert_eq!("Insertion Sort".parse::<Algorithm>().unwrap(), Algorithm::InsertionSort);
        assert_eq!("binary_search".parse::<Algorithm>().unwrap(), Algorithm::BinarySearch);
    }

    #[test]
    fn test_parse_unknown_lists_expected_names() {
        let err = "heap".parse::<Algorithm>().unwrap_err();
        match err {
            ConfigError::UnknownAlgorithm { name, expected } => {
                assert_eq!(name, "heap");
                assert!(expected.contains("bubble-sort"));
                assert!(expected.contains("binary-search"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_searching_input_is_sorted_copy() {
        let dataset = [5, 1, 4];
        assert_eq!(Algorithm::BinarySearch.prepare_input(&dataset), vec![1, 4, 5]);
        assert_eq!(Algorithm::BubbleSort.prepare_input(&dataset), vec![5, 1, 4]);
        assert_eq!(dataset, [5, 1, 4]);
    }

    #[test]
    fn test_source_yields_independent_streams() {
        let source = Algorithm::BubbleSort.source(&[3, 2, 1], None);
        let first: Vec<_> = source.stream().collect();
        let second: Vec<_> = source.stream().collect();
        assert!(!first.is_empty());
        assert_eq!(first, second);
        assert_eq!(source.input(), &[3, 2, 1]);
    }

    #[test]
    fn test_categories() {
        assert_eq!(Algorithm::QuickSort.category(), AlgorithmCategory::Sorting);
        assert_eq!(Algorithm::BinarySearch.category(), AlgorithmCategory::Searching);
        assert_eq!(AlgorithmCategory::Searching.label(), "Searching");
    }
}
