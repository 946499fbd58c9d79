//! Algorithm event vocabulary.
//!
//! Producers describe what an algorithm does as a sequence of these events;
//! the scheduler turns each one into a visual effect and a log line. Nothing
//! here knows about any particular algorithm or about rendering.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ContractViolation;

/// Semantic color tag carried by highlights and applied by the scheduler.
///
/// The UI decides what terminal color each tag maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tint {
    /// First element of a swap
    SwapSource,
    /// Second element of a swap
    SwapTarget,
    /// Elements under comparison
    Compare,
    /// Default color for highlights that name none
    Highlight,
    /// Current partition pivot
    Pivot,
    /// Element known to be in its final position
    Sorted,
    /// Search hit
    Found,
}

/// Discriminant of an [`AlgorithmEvent`], used for logging and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Swap,
    Compare,
    Highlight,
    Clear,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventKind::Swap => "swap",
            EventKind::Compare => "compare",
            EventKind::Highlight => "highlight",
            EventKind::Clear => "clear",
        };
        f.write_str(name)
    }
}

/// One state-changing step of an algorithm.
///
/// Serialized as an internally tagged object, e.g.
/// `{"kind":"swap","first":0,"second":1}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AlgorithmEvent {
    /// Exchange the elements at two distinct positions.
    Swap { first: usize, second: usize },
    /// Look at one or more elements without changing them.
    Compare { indices: Vec<usize> },
    /// Tint elements. `persist` keeps the tint past the next dispatch until a
    /// [`AlgorithmEvent::Clear`] names the index (or clears everything).
    Highlight {
        indices: Vec<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<Tint>,
        #[serde(default)]
        persist: bool,
    },
    /// Remove tints. An empty index list clears every persistent highlight.
    Clear {
        #[serde(default)]
        indices: Vec<usize>,
    },
}

impl AlgorithmEvent {
    pub fn swap(first: usize, second: usize) -> Self {
        AlgorithmEvent::Swap { first, second }
    }

    pub fn compare(indices: impl Into<Vec<usize>>) -> Self {
        AlgorithmEvent::Compare {
            indices: indices.into(),
        }
    }

    /// Non-persistent highlight in the default color.
    pub fn highlight(indices: impl Into<Vec<usize>>) -> Self {
        AlgorithmEvent::Highlight {
            indices: indices.into(),
            color: None,
            persist: false,
        }
    }

    /// Highlight that survives per-step cleanup.
    pub fn persistent_highlight(indices: impl Into<Vec<usize>>, color: Tint) -> Self {
        AlgorithmEvent::Highlight {
            indices: indices.into(),
            color: Some(color),
            persist: true,
        }
    }

    pub fn clear(indices: impl Into<Vec<usize>>) -> Self {
        AlgorithmEvent::Clear {
            indices: indices.into(),
        }
    }

    /// Clear every persistent highlight.
    pub fn clear_all() -> Self {
        AlgorithmEvent::Clear {
            indices: Vec::new(),
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            AlgorithmEvent::Swap { .. } => EventKind::Swap,
            AlgorithmEvent::Compare { .. } => EventKind::Compare,
            AlgorithmEvent::Highlight { .. } => EventKind::Highlight,
            AlgorithmEvent::Clear { .. } => EventKind::Clear,
        }
    }

    /// Positions this event touches, in the order the event names them.
    pub fn indices(&self) -> Vec<usize> {
        match self {
            AlgorithmEvent::Swap { first, second } => vec![*first, *second],
            AlgorithmEvent::Compare { indices }
            | AlgorithmEvent::Highlight { indices, .. }
            | AlgorithmEvent::Clear { indices } => indices.clone(),
        }
    }

    /// Check the event against an array of `len` elements.
    pub fn validate(&self, len: usize) -> Result<(), ContractViolation> {
        match self {
            AlgorithmEvent::Swap { first, second } if first == second => {
                return Err(ContractViolation::SwapSameIndex { index: *first });
            }
            AlgorithmEvent::Compare { indices } | AlgorithmEvent::Highlight { indices, .. }
                if indices.is_empty() =>
            {
                return Err(ContractViolation::EmptyIndices { kind: self.kind() });
            }
            _ => {}
        }

        match self.indices().into_iter().find(|&index| index >= len) {
            Some(index) => Err(ContractViolation::IndexOutOfRange { index, len }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_discrimination() {
        assert_eq!(AlgorithmEvent::swap(0, 1).kind(), EventKind::Swap);
        assert_eq!(AlgorithmEvent::compare([0, 1]).kind(), EventKind::Compare);
        assert_eq!(AlgorithmEvent::highlight([2]).kind(), EventKind::Highlight);
        assert_eq!(AlgorithmEvent::clear_all().kind(), EventKind::Clear);
    }

    #[test]
    fn test_indices_preserve_order() {
        assert_eq!(AlgorithmEvent::swap(4, 1).indices(), vec![4, 1]);
        assert_eq!(AlgorithmEvent::compare([3, 0, 2]).indices(), vec![3, 0, 2]);
        assert!(AlgorithmEvent::clear_all().indices().is_empty());
    }

    #[test]
    fn test_persistent_highlight_constructor() {
        let event = AlgorithmEvent::persistent_highlight([2], Tint::Pivot);
        assert_eq!(
            event,
            AlgorithmEvent::Highlight {
                indices: vec![2],
                color: Some(Tint::Pivot),
                persist: true,
            }
        );
    }

    #[test]
    fn test_validate_accepts_in_range_events() {
        assert!(AlgorithmEvent::swap(0, 4).validate(5).is_ok());
        assert!(AlgorithmEvent::compare([1, 2, 3]).validate(5).is_ok());
        assert!(AlgorithmEvent::clear_all().validate(5).is_ok());
        assert!(AlgorithmEvent::clear([4]).validate(5).is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert_eq!(
            AlgorithmEvent::swap(1, 5).validate(5),
            Err(ContractViolation::IndexOutOfRange { index: 5, len: 5 })
        );
        assert_eq!(
            AlgorithmEvent::clear([7]).validate(3),
            Err(ContractViolation::IndexOutOfRange { index: 7, len: 3 })
        );
    }

    #[test]
    fn test_validate_rejects_degenerate_events() {
        assert_eq!(
            AlgorithmEvent::swap(2, 2).validate(5),
            Err(ContractViolation::SwapSameIndex { index: 2 })
        );
        assert_eq!(
            AlgorithmEvent::compare(Vec::new()).validate(5),
            Err(ContractViolation::EmptyIndices {
                kind: EventKind::Compare
            })
        );
        assert_eq!(
            AlgorithmEvent::highlight(Vec::new()).validate(5),
            Err(ContractViolation::EmptyIndices {
                kind: EventKind::Highlight
            })
        );
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_string(&AlgorithmEvent::swap(0, 1)).unwrap();
        assert_eq!(json, r#"{"kind":"swap","first":0,"second":1}"#);

        let json = serde_json::to_string(&AlgorithmEvent::highlight([3])).unwrap();
        assert_eq!(json, r#"{"kind":"highlight","indices":[3],"persist":false}"#);
    }

    #[test]
    fn test_parse_highlight_with_defaults() {
        let event: AlgorithmEvent =
            serde_json::from_str(r#"{"kind":"highlight","indices":[1,2]}"#).unwrap();
        assert_eq!(event, AlgorithmEvent::highlight([1, 2]));

        let event: AlgorithmEvent =
            serde_json::from_str(r#"{"kind":"highlight","indices":[0],"color":"pivot","persist":true}"#)
                .unwrap();
        assert_eq!(event, AlgorithmEvent::persistent_highlight([0], Tint::Pivot));
    }

    #[test]
    fn test_parse_clear_without_indices_means_all() {
        let event: AlgorithmEvent = serde_json::from_str(r#"{"kind":"clear"}"#).unwrap();
        assert_eq!(event, AlgorithmEvent::clear_all());
    }
}
