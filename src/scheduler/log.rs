//! Operation log and the text of each entry.

use crate::error::DispatchError;
use crate::events::AlgorithmEvent;

/// Append-only list of human-readable lines, one per dispatch plus one for
/// completion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationLog {
    lines: Vec<String>,
}

impl OperationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

fn join_indices(indices: &[usize]) -> String {
    indices
        .iter()
        .map(|index| index.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn swap_line(step: usize, first: (usize, i64), second: (usize, i64)) -> String {
    format!(
        "Step {step}: Swapping {} (index {}) with {} (index {})",
        first.1, first.0, second.1, second.0
    )
}

pub(crate) fn compare_line(step: usize, values: &[i64]) -> String {
    let values = values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(" vs ");
    format!("Step {step}: Comparing {values}")
}

pub(crate) fn highlight_line(step: usize, indices: &[usize]) -> String {
    format!("Step {step}: Highlighting indices {}", join_indices(indices))
}

pub(crate) fn clear_line(step: usize, indices: &[usize]) -> String {
    if indices.is_empty() {
        format!("Step {step}: Clearing all highlights")
    } else {
        format!("Step {step}: Clearing indices {}", join_indices(indices))
    }
}

pub(crate) fn skipped_line(step: usize, event: &AlgorithmEvent, err: &DispatchError) -> String {
    format!("Step {step}: Skipped {} event: {err}", event.kind())
}

pub(crate) fn completion_line(total_steps: usize) -> String {
    format!("Visualization complete! Total steps: {total_steps}")
}
