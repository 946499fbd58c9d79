//! `--events`: dump a producer's stream as JSON lines.

use std::io::Write;

use crate::config::VizConfig;
use crate::error::VizResult;

use super::chosen_algorithm;

/// Write one JSON object per event to `out` and return how many were written.
///
/// Nothing is animated; this shows exactly what the scheduler would play.
pub fn write_events<W: Write>(config: &VizConfig, out: &mut W) -> VizResult<usize> {
    let algorithm = chosen_algorithm(config);
    let source = algorithm.source(&config.dataset, config.search_target);
    tracing::info!(algorithm = %algorithm, elements = source.input().len(), "dumping events");

    let mut count = 0;
    for event in source.stream() {
        serde_json::to_writer(&mut *out, &event)?;
        out.write_all(b"\n")?;
        count += 1;
    }
    out.flush()?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::AlgorithmEvent;
    use crate::producers::Algorithm;

    #[test]
    fn test_writes_parseable_lines() {
        let config = VizConfig::default()
            .with_algorithm(Algorithm::BubbleSort)
            .with_dataset(vec![2, 1]);
        let mut out = Vec::new();
        let count = write_events(&config, &mut out).unwrap();
        assert_eq!(count, 1);

        let text = String::from_utf8(out).unwrap();
        let events: Vec<AlgorithmEvent> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(events, vec![AlgorithmEvent::swap(0, 1)]);
    }

    #[test]
    fn test_sorted_input_has_no_events() {
        let config = VizConfig::default().with_dataset(vec![1, 2, 3]);
        let mut out = Vec::new();
        assert_eq!(write_events(&config, &mut out).unwrap(), 0);
        assert!(out.is_empty());
    }
}
