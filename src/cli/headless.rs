//! `--headless`: play a session at the configured cadence, printing the
//! operation log instead of drawing.

use std::io::Write;
use std::time::Instant;

use crate::config::VizConfig;
use crate::error::VizResult;
use crate::scheduler::{Scheduler, TickOutcome};
use crate::surface::ArraySurface;

use super::chosen_algorithm;

/// Run the chosen algorithm to completion, writing each log line as it
/// appears. Returns the total number of dispatched steps.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub async fn run_headless<W: Write>(config: &VizConfig, out: &mut W) -> VizResult<usize> {
    let algorithm = chosen_algorithm(config);
    let source = algorithm.source(&config.dataset, config.search_target);
    writeln!(out, "{}: {:?}", algorithm, source.input())?;

    let mut scheduler = Scheduler::new(ArraySurface::default());
    scheduler.start(source, config.cadence, Instant::now());
    let mut printed = 0;

    while let Some(deadline) = scheduler.next_deadline() {
        tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await;
        let outcome = scheduler.poll(Instant::now());

        for line in &scheduler.operation_log()[printed..] {
            writeln!(out, "{line}")?;
        }
        printed = scheduler.operation_log().len();
        out.flush()?;

        if let TickOutcome::Completed { total_steps } = outcome {
            writeln!(out, "Final: {:?}", scheduler.surface().values())?;
            return Ok(total_steps);
        }
    }

    Ok(scheduler.step_index())
}
