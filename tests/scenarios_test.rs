//! Concrete playback scenarios.

mod common;

use std::time::Instant;

use algoviz::app::App;
use algoviz::config::VizConfig;
use algoviz::events::{AlgorithmEvent, Tint};
use algoviz::producers::Algorithm;
use algoviz::scheduler::TickOutcome;
use algoviz::surface::PresentationSurface;
use common::{advance, drain, is_sorted, scripted_source, sorted, started, CADENCE};

#[test]
fn test_insertion_swaps_sort_small_array() {
    let input = [23, 7, 15, 92, 4];
    let source = Algorithm::InsertionSort.source(&input, None);
    assert!(source.stream().all(|event| matches!(event, AlgorithmEvent::Swap { .. })));

    let mut scheduler = started(source, Instant::now());
    drain(&mut scheduler);

    let shown = scheduler.surface().values();
    assert!(is_sorted(&shown));
    assert_eq!(shown, sorted(&input));
    assert_eq!(
        scheduler.operation_log()[0],
        "Step 1: Swapping 23 (index 0) with 7 (index 1)"
    );
}

#[test]
fn test_persistent_highlight_holds_through_three_swaps() {
    let events = vec![
        AlgorithmEvent::persistent_highlight([2], Tint::Pivot),
        AlgorithmEvent::swap(0, 1),
        AlgorithmEvent::swap(3, 4),
        AlgorithmEvent::swap(0, 1),
        AlgorithmEvent::clear([2]),
    ];
    let mut scheduler = started(scripted_source(events, &[1, 2, 3, 4, 5]), Instant::now());

    advance(&mut scheduler, 1);
    for _ in 0..3 {
        advance(&mut scheduler, 1);
        assert_eq!(scheduler.surface().tint(2), Ok(Some(Tint::Pivot)));
        assert_eq!(scheduler.persistent_highlights(), vec![2]);
    }

    advance(&mut scheduler, 1);
    assert_eq!(scheduler.surface().tint(2), Ok(None));
    assert!(scheduler.persistent_highlights().is_empty());
}

#[test]
fn test_clear_all_releases_persistent_highlight() {
    let events = vec![
        AlgorithmEvent::persistent_highlight([2], Tint::Found),
        AlgorithmEvent::swap(0, 1),
        AlgorithmEvent::clear_all(),
    ];
    let mut scheduler = started(scripted_source(events, &[1, 2, 3]), Instant::now());
    advance(&mut scheduler, 2);
    assert_eq!(scheduler.surface().tint(2), Ok(Some(Tint::Found)));
    advance(&mut scheduler, 1);
    assert_eq!(scheduler.surface().tint(2), Ok(None));
}

#[test]
fn test_switching_algorithm_abandons_pending_ticks() {
    let events: Vec<AlgorithmEvent> = (0..10usize)
        .map(|i| AlgorithmEvent::highlight([i % 4]))
        .collect();
    let t0 = Instant::now();
    let mut scheduler = started(scripted_source(events, &[1, 2, 3, 4]), t0);
    let switch_at = advance(&mut scheduler, 5);
    let stale = scheduler.pending_timer().map(|timer| timer.id);

    let next = Algorithm::BubbleSort.source(&[2, 1], None);
    scheduler.start(next, CADENCE, switch_at);

    assert!(scheduler.operation_log().is_empty());
    assert_eq!(scheduler.surface().values(), vec![2, 1]);
    assert_ne!(scheduler.pending_timer().map(|timer| timer.id), stale);

    // Only the new session's tick is pending and it fires once
    assert_eq!(scheduler.poll(switch_at + CADENCE / 2), TickOutcome::Idle);
    assert_eq!(
        scheduler.poll(switch_at + CADENCE),
        TickOutcome::Dispatched { step: 1 }
    );
    assert_eq!(
        scheduler.operation_log(),
        &["Step 1: Swapping 2 (index 0) with 1 (index 1)".to_string()]
    );
}

#[test]
fn test_controller_switch_resets_log() {
    let mut app = App::new(
        VizConfig::default()
            .with_dataset(vec![9, 8, 7, 6, 5])
            .with_cadence(CADENCE),
    );
    let t0 = Instant::now();
    app.select_algorithm(Algorithm::BubbleSort, t0);
    for tick in 1..=5 {
        app.on_tick(t0 + CADENCE * tick);
    }
    assert_eq!(app.operation_log().len(), 5);

    let switch_at = t0 + CADENCE * 5;
    app.select_algorithm(Algorithm::QuickSort, switch_at);
    assert!(app.operation_log().is_empty());
    assert!(!app.complete);
    assert_eq!(app.surface().values(), vec![9, 8, 7, 6, 5]);
    assert_eq!(app.next_deadline(), Some(switch_at + CADENCE));
}

#[test]
fn test_binary_search_finds_default_target() {
    let mut scheduler = started(
        Algorithm::BinarySearch.source(&[23, 7, 15, 92, 4, 68, 31, 55, 12, 89], None),
        Instant::now(),
    );
    drain(&mut scheduler);
    assert_eq!(scheduler.persistent_highlights(), vec![6]);
    assert_eq!(scheduler.surface().tint(6), Ok(Some(Tint::Found)));
    assert_eq!(scheduler.surface().value(6), Ok(55));
}

#[test]
fn test_quick_sort_marks_every_element_sorted() {
    let input = [5, 2, 8, 1, 9, 3];
    let mut scheduler = started(Algorithm::QuickSort.source(&input, None), Instant::now());
    drain(&mut scheduler);

    assert_eq!(scheduler.persistent_highlights(), (0..input.len()).collect::<Vec<_>>());
    for index in 0..input.len() {
        assert_eq!(scheduler.surface().tint(index), Ok(Some(Tint::Sorted)));
    }
}

#[test]
fn test_malformed_event_does_not_abort_session() {
    let events = vec![
        AlgorithmEvent::swap(1, 1),
        AlgorithmEvent::compare([0, 7]),
        AlgorithmEvent::swap(0, 1),
    ];
    let mut scheduler = started(scripted_source(events, &[2, 1]), Instant::now());
    drain(&mut scheduler);

    let log = scheduler.operation_log();
    assert_eq!(log.len(), 4);
    assert_eq!(
        log[0],
        "Step 1: Skipped swap event: swap needs two distinct indices, got 1 twice"
    );
    assert!(log[1].starts_with("Step 2: Skipped compare event"));
    assert_eq!(log[2], "Step 3: Swapping 2 (index 0) with 1 (index 1)");
    assert_eq!(scheduler.surface().values(), vec![1, 2]);
}
