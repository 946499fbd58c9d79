//! Session controller.
//!
//! [`App`] owns the configuration and the scheduler and maps user intent
//! (menu navigation, selection, play/pause, restart, reset) onto scheduler
//! operations. It never touches the terminal; `main` feeds it key events and
//! ticks and asks [`crate::ui::render`] to draw it.

mod handlers;
mod types;

pub use types::PlaybackStatus;

use std::time::{Duration, Instant};

use crate::config::VizConfig;
use crate::producers::Algorithm;
use crate::scheduler::{Scheduler, TickOutcome};
use crate::surface::ArraySurface;

/// Controller state for one run of the visualizer.
pub struct App {
    pub config: VizConfig,
    scheduler: Scheduler<ArraySurface>,
    /// Algorithm whose session is (or was last) on screen
    selected: Option<Algorithm>,
    /// Sidebar cursor into [`Algorithm::ALL`]
    pub menu_index: usize,
    /// Set when the scheduler reports the end of the stream
    pub complete: bool,
    /// Dirty flag; the main loop only draws when this is set
    pub needs_redraw: bool,
    pub should_quit: bool,
}

impl App {
    /// Build the controller. Nothing plays until [`launch`](Self::launch) or
    /// a selection.
    pub fn new(config: VizConfig) -> Self {
        let menu_index = config
            .algorithm
            .and_then(|algorithm| Algorithm::ALL.iter().position(|&a| a == algorithm))
            .unwrap_or(0);
        Self {
            scheduler: Scheduler::new(ArraySurface::new(&config.dataset)),
            config,
            selected: None,
            menu_index,
            complete: false,
            needs_redraw: true,
            should_quit: false,
        }
    }

    /// Start the configured algorithm, if one was configured.
    pub fn launch(&mut self, now: Instant) {
        if let Some(algorithm) = self.config.algorithm {
            self.select_algorithm(algorithm, now);
        }
    }

    /// Make `algorithm` the active session.
    ///
    /// Choosing the algorithm that is already live does nothing; anything
    /// else disposes the old session before the new one starts, so no tick
    /// from the old session can land afterwards.
    pub fn select_algorithm(&mut self, algorithm: Algorithm, now: Instant) {
        if self.selected == Some(algorithm) && self.scheduler.is_live() {
            tracing::debug!(%algorithm, "already active");
            return;
        }

        tracing::info!(%algorithm, "algorithm selected");
        self.selected = Some(algorithm);
        if let Some(index) = Algorithm::ALL.iter().position(|&a| a == algorithm) {
            self.menu_index = index;
        }
        self.start_selected(now);
    }

    fn start_selected(&mut self, now: Instant) {
        let Some(algorithm) = self.selected else {
            return;
        };
        let source = algorithm.source(&self.config.dataset, self.config.search_target);
        self.complete = false;
        self.scheduler.start(source, self.config.cadence, now);
        self.mark_dirty();
    }

    /// Resume a paused session, or start the selection if none is live.
    pub fn play(&mut self, now: Instant) {
        if !self.scheduler.is_live() {
            self.start_selected(now);
            return;
        }
        self.scheduler.resume(now);
        self.mark_dirty();
    }

    pub fn pause(&mut self) {
        self.scheduler.pause();
        self.mark_dirty();
    }

    /// Space bar: pause while playing, play otherwise. A complete session
    /// ignores it.
    pub fn toggle_pause(&mut self, now: Instant) {
        match self.status() {
            PlaybackStatus::Playing => self.pause(),
            PlaybackStatus::Paused | PlaybackStatus::Idle => self.play(now),
            PlaybackStatus::Complete => {}
        }
    }

    /// Replay the current algorithm from its original input.
    pub fn restart(&mut self, now: Instant) {
        if self.scheduler.is_live() {
            self.complete = false;
            self.scheduler.restart(now);
            self.mark_dirty();
        } else {
            self.start_selected(now);
        }
    }

    /// Drop the session and the selection; show the raw dataset.
    pub fn reset_view(&mut self) {
        self.scheduler.reset(&self.config.dataset);
        self.selected = None;
        self.complete = false;
        self.mark_dirty();
    }

    /// Let the scheduler dispatch whatever is due at `now`.
    pub fn on_tick(&mut self, now: Instant) -> TickOutcome {
        let outcome = self.scheduler.poll(now);
        match outcome {
            TickOutcome::Idle => {}
            TickOutcome::Dispatched { .. } => self.mark_dirty(),
            TickOutcome::Completed { .. } => {
                self.complete = true;
                self.mark_dirty();
            }
        }
        outcome
    }

    /// When the main loop should call [`on_tick`](Self::on_tick) next.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    pub fn status(&self) -> PlaybackStatus {
        if !self.scheduler.is_live() {
            PlaybackStatus::Idle
        } else if self.complete || self.scheduler.is_complete() {
            PlaybackStatus::Complete
        } else if self.scheduler.is_paused() {
            PlaybackStatus::Paused
        } else {
            PlaybackStatus::Playing
        }
    }

    pub fn selected(&self) -> Option<Algorithm> {
        self.selected
    }

    pub fn scheduler(&self) -> &Scheduler<ArraySurface> {
        &self.scheduler
    }

    pub fn surface(&self) -> &ArraySurface {
        self.scheduler.surface()
    }

    pub fn operation_log(&self) -> &[String] {
        self.scheduler.operation_log()
    }

    pub fn cadence(&self) -> Duration {
        self.config.cadence
    }

    pub fn menu_up(&mut self) {
        let len = Algorithm::ALL.len();
        self.menu_index = (self.menu_index + len - 1) % len;
        self.mark_dirty();
    }

    pub fn menu_down(&mut self) {
        self.menu_index = (self.menu_index + 1) % Algorithm::ALL.len();
        self.mark_dirty();
    }

    /// Algorithm under the sidebar cursor.
    pub fn highlighted_algorithm(&self) -> Algorithm {
        Algorithm::ALL[self.menu_index % Algorithm::ALL.len()]
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.scheduler.dispose();
        self.should_quit = true;
    }
}
