//! Terminal algorithm visualizer.
//!
//! Algorithms are written as [`producers::EventProducer`]s that narrate
//! themselves as a lazy stream of [`events::AlgorithmEvent`]s. The
//! [`scheduler::Scheduler`] plays one event per tick onto a
//! [`surface::PresentationSurface`], keeps the operation log, and supports
//! pause, resume, restart and disposal. [`app::App`] maps user intent onto the
//! scheduler and [`ui`] draws it with ratatui.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod producers;
pub mod scheduler;
pub mod surface;
pub mod telemetry;
pub mod terminal;
pub mod ui;
