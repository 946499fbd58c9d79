//! Terminal rendering.
//!
//! ```text
//! ┌ Algorithms ┐┌ Bubble Sort ───────────────────────┐
//! │ Sorting    ││ Playing · step 3 · 1000 ms/step     │
//! │● Bubble    │└─────────────────────────────────────┘
//! │  Insertion │  ┌──┐ ┌──┐ ┌──┐
//! │  Quick     │  │ 7│ │23│ │15│   ...
//! │            │  └──┘ └──┘ └──┘
//! │ Searching  │  ■ swap from ■ swap to ...
//! │  Binary    │┌ Operations ─────────────────────────┐
//! └────────────┘└─────────────────────────────────────┘
//!  ↑↓ choose  enter run  space play/pause ...
//! ```
//!
//! Rendering only reads the [`App`]; the scheduler is the sole writer of the
//! surface it draws.

mod array_view;
mod panels;
pub mod theme;

pub use array_view::ArrayView;

use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};

use crate::app::App;

/// Width of the algorithm menu.
pub const SIDEBAR_WIDTH: u16 = 22;

/// Rows for the element boxes plus their index labels.
const ARRAY_HEIGHT: u16 = 4;

/// Draw the whole screen.
pub fn render(frame: &mut Frame, app: &App) {
    let [body, hints] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());
    let [sidebar, main] =
        Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)]).areas(body);
    let [status, _, array, legend, log] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(ARRAY_HEIGHT),
        Constraint::Length(2),
        Constraint::Min(3),
    ])
    .areas(main);

    panels::render_sidebar(frame, sidebar, app);
    panels::render_status(frame, status, app);
    frame.render_widget(ArrayView::new(app.surface().cells()), array);
    panels::render_legend(frame, legend);
    panels::render_log(frame, log, app);
    panels::render_hints(frame, hints);
}
