//! Sidebar menu, status bar, operation log and key hints.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, PlaybackStatus};
use crate::producers::{Algorithm, AlgorithmCategory};

use super::theme::{
    tint_color, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_SUCCESS, COLOR_WARNING, LEGEND,
};

const COMPLETION_PREFIX: &str = "Visualization complete!";

fn panel(title: &str) -> Block<'static> {
    Block::bordered()
        .title(format!(" {title} "))
        .border_style(Style::default().fg(COLOR_BORDER))
        .title_style(Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD))
}

/// Algorithms grouped by category; the cursor row is reversed and the active
/// algorithm carries a dot.
pub fn render_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = Vec::new();
    for category in [AlgorithmCategory::Sorting, AlgorithmCategory::Searching] {
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        lines.push(Line::styled(
            category.label(),
            Style::default().fg(COLOR_DIM).add_modifier(Modifier::BOLD),
        ));

        for (index, algorithm) in Algorithm::ALL.iter().enumerate() {
            if algorithm.category() != category {
                continue;
            }
            let marker = if app.selected() == Some(*algorithm) { "●" } else { " " };
            let mut style = Style::default().fg(COLOR_ACCENT);
            if index == app.menu_index {
                style = style.add_modifier(Modifier::REVERSED);
            }
            lines.push(Line::styled(format!("{marker} {}", algorithm.label()), style));
        }
    }

    frame.render_widget(Paragraph::new(lines).block(panel("Algorithms")), area);
}

/// One-line summary: algorithm, playback state, step count and cadence.
pub fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let status = app.status();
    let status_color = match status {
        PlaybackStatus::Complete => COLOR_SUCCESS,
        PlaybackStatus::Paused => COLOR_WARNING,
        _ => COLOR_ACCENT,
    };

    // Name what is actually playing; the menu cursor may be elsewhere
    let title = app.scheduler().algorithm_name().unwrap_or("algoviz");
    let mut spans = vec![Span::styled(
        status.label(),
        Style::default().fg(status_color).add_modifier(Modifier::BOLD),
    )];
    if status != PlaybackStatus::Idle {
        spans.push(Span::styled(
            format!(
                "  ·  step {}  ·  {} ms/step",
                app.scheduler().step_index(),
                app.cadence().as_millis()
            ),
            Style::default().fg(COLOR_DIM),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(panel(title)), area);
}

/// Color key for the tints.
pub fn render_legend(frame: &mut Frame, area: Rect) {
    let spans: Vec<Span> = LEGEND
        .iter()
        .flat_map(|(tint, label)| {
            [
                Span::styled("■ ", Style::default().fg(tint_color(*tint))),
                Span::styled(format!("{label}  "), Style::default().fg(COLOR_DIM)),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true }), area);
}

/// Operation log, scrolled so the newest line is always visible.
pub fn render_log(frame: &mut Frame, area: Rect, app: &App) {
    let log = app.operation_log();
    let visible = area.height.saturating_sub(2) as usize;
    let start = log.len().saturating_sub(visible);

    let lines: Vec<Line> = log[start..]
        .iter()
        .map(|line| {
            let style = if line.starts_with(COMPLETION_PREFIX) {
                Style::default().fg(COLOR_SUCCESS).add_modifier(Modifier::BOLD)
            } else if line.contains(": Skipped ") {
                Style::default().fg(COLOR_WARNING)
            } else {
                Style::default().fg(COLOR_ACCENT)
            };
            Line::styled(line.as_str(), style)
        })
        .collect();

    let body = if lines.is_empty() {
        Paragraph::new(Line::styled(
            "Select an algorithm and press Enter to start",
            Style::default().fg(COLOR_DIM),
        ))
    } else {
        Paragraph::new(lines)
    };
    frame.render_widget(body.block(panel("Operations")), area);
}

/// Key reference for the bottom row.
pub fn render_hints(frame: &mut Frame, area: Rect) {
    let hints = [
        ("↑↓", "choose"),
        ("enter", "run"),
        ("space", "play/pause"),
        ("r", "restart"),
        ("esc", "reset"),
        ("q", "quit"),
    ];
    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(*key, Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)),
                Span::styled(format!(" {action}   "), Style::default().fg(COLOR_DIM)),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
