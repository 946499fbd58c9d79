//! Color theme for the visualizer.
//!
//! Chrome uses the terminal's own grays; element tints use fixed RGB values
//! so each event kind reads the same on any background.

use ratatui::style::Color;

use crate::events::Tint;

// ============================================================================
// Chrome
// ============================================================================

/// Panel borders
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Focused items and titles
pub const COLOR_ACCENT: Color = Color::White;

/// Secondary text (hints, index labels)
pub const COLOR_DIM: Color = Color::DarkGray;

/// Element boxes with no tint
pub const COLOR_ELEMENT: Color = Color::Gray;

/// Completion line and "Complete" status
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117);

/// Skipped-event lines
pub const COLOR_WARNING: Color = Color::Rgb(251, 146, 60);

// ============================================================================
// Tints
// ============================================================================

pub const COLOR_SWAP_SOURCE: Color = Color::Rgb(244, 114, 182); // pink
pub const COLOR_SWAP_TARGET: Color = Color::Rgb(34, 211, 238); // cyan
pub const COLOR_COMPARE: Color = Color::Rgb(251, 191, 36); // amber
pub const COLOR_HIGHLIGHT: Color = Color::Rgb(34, 197, 94); // green
pub const COLOR_PIVOT: Color = Color::Rgb(192, 38, 211); // magenta
pub const COLOR_SORTED: Color = Color::Rgb(59, 130, 246); // blue
pub const COLOR_FOUND: Color = Color::Rgb(134, 239, 172); // light green

/// Terminal color for a tint.
pub fn tint_color(tint: Tint) -> Color {
    match tint {
        Tint::SwapSource => COLOR_SWAP_SOURCE,
        Tint::SwapTarget => COLOR_SWAP_TARGET,
        Tint::Compare => COLOR_COMPARE,
        Tint::Highlight => COLOR_HIGHLIGHT,
        Tint::Pivot => COLOR_PIVOT,
        Tint::Sorted => COLOR_SORTED,
        Tint::Found => COLOR_FOUND,
    }
}

/// Legend entries shown under the array, in display order.
pub const LEGEND: [(Tint, &str); 7] = [
    (Tint::SwapSource, "swap from"),
    (Tint::SwapTarget, "swap to"),
    (Tint::Compare, "compare"),
    (Tint::Highlight, "highlight"),
    (Tint::Pivot, "pivot"),
    (Tint::Sorted, "sorted"),
    (Tint::Found, "found"),
];
