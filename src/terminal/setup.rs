//! Raw escape-sequence side of entering and leaving the TUI.
//!
//! `TerminalManager` calls these for the normal path; the panic hook calls
//! [`emergency_restore`] when there is no manager left to drop.

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Enter TUI mode.
///
/// This sets up the terminal for drawing:
/// - Enters the alternate screen (the shell's content comes back on exit)
/// - Hides the cursor so it does not flicker over the array boxes
///
/// Raw mode is enabled separately by the caller.
///
/// # Arguments
///
/// * `writer` - The output writer (typically stdout)
///
/// # Errors
///
/// Returns an error if either terminal command fails.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, Hide)
}

/// Leave TUI mode and restore the terminal to normal state.
///
/// Cleanup runs in this order:
/// 1. Disables raw mode
/// 2. Leaves the alternate screen
/// 3. Shows the cursor
///
/// Errors are ignored, so this never fails and is safe to call more than once.
///
/// # Arguments
///
/// * `writer` - The output writer (typically stdout)
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    // Raw mode first so anything printed afterwards gets normal line endings
    let _ = disable_raw_mode();

    let _ = execute!(writer, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// [`leave_tui_mode`] on stdout, for paths that have no terminal handle.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}
