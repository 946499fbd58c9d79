//! Keyboard handling for the App.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::App;

impl App {
    /// Map one key press onto a controller operation.
    ///
    /// | Key | Action |
    /// |-----|--------|
    /// | Up / k, Down / j | Move the menu cursor |
    /// | Enter | Select the algorithm under the cursor |
    /// | Space | Play or pause |
    /// | p | Pause |
    /// | r | Restart |
    /// | Esc | Reset the view |
    /// | q, Ctrl+C | Quit |
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        // Release and repeat events arrive on some terminals; act on presses only
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.menu_up(),
            KeyCode::Down | KeyCode::Char('j') => self.menu_down(),
            KeyCode::Enter => self.select_algorithm(self.highlighted_algorithm(), now),
            KeyCode::Char(' ') => self.toggle_pause(now),
            KeyCode::Char('p') => self.pause(),
            KeyCode::Char('r') => self.restart(now),
            KeyCode::Esc => self.reset_view(),
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }
}
