//! Panic hook that gives the terminal back before the report prints.

use super::setup::emergency_restore;
use std::panic;

/// Chain a terminal-restoring step in front of the current panic hook.
///
/// Call after `color_eyre::install()` so its report handler is the one that
/// ends up printing.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_panic_hook_does_not_panic() {
        setup_panic_hook();
        let _ = panic::take_hook();
    }
}
