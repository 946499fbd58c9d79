//! Small state types shared by the controller and the UI.

/// What the visualizer is doing, derived from the scheduler and selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    /// No algorithm selected
    #[default]
    Idle,
    Playing,
    Paused,
    /// Stream exhausted; only restart or a new selection does anything
    Complete,
}

impl PlaybackStatus {
    pub fn label(self) -> &'static str {
        match self {
            PlaybackStatus::Idle => "Select an algorithm",
            PlaybackStatus::Playing => "Playing",
            PlaybackStatus::Paused => "Paused",
            PlaybackStatus::Complete => "Complete",
        }
    }
}
