/// Countdown state as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    /// Stopped with a full session loaded
    Idle,
    Running,
    /// Stopped part-way; remaining time frozen
    Paused,
}

impl TimerPhase {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Ready",
            Self::Running => "Focusing",
            Self::Paused => "Paused",
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
    LoggingMood,
    EditingSessionLength,
    ConfirmPurge, // Blocks every other key until answered
}
