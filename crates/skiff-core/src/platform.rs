//! Platform discriminators.

/// OS family the process is running on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Android family: launch is unconditional.
    Android,
    /// iOS family: launch depends on the current activity state.
    Ios,
}

/// Current process activity state, as reported by the app lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityState {
    /// Foregrounded and interactive.
    Active,
    /// Transitioning between foreground and background.
    Inactive,
    /// Backgrounded.
    Background,
}

impl ActivityState {
    /// Whether the process is currently foregrounded.
    pub fn is_foreground(self) -> bool {
        matches!(self, Self::Active)
    }
}
