//! Bootstrap and routing state types.

use skiff_core::ToolbarTheme;

/// Which screen the router has selected.
///
/// Transitions are monotonic: `Loading -> Login` or `Loading -> Channel`,
/// never back, and at most one terminal transition fires per process
/// lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// No terminal screen selected yet.
    Loading,
    /// Login / server-selection flow.
    Login,
    /// Main channel view.
    Channel,
}

/// Phase of the bootstrap orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapPhase {
    /// Not started.
    Init,
    /// Waiting for credentials and hydration.
    AwaitingPrereqs,
    /// Running the fixed post-hydration sequence.
    RunningPostHydration,
    /// Launch decision issued; terminal.
    Dispatched,
}

/// Platform-specific launch decision issued after the post-hydration
/// sequence. Derived, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchDecision {
    /// Launch immediately.
    LaunchNow,
    /// Relaunch when the process next becomes active; recorded for the
    /// external lifecycle watcher.
    DeferUntilActive,
}

/// What the root screen renders. Pure function of the route latch and the
/// application context, re-evaluated on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Main channel view, wrapped with shared app context.
    Channel {
        /// Background refresh is disabled for the channel view.
        background_refresh: bool,
    },
    /// Login / server-selection screen, wrapped with shared app context.
    Login {
        /// Background refresh stays enabled for the login flow.
        background_refresh: bool,
    },
    /// Themed empty toolbar plus a channel-loading skeleton; shown while
    /// loading when the user is authenticated and toolbar colors are known.
    ThemedSkeleton {
        /// Toolbar colors captured on a previous bootstrap.
        toolbar: ToolbarTheme,
    },
    /// Generic loading indicator.
    PlainLoading,
}
