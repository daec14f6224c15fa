//! Router side-effects.
//!
//! Instructions produced by the [`crate::Router`] latch for the runtime to
//! execute.

/// Actions produced when a routing event latches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterAction {
    /// Invoke the externally supplied module-initialization hook.
    InitializeModules,
    /// Re-render the screen.
    Render,
}
