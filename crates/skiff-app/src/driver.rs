//! Driver trait for platform side effects.
//!
//! The [`Driver`] trait decouples the bootstrap layer from platform
//! specifics. Production frontends implement it on top of the real credential
//! store, notification transport, and navigation stack; the simulation
//! harness implements it with recorded calls, so the same orchestration code
//! runs in both.

use std::future::Future;

use serde_json::Value;
use skiff_core::{ActivityState, Platform, ThemeColors};

use crate::{EmojiTable, View};

/// Platform I/O consumed by the bootstrap layer.
///
/// Dispatch-style methods are fire-and-forget from the caller's perspective:
/// they hand the work to an external subsystem and return immediately. The
/// two async operations are the prerequisite credential load and the queued
/// reply dispatch; their failures propagate uncaught.
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Resolve once locally persisted session data is available.
    ///
    /// Returns whether a persisted session exists for the current user.
    fn load_credentials(&mut self) -> impl Future<Output = Result<bool, Self::Error>> + Send;

    /// Configure the outbound protocol client with a device-identifying
    /// user-agent string.
    fn configure_user_agent(&mut self, user_agent: &str);

    /// Device's current timezone identifier.
    fn device_timezone(&self) -> String;

    /// Dispatch the timezone auto-update action.
    fn update_timezone(&mut self, timezone: &str);

    /// Dispatch device-token registration.
    fn register_device_token(&mut self, token: &str);

    /// Header colors of the currently active theme.
    fn current_theme(&self) -> ThemeColors;

    /// Dispatch the queued notification-reply action.
    ///
    /// Awaited; errors are not retried at this layer.
    fn dispatch_queued_reply(
        &mut self,
        data: Value,
        text: String,
        badge: i32,
        completed: bool,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Register the system emoji alias table into shared state.
    fn register_emoji_table(&mut self, table: &EmojiTable);

    /// OS family the process runs on.
    fn platform(&self) -> Platform;

    /// Current process activity state.
    fn activity_state(&self) -> ActivityState;

    /// Signal immediate app launch.
    fn launch_now(&mut self);

    /// Externally supplied module-initialization hook, requested by routing
    /// events.
    fn initialize_modules(&mut self);

    /// Render the given view.
    fn render(&mut self, view: &View) -> Result<(), Self::Error>;
}
