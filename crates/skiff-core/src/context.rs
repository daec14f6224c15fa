//! Explicit application context.
//!
//! Replaces a module-level mutable "app" object with a context struct passed
//! by reference into the orchestrator and router. Mutation convention: one
//! actor writes at a time; the bootstrap layer is single-threaded and relies
//! on its fixed step ordering rather than locking.

use crate::{notify::PendingNotification, theme::ToolbarTheme};

/// Static device identity, feeds the outbound user-agent string.
#[derive(Debug, Clone, Default)]
pub struct DeviceInfo {
    /// Device model name.
    pub model: String,
    /// OS version string.
    pub os_version: String,
}

/// Process-wide application context shared with the bootstrap layer.
#[derive(Debug, Clone, Default)]
pub struct AppContext {
    /// A persisted session exists for the current user.
    pub authenticated: bool,
    /// Toolbar colors captured on a previous bootstrap, if any.
    pub toolbar: Option<ToolbarTheme>,
    /// Device push token, if registration has already produced one. The
    /// token may also arrive later through a separate path; a missing token
    /// at bootstrap is an expected no-op.
    pub device_token: Option<String>,
    /// Reply payload cached while the process was warm when the reply
    /// arrived, consumed once by the reply resolver.
    pub cached_reply: Option<PendingNotification>,
    /// Deferred launch instruction for the external lifecycle watcher:
    /// relaunch when the process next becomes active.
    pub relaunch_on_active: bool,
    /// Static device identity.
    pub device: DeviceInfo,
}

impl AppContext {
    /// Create a context for the given device.
    pub fn new(device: DeviceInfo) -> Self {
        Self { device, ..Self::default() }
    }

    /// Device-identifying user-agent string for the outbound protocol
    /// client.
    pub fn user_agent(&self) -> String {
        format!(
            "Skiff/{} ({}; {})",
            env!("CARGO_PKG_VERSION"),
            self.device.model,
            self.device.os_version
        )
    }
}
