//! Core state and collaborator contracts for the Skiff client.
//!
//! Process-wide, in-memory state shared between the bootstrap layer and the
//! rest of the application. Nothing here performs I/O; these types are the
//! narrow contracts the bootstrap sequencer consumes.
//!
//! # Components
//!
//! - [`StateStore`]: readiness flags published over a watch channel
//! - [`AppContext`]: explicit application context (replaces a global)
//! - [`NotificationCenter`]: the pending notification-reply record
//! - [`ToolbarTheme`] / [`ThemeColors`]: persisted and live theme colors
//! - [`Platform`] / [`ActivityState`]: platform discriminators

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod context;
mod notify;
mod platform;
mod store;
mod theme;

pub use context::{AppContext, DeviceInfo};
pub use notify::{NotificationCenter, PendingNotification};
pub use platform::{ActivityState, Platform};
pub use store::{BootstrapState, StateStore};
pub use theme::{ThemeColors, ToolbarTheme};
