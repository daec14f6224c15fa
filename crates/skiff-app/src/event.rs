//! Routing events.
//!
//! Routing is driven by an explicit channel instead of a global event bus:
//! external actors hold a [`RouteSender`], the root screen consumes the
//! [`RouteReceiver`]. Dropping the receiver is the teardown; there is no
//! listener bookkeeping.

use tokio::sync::mpsc;

/// Events that select the terminal screen.
///
/// Each carries a flag requesting the externally supplied
/// module-initialization hook before the next render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteEvent {
    /// Route to the login / server-selection flow.
    LaunchLogin {
        /// Run the module-initialization hook first.
        initialize_modules: bool,
    },
    /// Route to the main channel view.
    LaunchChannel {
        /// Run the module-initialization hook first.
        initialize_modules: bool,
    },
}

/// Sending half of the routing channel.
pub type RouteSender = mpsc::UnboundedSender<RouteEvent>;

/// Receiving half of the routing channel.
pub type RouteReceiver = mpsc::UnboundedReceiver<RouteEvent>;

/// Create the routing channel.
pub fn route_channel() -> (RouteSender, RouteReceiver) {
    mpsc::unbounded_channel()
}
