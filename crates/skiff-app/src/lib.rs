//! Bootstrap layer for the Skiff client.
//!
//! Decides, at process startup, what the user sees first: a loading
//! placeholder, the login flow, or the main channel view. Pure state machines
//! plus a generic runtime over a platform driver, so the same orchestration
//! code runs in production and in simulation tests.
//!
//! # Components
//!
//! - [`Orchestrator`]: awaits prerequisites, runs the post-hydration
//!   sequence, issues the platform launch decision
//! - [`Router`]: one-shot route latch selecting the rendered [`View`]
//! - [`Driver`]: trait for platform-specific side effects
//! - [`RootScreen`]: runtime wiring orchestrator, router, and driver
//! - [`wait_for_hydration`]: one-shot readiness wait on the state store
//! - [`resolve_pending_reply`]: deferred notification-reply resolution

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod driver;
mod emoji;
mod event;
mod hydration;
mod orchestrator;
mod reply;
mod router;
mod runtime;
mod screen;
mod state;

pub use action::RouterAction;
pub use driver::Driver;
pub use emoji::{EmojiTable, alias_table};
pub use event::{RouteEvent, RouteReceiver, RouteSender, route_channel};
pub use hydration::wait_for_hydration;
pub use orchestrator::{BootstrapConfig, Orchestrator};
pub use reply::resolve_pending_reply;
pub use router::Router;
pub use runtime::RootScreen;
pub use screen::ScreenFactory;
pub use state::{BootstrapPhase, LaunchDecision, Route, View};
