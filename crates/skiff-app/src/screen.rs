//! Lazy screen construction.
//!
//! The two terminal screens are deferred: each is built by its constructor
//! on first request and cached, so a bootstrap that routes to one branch
//! never pays for the other.

use std::sync::OnceLock;

use crate::Route;

type Constructor<S> = Box<dyn Fn() -> S + Send + Sync>;

struct LazySlot<S> {
    build: Constructor<S>,
    cell: OnceLock<S>,
}

impl<S> LazySlot<S> {
    fn get(&self) -> &S {
        self.cell.get_or_init(|| (self.build)())
    }

    fn is_built(&self) -> bool {
        self.cell.get().is_some()
    }
}

/// Lazily-initialized screen factory keyed by terminal route.
pub struct ScreenFactory<S> {
    login: LazySlot<S>,
    channel: LazySlot<S>,
}

impl<S> ScreenFactory<S> {
    /// Create a factory from the two screen constructors. Neither runs until
    /// its route is first requested.
    pub fn new(
        login: impl Fn() -> S + Send + Sync + 'static,
        channel: impl Fn() -> S + Send + Sync + 'static,
    ) -> Self {
        Self {
            login: LazySlot { build: Box::new(login), cell: OnceLock::new() },
            channel: LazySlot { build: Box::new(channel), cell: OnceLock::new() },
        }
    }

    /// Screen for the given route, constructing it on first access. The
    /// loading route has no screen module.
    pub fn screen(&self, route: Route) -> Option<&S> {
        match route {
            Route::Login => Some(self.login.get()),
            Route::Channel => Some(self.channel.get()),
            Route::Loading => None,
        }
    }

    /// Whether the screen for a route has been constructed.
    pub fn is_built(&self, route: Route) -> bool {
        match route {
            Route::Login => self.login.is_built(),
            Route::Channel => self.channel.is_built(),
            Route::Loading => false,
        }
    }
}

impl<S> std::fmt::Debug for ScreenFactory<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreenFactory")
            .field("login_built", &self.login.is_built())
            .field("channel_built", &self.channel.is_built())
            .finish()
    }
}
