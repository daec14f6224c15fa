//! Screen router.
//!
//! A two-state latch: starts at [`Route::Loading`] and moves to exactly one
//! of the terminal routes on the first routing event. Later events are
//! ignored: first wins, the latch never reverts.

use skiff_core::AppContext;

use crate::{Route, RouteEvent, RouterAction, View};

/// One-shot route latch.
///
/// Pure state machine: consumes [`RouteEvent`] inputs and produces
/// [`RouterAction`] instructions for the runtime. No I/O dependencies.
#[derive(Debug, Clone)]
pub struct Router {
    route: Route,
}

impl Router {
    /// Create a router in the loading state.
    pub fn new() -> Self {
        Self { route: Route::Loading }
    }

    /// Currently latched route.
    pub fn route(&self) -> Route {
        self.route
    }

    /// Process a routing event.
    ///
    /// The first terminal event latches the route and yields actions; every
    /// subsequent event yields nothing.
    pub fn handle(&mut self, event: RouteEvent) -> Vec<RouterAction> {
        if self.route != Route::Loading {
            tracing::debug!(?event, current = ?self.route, "route already latched, ignoring");
            return Vec::new();
        }

        let (target, initialize_modules) = match event {
            RouteEvent::LaunchLogin { initialize_modules } => (Route::Login, initialize_modules),
            RouteEvent::LaunchChannel { initialize_modules } => {
                (Route::Channel, initialize_modules)
            },
        };
        self.route = target;

        let mut actions = Vec::new();
        if initialize_modules {
            actions.push(RouterAction::InitializeModules);
        }
        actions.push(RouterAction::Render);
        actions
    }

    /// Select the view for the current route.
    ///
    /// While loading, an authenticated user with known toolbar colors gets a
    /// themed skeleton so the real channel list can load without a flash;
    /// otherwise a generic indicator.
    pub fn view(&self, ctx: &AppContext) -> View {
        match self.route {
            Route::Channel => View::Channel { background_refresh: false },
            Route::Login => View::Login { background_refresh: true },
            Route::Loading => match (&ctx.toolbar, ctx.authenticated) {
                (Some(toolbar), true) => View::ThemedSkeleton { toolbar: toolbar.clone() },
                _ => View::PlainLoading,
            },
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
