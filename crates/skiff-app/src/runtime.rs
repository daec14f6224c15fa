//! Root screen runtime.
//!
//! Wires the orchestrator, router, and screen factory over a platform
//! [`Driver`]: renders the loading view, runs the bootstrap sequence to its
//! launch decision, then consumes routing events until the channel closes.

use skiff_core::{AppContext, NotificationCenter, StateStore};

use crate::{
    BootstrapConfig, Driver, Orchestrator, Route, RouteReceiver, Router, RouterAction,
    ScreenFactory,
};

/// The first screen of the process.
///
/// Owns the application context for the duration of the bootstrap (single
/// writer at a time). Teardown is dropping the value: the route receiver
/// closes with it, while in-flight prerequisite futures are never cancelled.
pub struct RootScreen<D: Driver, S> {
    driver: D,
    orchestrator: Orchestrator,
    router: Router,
    screens: ScreenFactory<S>,
    store: StateStore,
    ctx: AppContext,
    notifications: NotificationCenter,
    events: RouteReceiver,
}

impl<D: Driver, S> RootScreen<D, S> {
    /// Assemble the root screen.
    #[allow(clippy::too_many_arguments, reason = "explicit wiring of collaborators")]
    pub fn new(
        driver: D,
        config: BootstrapConfig,
        screens: ScreenFactory<S>,
        store: StateStore,
        ctx: AppContext,
        notifications: NotificationCenter,
        events: RouteReceiver,
    ) -> Self {
        Self {
            driver,
            orchestrator: Orchestrator::new(config),
            router: Router::new(),
            screens,
            store,
            ctx,
            notifications,
            events,
        }
    }

    /// Run the screen: bootstrap, then route.
    ///
    /// Returns the route that was latched when the routing channel closed
    /// (still [`Route::Loading`] if no event ever arrived).
    ///
    /// # Errors
    ///
    /// Propagates driver failures from the prerequisite load, the reply
    /// dispatch, and rendering.
    pub async fn run(mut self) -> Result<Route, D::Error> {
        let view = self.router.view(&self.ctx);
        self.driver.render(&view)?;

        self.orchestrator
            .run(&mut self.driver, &self.store, &mut self.ctx, &mut self.notifications)
            .await?;

        while let Some(event) = self.events.recv().await {
            for action in self.router.handle(event) {
                match action {
                    RouterAction::InitializeModules => self.driver.initialize_modules(),
                    RouterAction::Render => {
                        // Force the lazy screen module for the taken branch
                        // before painting it.
                        let _ = self.screens.screen(self.router.route());
                        let view = self.router.view(&self.ctx);
                        self.driver.render(&view)?;
                    },
                }
            }
        }

        Ok(self.router.route())
    }

    /// Current route latch.
    pub fn route(&self) -> Route {
        self.router.route()
    }

    /// Application context.
    pub fn context(&self) -> &AppContext {
        &self.ctx
    }
}
