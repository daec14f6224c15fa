//! Bootstrap orchestrator.
//!
//! Awaits the two startup prerequisites in parallel, runs the fixed
//! post-hydration sequence, then issues the platform launch decision. The
//! whole sequence runs exactly once per process lifetime; a second `run` is
//! a no-op returning the recorded decision.

use skiff_core::{AppContext, NotificationCenter, Platform, StateStore, ToolbarTheme};

use crate::{
    BootstrapPhase, Driver, LaunchDecision, emoji, reply::resolve_pending_reply,
    wait_for_hydration,
};

/// Feature flags consumed by the bootstrap sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct BootstrapConfig {
    /// Dispatch the timezone auto-update action during post-hydration.
    pub auto_update_timezone: bool,
}

/// Startup sequencer.
///
/// State machine over [`BootstrapPhase`]; [`Dispatched`](BootstrapPhase::Dispatched)
/// is terminal. No retry or backoff lives here: prerequisite failures and
/// reply-dispatch failures propagate to the caller.
#[derive(Debug, Clone)]
pub struct Orchestrator {
    config: BootstrapConfig,
    phase: BootstrapPhase,
    decision: Option<LaunchDecision>,
}

impl Orchestrator {
    /// Create an orchestrator that has not started.
    pub fn new(config: BootstrapConfig) -> Self {
        Self { config, phase: BootstrapPhase::Init, decision: None }
    }

    /// Current phase.
    pub fn phase(&self) -> BootstrapPhase {
        self.phase
    }

    /// Run the bootstrap sequence to its launch decision.
    ///
    /// Fires the credential load and the hydration wait concurrently and
    /// proceeds only once both have resolved. The post-hydration steps then
    /// run in fixed order: timezone auto-update (flag-gated), device-token
    /// registration (token-gated), theme snapshot, notification-reply
    /// resolution, emoji-table registration. Finally the platform launch
    /// decision is issued and the orchestrator goes quiet for the remainder
    /// of the process lifetime.
    ///
    /// # Errors
    ///
    /// Propagates credential-load and reply-dispatch failures from the
    /// driver, uncaught.
    pub async fn run<D: Driver>(
        &mut self,
        driver: &mut D,
        store: &StateStore,
        ctx: &mut AppContext,
        notifications: &mut NotificationCenter,
    ) -> Result<LaunchDecision, D::Error> {
        if let Some(decision) = self.decision {
            tracing::debug!("bootstrap already dispatched, ignoring re-run");
            return Ok(decision);
        }

        self.phase = BootstrapPhase::AwaitingPrereqs;
        // Not a prerequisite: the protocol client picks the user agent up
        // whenever it next connects.
        driver.configure_user_agent(&ctx.user_agent());

        let (session, ()) = tokio::join!(driver.load_credentials(), wait_for_hydration(store));
        ctx.authenticated = session?;

        self.phase = BootstrapPhase::RunningPostHydration;
        tracing::debug!(authenticated = ctx.authenticated, "prerequisites resolved");

        // 1. Timezone auto-update, behind its feature flag.
        if self.config.auto_update_timezone {
            let timezone = driver.device_timezone();
            driver.update_timezone(&timezone);
        }

        // 2. Device-token registration; the token may arrive later through a
        //    separate path, so a missing token is a no-op.
        if let Some(token) = ctx.device_token.clone() {
            driver.register_device_token(&token);
        }

        // 3. Theme snapshot: persist toolbar colors only when the header
        //    background actually changed.
        let theme = driver.current_theme();
        let unchanged =
            ctx.toolbar.as_ref().is_some_and(|t| t.background == theme.header_background);
        if !unchanged {
            ctx.toolbar = Some(ToolbarTheme {
                background: theme.header_background,
                text: theme.header_text,
                center: theme.header_center,
            });
        }

        // 4. Deferred notification-reply resolution.
        resolve_pending_reply(driver, notifications, ctx).await?;

        // 5. Emoji alias table, unconditional.
        let table = emoji::alias_table();
        driver.register_emoji_table(&table);

        let decision = self.launch(driver, ctx);
        self.phase = BootstrapPhase::Dispatched;
        self.decision = Some(decision);
        tracing::debug!(?decision, "bootstrap dispatched");

        Ok(decision)
    }

    /// Issue the platform-specific launch decision.
    fn launch<D: Driver>(&self, driver: &mut D, ctx: &mut AppContext) -> LaunchDecision {
        match driver.platform() {
            Platform::Android => {
                driver.launch_now();
                LaunchDecision::LaunchNow
            },
            Platform::Ios => {
                if driver.activity_state().is_foreground() {
                    driver.launch_now();
                    LaunchDecision::LaunchNow
                } else {
                    ctx.relaunch_on_active = true;
                    LaunchDecision::DeferUntilActive
                }
            },
        }
    }
}
