//! Simulation driver implementing the Driver trait.
//!
//! `SimDriver` stands in for the real platform: credential store,
//! notification transport, theme system, and navigation are all replaced by
//! an in-memory recording. The same [`skiff_app::Orchestrator`] and
//! [`skiff_app::RootScreen`] code runs against it unchanged.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::Value;
use skiff_app::{Driver, EmojiTable, View};
use skiff_core::{ActivityState, Platform, ThemeColors};
use tokio::sync::Notify;

/// Error type for the simulation driver.
#[derive(Debug, Clone)]
pub struct SimDriverError(
    /// Failure description.
    pub String,
);

impl std::fmt::Display for SimDriverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SimDriverError: {}", self.0)
    }
}

impl std::error::Error for SimDriverError {}

/// One recorded platform interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverCall {
    /// Protocol client configured with a user-agent string.
    ConfigureUserAgent(String),
    /// Timezone auto-update dispatched.
    UpdateTimezone(String),
    /// Device-token registration dispatched.
    RegisterDeviceToken(String),
    /// Queued notification reply dispatched.
    DispatchQueuedReply {
        /// Opaque payload.
        data: Value,
        /// Reply text.
        text: String,
        /// Badge count.
        badge: i32,
        /// Completion flag.
        completed: bool,
    },
    /// Emoji alias table registered.
    RegisterEmojiTable {
        /// Number of aliases in the table.
        aliases: usize,
    },
    /// Immediate launch signaled.
    LaunchNow,
    /// Module-initialization hook invoked.
    InitializeModules,
    /// A view rendered.
    Render(View),
}

struct SimState {
    calls: Vec<DriverCall>,
    has_session: bool,
    platform: Platform,
    activity: ActivityState,
    theme: ThemeColors,
    timezone: String,
    fail_reply: bool,
}

/// Releases a gated credential load.
#[derive(Debug, Clone)]
pub struct CredentialGate(Arc<Notify>);

impl CredentialGate {
    /// Let the pending (or next) credential load resolve.
    pub fn release(&self) {
        self.0.notify_one();
    }
}

/// Read-only handle onto a driver's recording, usable after the driver has
/// been moved into a runtime.
#[derive(Clone)]
pub struct SimHandle {
    state: Arc<Mutex<SimState>>,
}

impl SimHandle {
    /// All recorded calls, in order.
    pub fn calls(&self) -> Vec<DriverCall> {
        lock(&self.state).calls.clone()
    }

    /// Recorded calls matching a predicate.
    pub fn calls_where(&self, predicate: impl Fn(&DriverCall) -> bool) -> Vec<DriverCall> {
        lock(&self.state).calls.iter().filter(|c| predicate(c)).cloned().collect()
    }
}

impl std::fmt::Debug for SimHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimHandle").field("calls", &lock(&self.state).calls.len()).finish()
    }
}

/// Simulation driver for deterministic bootstrap testing.
pub struct SimDriver {
    state: Arc<Mutex<SimState>>,
    credential_gate: Option<Arc<Notify>>,
}

fn lock(state: &Arc<Mutex<SimState>>) -> MutexGuard<'_, SimState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

impl SimDriver {
    /// Create a driver with defaults: no session, Android, foregrounded,
    /// ungated credentials.
    pub fn new() -> Self {
        let state = SimState {
            calls: Vec::new(),
            has_session: false,
            platform: Platform::Android,
            activity: ActivityState::Active,
            theme: ThemeColors {
                header_background: "#145dbf".into(),
                header_text: "#ffffff".into(),
                header_center: "#1153ab".into(),
            },
            timezone: "UTC".into(),
            fail_reply: false,
        };
        Self { state: Arc::new(Mutex::new(state)), credential_gate: None }
    }

    /// Set whether a persisted session exists.
    pub fn with_session(self, has_session: bool) -> Self {
        lock(&self.state).has_session = has_session;
        self
    }

    /// Set the platform family.
    pub fn with_platform(self, platform: Platform) -> Self {
        lock(&self.state).platform = platform;
        self
    }

    /// Set the process activity state.
    pub fn with_activity_state(self, activity: ActivityState) -> Self {
        lock(&self.state).activity = activity;
        self
    }

    /// Set the live theme colors.
    pub fn with_theme(self, theme: ThemeColors) -> Self {
        lock(&self.state).theme = theme;
        self
    }

    /// Set the device timezone.
    pub fn with_timezone(self, timezone: &str) -> Self {
        lock(&self.state).timezone = timezone.into();
        self
    }

    /// Make the reply dispatch fail.
    pub fn with_failing_reply(self) -> Self {
        lock(&self.state).fail_reply = true;
        self
    }

    /// Gate the credential load on an explicit release, for controlling
    /// prerequisite completion order.
    pub fn gated_credentials(&mut self) -> CredentialGate {
        let gate = Arc::new(Notify::new());
        self.credential_gate = Some(Arc::clone(&gate));
        CredentialGate(gate)
    }

    /// Handle for inspecting the recording after the driver moves away.
    pub fn handle(&self) -> SimHandle {
        SimHandle { state: Arc::clone(&self.state) }
    }

    fn record(&self, call: DriverCall) {
        tracing::debug!(?call, "sim driver call");
        lock(&self.state).calls.push(call);
    }
}

impl Default for SimDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Driver for SimDriver {
    type Error = SimDriverError;

    fn load_credentials(&mut self) -> impl std::future::Future<Output = Result<bool, SimDriverError>> + Send {
        let gate = self.credential_gate.clone();
        let state = Arc::clone(&self.state);
        async move {
            if let Some(gate) = gate {
                gate.notified().await;
            }
            Ok(lock(&state).has_session)
        }
    }

    fn configure_user_agent(&mut self, user_agent: &str) {
        self.record(DriverCall::ConfigureUserAgent(user_agent.into()));
    }

    fn device_timezone(&self) -> String {
        lock(&self.state).timezone.clone()
    }

    fn update_timezone(&mut self, timezone: &str) {
        self.record(DriverCall::UpdateTimezone(timezone.into()));
    }

    fn register_device_token(&mut self, token: &str) {
        self.record(DriverCall::RegisterDeviceToken(token.into()));
    }

    fn current_theme(&self) -> ThemeColors {
        lock(&self.state).theme.clone()
    }

    fn dispatch_queued_reply(
        &mut self,
        data: Value,
        text: String,
        badge: i32,
        completed: bool,
    ) -> impl std::future::Future<Output = Result<(), SimDriverError>> + Send {
        let state = Arc::clone(&self.state);
        async move {
            let fail = {
                let mut guard = lock(&state);
                guard.calls.push(DriverCall::DispatchQueuedReply { data, text, badge, completed });
                guard.fail_reply
            };
            if fail {
                return Err(SimDriverError("reply dispatch failed".into()));
            }
            Ok(())
        }
    }

    fn register_emoji_table(&mut self, table: &EmojiTable) {
        self.record(DriverCall::RegisterEmojiTable { aliases: table.len() });
    }

    fn platform(&self) -> Platform {
        lock(&self.state).platform
    }

    fn activity_state(&self) -> ActivityState {
        lock(&self.state).activity
    }

    fn launch_now(&mut self) {
        self.record(DriverCall::LaunchNow);
    }

    fn initialize_modules(&mut self) {
        self.record(DriverCall::InitializeModules);
    }

    fn render(&mut self, view: &View) -> Result<(), SimDriverError> {
        self.record(DriverCall::Render(view.clone()));
        Ok(())
    }
}
