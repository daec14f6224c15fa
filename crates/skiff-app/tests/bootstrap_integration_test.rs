//! Integration tests for the bootstrap sequence.
//!
//! Drives the real orchestrator and root screen against the simulation
//! driver and asserts on the exact sequence of recorded platform calls.

use serde_json::json;
use skiff_app::{
    BootstrapConfig, BootstrapPhase, LaunchDecision, Orchestrator, RootScreen, Route, RouteEvent,
    ScreenFactory, View, alias_table, resolve_pending_reply, route_channel,
};
use skiff_core::{
    ActivityState, AppContext, NotificationCenter, PendingNotification, Platform, StateStore,
    ThemeColors, ToolbarTheme,
};
use skiff_harness::{DriverCall, SimDriver, SimHandle};

fn reply(completed: bool) -> PendingNotification {
    PendingNotification {
        data: json!({ "channel_id": "general" }),
        text: "hi".into(),
        badge: 3,
        completed,
    }
}

fn reply_calls(handle: &SimHandle) -> Vec<DriverCall> {
    handle.calls_where(|c| matches!(c, DriverCall::DispatchQueuedReply { .. }))
}

/// Run a fresh orchestrator to completion over an already-hydrated store.
async fn bootstrap(
    driver: &mut SimDriver,
    ctx: &mut AppContext,
    notifications: &mut NotificationCenter,
    config: BootstrapConfig,
) -> LaunchDecision {
    let store = StateStore::new();
    store.mark_hydration_complete();
    Orchestrator::new(config).run(driver, &store, ctx, notifications).await.expect("bootstrap")
}

#[tokio::test]
async fn sequence_waits_for_credentials_after_hydration() {
    let store = StateStore::new();
    let mut driver = SimDriver::new().with_session(true);
    let gate = driver.gated_credentials();
    let handle = driver.handle();

    let task = tokio::spawn({
        let store = store.clone();
        async move {
            let mut ctx = AppContext::default();
            let mut notifications = NotificationCenter::new();
            Orchestrator::new(BootstrapConfig::default())
                .run(&mut driver, &store, &mut ctx, &mut notifications)
                .await
        }
    });

    // Hydration resolves first; credentials are still gated.
    store.mark_hydration_complete();
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
    assert!(!task.is_finished());
    let calls = handle.calls();
    assert_eq!(calls.len(), 1, "only the user-agent call may precede the prerequisites");
    assert!(matches!(calls[0], DriverCall::ConfigureUserAgent(_)));

    gate.release();
    let decision = task.await.expect("task").expect("bootstrap");
    assert_eq!(decision, LaunchDecision::LaunchNow);
    assert!(handle.calls().contains(&DriverCall::LaunchNow));
}

#[tokio::test]
async fn sequence_waits_for_hydration_after_credentials() {
    let store = StateStore::new();
    let mut driver = SimDriver::new().with_session(true);
    let gate = driver.gated_credentials();
    let handle = driver.handle();

    let task = tokio::spawn({
        let store = store.clone();
        async move {
            let mut ctx = AppContext::default();
            let mut notifications = NotificationCenter::new();
            Orchestrator::new(BootstrapConfig::default())
                .run(&mut driver, &store, &mut ctx, &mut notifications)
                .await
        }
    });

    // Credentials resolve first; the store has not hydrated.
    gate.release();
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
    assert!(!task.is_finished());
    assert_eq!(handle.calls().len(), 1);

    store.mark_hydration_complete();
    let decision = task.await.expect("task").expect("bootstrap");
    assert_eq!(decision, LaunchDecision::LaunchNow);
}

#[tokio::test]
async fn post_hydration_steps_run_in_fixed_order_exactly_once() {
    let store = StateStore::new();
    store.mark_hydration_complete();

    let mut driver = SimDriver::new().with_session(true).with_timezone("Europe/Berlin");
    let handle = driver.handle();
    let mut ctx = AppContext { device_token: Some("tok-1".into()), ..AppContext::default() };
    let expected_user_agent = ctx.user_agent();
    let mut notifications = NotificationCenter::new();
    notifications.push(reply(true));

    let mut orchestrator = Orchestrator::new(BootstrapConfig { auto_update_timezone: true });
    assert_eq!(orchestrator.phase(), BootstrapPhase::Init);

    let decision = orchestrator
        .run(&mut driver, &store, &mut ctx, &mut notifications)
        .await
        .expect("bootstrap");

    assert_eq!(orchestrator.phase(), BootstrapPhase::Dispatched);
    assert!(ctx.authenticated);
    let calls = handle.calls();
    assert_eq!(
        calls,
        vec![
            DriverCall::ConfigureUserAgent(expected_user_agent),
            DriverCall::UpdateTimezone("Europe/Berlin".into()),
            DriverCall::RegisterDeviceToken("tok-1".into()),
            DriverCall::DispatchQueuedReply {
                data: json!({ "channel_id": "general" }),
                text: "hi".into(),
                badge: 3,
                completed: true,
            },
            DriverCall::RegisterEmojiTable { aliases: alias_table().len() },
            DriverCall::LaunchNow,
        ]
    );

    // Extra store notifications and a re-run add nothing.
    store.mark_credentials_loaded();
    let again = orchestrator
        .run(&mut driver, &store, &mut ctx, &mut notifications)
        .await
        .expect("re-run");
    assert_eq!(again, decision);
    assert_eq!(handle.calls().len(), calls.len());
}

#[tokio::test]
async fn timezone_update_is_gated_by_feature_flag() {
    let mut driver = SimDriver::new();
    let handle = driver.handle();
    let mut ctx = AppContext::default();
    let mut notifications = NotificationCenter::new();

    bootstrap(&mut driver, &mut ctx, &mut notifications, BootstrapConfig::default()).await;

    assert!(handle.calls_where(|c| matches!(c, DriverCall::UpdateTimezone(_))).is_empty());
}

#[tokio::test]
async fn token_registration_skipped_without_token() {
    let mut driver = SimDriver::new();
    let handle = driver.handle();
    let mut ctx = AppContext::default();
    let mut notifications = NotificationCenter::new();

    bootstrap(&mut driver, &mut ctx, &mut notifications, BootstrapConfig::default()).await;

    assert!(handle.calls_where(|c| matches!(c, DriverCall::RegisterDeviceToken(_))).is_empty());
}

#[tokio::test]
async fn theme_snapshot_persists_changed_colors() {
    let mut driver = SimDriver::new().with_theme(ThemeColors {
        header_background: "#2d2d2d".into(),
        header_text: "#f0f0f0".into(),
        header_center: "#222222".into(),
    });
    let mut ctx = AppContext::default();
    let mut notifications = NotificationCenter::new();

    bootstrap(&mut driver, &mut ctx, &mut notifications, BootstrapConfig::default()).await;

    assert_eq!(
        ctx.toolbar,
        Some(ToolbarTheme {
            background: "#2d2d2d".into(),
            text: "#f0f0f0".into(),
            center: "#222222".into(),
        })
    );
}

#[tokio::test]
async fn theme_snapshot_skipped_when_background_unchanged() {
    let mut driver = SimDriver::new().with_theme(ThemeColors {
        header_background: "#145dbf".into(),
        header_text: "#ffffff".into(),
        header_center: "#1153ab".into(),
    });
    // Same background as the incoming theme: the stale text color must
    // survive, proving the snapshot was skipped.
    let mut ctx = AppContext {
        toolbar: Some(ToolbarTheme {
            background: "#145dbf".into(),
            text: "#stale".into(),
            center: "#stale".into(),
        }),
        ..AppContext::default()
    };
    let mut notifications = NotificationCenter::new();

    bootstrap(&mut driver, &mut ctx, &mut notifications, BootstrapConfig::default()).await;

    assert_eq!(ctx.toolbar.as_ref().map(|t| t.text.as_str()), Some("#stale"));
}

#[tokio::test]
async fn incomplete_reply_is_discarded_but_cleared() {
    let mut driver = SimDriver::new();
    let handle = driver.handle();
    let mut notifications = NotificationCenter::new();
    notifications.push(reply(false));
    let mut ctx = AppContext::default();

    resolve_pending_reply(&mut driver, &mut notifications, &mut ctx).await.expect("resolve");

    assert!(reply_calls(&handle).is_empty());
    assert!(notifications.get().is_none());
}

#[tokio::test]
async fn completed_reply_dispatches_exact_values_and_clears_once() {
    let mut driver = SimDriver::new();
    let handle = driver.handle();
    let mut notifications = NotificationCenter::new();
    notifications.push(reply(true));
    let mut ctx = AppContext::default();

    resolve_pending_reply(&mut driver, &mut notifications, &mut ctx).await.expect("resolve");

    assert_eq!(
        reply_calls(&handle),
        vec![DriverCall::DispatchQueuedReply {
            data: json!({ "channel_id": "general" }),
            text: "hi".into(),
            badge: 3,
            completed: true,
        }]
    );
    assert!(notifications.get().is_none());

    // A second resolution finds nothing and dispatches nothing.
    resolve_pending_reply(&mut driver, &mut notifications, &mut ctx).await.expect("resolve");
    assert_eq!(reply_calls(&handle).len(), 1);
}

#[tokio::test]
async fn warm_cached_reply_is_consumed_once() {
    let mut driver = SimDriver::new();
    let handle = driver.handle();
    let mut notifications = NotificationCenter::new();
    let mut ctx = AppContext { cached_reply: Some(reply(true)), ..AppContext::default() };

    resolve_pending_reply(&mut driver, &mut notifications, &mut ctx).await.expect("resolve");

    assert_eq!(reply_calls(&handle).len(), 1);
    assert!(ctx.cached_reply.is_none());
}

#[tokio::test]
async fn reply_dispatch_failure_propagates() {
    let mut driver = SimDriver::new().with_failing_reply();
    let mut notifications = NotificationCenter::new();
    notifications.push(reply(true));
    let mut ctx = AppContext::default();

    let store = StateStore::new();
    store.mark_hydration_complete();
    let result = Orchestrator::new(BootstrapConfig::default())
        .run(&mut driver, &store, &mut ctx, &mut notifications)
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn ios_backgrounded_defers_launch() {
    let mut driver = SimDriver::new()
        .with_platform(Platform::Ios)
        .with_activity_state(ActivityState::Background);
    let handle = driver.handle();
    let mut ctx = AppContext::default();
    let mut notifications = NotificationCenter::new();

    let decision =
        bootstrap(&mut driver, &mut ctx, &mut notifications, BootstrapConfig::default()).await;

    assert_eq!(decision, LaunchDecision::DeferUntilActive);
    assert!(ctx.relaunch_on_active);
    assert!(!handle.calls().contains(&DriverCall::LaunchNow));
}

#[tokio::test]
async fn ios_foregrounded_launches_now() {
    let mut driver =
        SimDriver::new().with_platform(Platform::Ios).with_activity_state(ActivityState::Active);
    let handle = driver.handle();
    let mut ctx = AppContext::default();
    let mut notifications = NotificationCenter::new();

    let decision =
        bootstrap(&mut driver, &mut ctx, &mut notifications, BootstrapConfig::default()).await;

    assert_eq!(decision, LaunchDecision::LaunchNow);
    assert!(!ctx.relaunch_on_active);
    assert!(handle.calls().contains(&DriverCall::LaunchNow));
}

#[tokio::test]
async fn android_launches_even_when_backgrounded() {
    let mut driver = SimDriver::new()
        .with_platform(Platform::Android)
        .with_activity_state(ActivityState::Background);
    let handle = driver.handle();
    let mut ctx = AppContext::default();
    let mut notifications = NotificationCenter::new();

    let decision =
        bootstrap(&mut driver, &mut ctx, &mut notifications, BootstrapConfig::default()).await;

    assert_eq!(decision, LaunchDecision::LaunchNow);
    assert!(!ctx.relaunch_on_active);
    assert!(handle.calls().contains(&DriverCall::LaunchNow));
}

#[tokio::test]
async fn root_screen_routes_to_channel_and_ignores_later_events() {
    let store = StateStore::new();
    store.mark_hydration_complete();
    let driver = SimDriver::new().with_session(true);
    let handle = driver.handle();
    let (events_tx, events_rx) = route_channel();
    let screens = ScreenFactory::new(|| "login", || "channel");

    let screen = RootScreen::new(
        driver,
        BootstrapConfig::default(),
        screens,
        store,
        AppContext::default(),
        NotificationCenter::new(),
        events_rx,
    );

    events_tx.send(RouteEvent::LaunchChannel { initialize_modules: true }).expect("send");
    events_tx.send(RouteEvent::LaunchLogin { initialize_modules: true }).expect("send");
    drop(events_tx);

    let route = screen.run().await.expect("run");
    assert_eq!(route, Route::Channel);

    let renders = handle.calls_where(|c| matches!(c, DriverCall::Render(_)));
    assert_eq!(
        renders,
        vec![
            DriverCall::Render(View::PlainLoading),
            DriverCall::Render(View::Channel { background_refresh: false }),
        ],
        "the login event after the latch must not render"
    );
    assert_eq!(handle.calls_where(|c| matches!(c, DriverCall::InitializeModules)).len(), 1);
}

#[tokio::test]
async fn root_screen_shows_themed_skeleton_for_known_user() {
    let store = StateStore::new();
    store.mark_hydration_complete();
    let toolbar =
        ToolbarTheme { background: "#145dbf".into(), text: "#ffffff".into(), center: "#1153ab".into() };
    let driver = SimDriver::new().with_session(true);
    let handle = driver.handle();
    let (events_tx, events_rx) = route_channel();

    let screen = RootScreen::new(
        driver,
        BootstrapConfig::default(),
        ScreenFactory::new(|| "login", || "channel"),
        store,
        AppContext { authenticated: true, toolbar: Some(toolbar.clone()), ..AppContext::default() },
        NotificationCenter::new(),
        events_rx,
    );
    drop(events_tx);

    let route = screen.run().await.expect("run");
    assert_eq!(route, Route::Loading);

    let renders = handle.calls_where(|c| matches!(c, DriverCall::Render(_)));
    assert_eq!(renders, vec![DriverCall::Render(View::ThemedSkeleton { toolbar })]);
}
