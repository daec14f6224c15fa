//! Hydration waiter.

use skiff_core::StateStore;

/// Resolve once the state store reports hydration complete.
///
/// Already hydrated: returns immediately without subscribing. Otherwise
/// subscribes, re-checks after subscribing so a flag raised in between is
/// not missed, and returns on the first observed `true`; the subscription is
/// dropped on return. There is no timeout and no failure signal: if the
/// store never hydrates (or is torn down first), this future is pending
/// forever by design.
pub async fn wait_for_hydration(store: &StateStore) {
    if store.state().hydration_complete {
        return;
    }

    let mut rx = store.subscribe();
    loop {
        if rx.borrow_and_update().hydration_complete {
            return;
        }
        if rx.changed().await.is_err() {
            break;
        }
    }

    // Store torn down before hydrating. No hydration-failure signal exists;
    // the bootstrap sequence blocks forever.
    drop(rx);
    std::future::pending::<()>().await;
}
