//! Notification reply resolution.

use skiff_core::{AppContext, NotificationCenter, PendingNotification};

use crate::Driver;

/// Resolve a pending notification reply, if one exists.
///
/// Sources are checked in order: the record captured by the notification
/// layer at cold start, then a payload cached on the context because the
/// process was already warm when the reply arrived. No record is a no-op.
///
/// A completed record dispatches the queued-reply action with its exact
/// `{data, text, badge, completed}` values. An incomplete record is
/// discarded without dispatching: it carries no actionable reply text.
/// Whether completed or not, the notification layer's held record is cleared
/// afterward so it can never be processed twice. Dispatch errors propagate
/// before the clear, matching the source behavior.
pub async fn resolve_pending_reply<D: Driver>(
    driver: &mut D,
    notifications: &mut NotificationCenter,
    ctx: &mut AppContext,
) -> Result<(), D::Error> {
    let Some(record) = notifications.get().or_else(|| ctx.cached_reply.take()) else {
        return Ok(());
    };

    let PendingNotification { data, text, badge, completed } = record;
    if completed {
        driver.dispatch_queued_reply(data, text, badge, completed).await?;
    } else {
        tracing::debug!("discarding incomplete notification reply");
    }
    notifications.reset();

    Ok(())
}
