use dioxus::prelude::{ReadableExt, WritableExt};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use crate::feed::notify::{
    mark_leaving, push_notification, remove_floating_icon, remove_notification, FloatingIcon,
    Notification,
};
use crate::feed::reactions::FeedbackKind;
use crate::feed::FeedContext;

/// Show an error toast and schedule its exit and removal.
pub fn notify_error(ctx: FeedContext, message: impl Into<String>) {
    let mut notifications = ctx.notifications;
    let notification = Notification::error(message);
    let id = notification.id;

    push_notification(
        &mut notifications.write(),
        notification,
        ctx.config.max_notifications,
    );

    spawn_local(async move {
        TimeoutFuture::new(ctx.config.notification_ttl_ms).await;
        mark_leaving(&mut notifications.write(), id);
        TimeoutFuture::new(ctx.config.notification_exit_ms).await;
        remove_notification(&mut notifications.write(), id);
    });
}

/// Float a reaction icon up from `(x, y)` and drop it once the animation ends.
pub fn show_floating_icon(ctx: FeedContext, feedback: FeedbackKind, (x, y): (f64, f64)) {
    let mut float_styles_ready = ctx.float_styles_ready;
    if !*float_styles_ready.peek() {
        float_styles_ready.set(true);
    }

    let mut icons = ctx.floating_icons;
    let icon = FloatingIcon::new(feedback, x, y);
    let id = icon.id;
    icons.write().push(icon);

    spawn_local(async move {
        TimeoutFuture::new(ctx.config.float_duration_ms).await;
        remove_floating_icon(&mut icons.write(), id);
    });
}
