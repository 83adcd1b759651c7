//! Feed page overlay.
//!
//! The server renders the posts and the composer; this crate binds to that
//! markup and renders the pieces it owns on top of it (the theme toggle,
//! toasts and floating reaction icons).

pub mod bindings;
pub mod effects;
pub mod notify;
pub mod reactions;
pub mod theme;
pub mod upload;

use dioxus::prelude::*;

use crate::components::{FloatingLayer, NotificationStack, ThemeToggle};
use crate::config::FeedConfig;
use crate::styles::{FLOAT_KEYFRAMES, NOTIFICATION_STYLES};
use notify::{FloatingIcon, Notification};

pub use bindings::remove_image;

/// State shared by the page bindings and the overlay components.
///
/// Created once by [`Feed`] and handed to every binding; nothing is kept in
/// globals.
#[derive(Clone, Copy, PartialEq)]
pub struct FeedContext {
    pub config: FeedConfig,
    pub notifications: Signal<Vec<Notification>>,
    pub floating_icons: Signal<Vec<FloatingIcon>>,
    /// Set when the first floating icon needs the `floatUp` keyframes
    pub float_styles_ready: Signal<bool>,
}

// ============================================================================
// Feed Component - Overlay Root
// ============================================================================

#[component]
pub fn Feed(config: FeedConfig) -> Element {
    let notifications = use_signal(Vec::<Notification>::new);
    let floating_icons = use_signal(Vec::<FloatingIcon>::new);
    let float_styles_ready = use_signal(|| false);

    let ctx = FeedContext {
        config,
        notifications,
        floating_icons,
        float_styles_ready,
    };

    // Bind the server-rendered page once.
    use_hook(move || bindings::bind_page(ctx));

    rsx! {
        style { id: "notificationAnimations", "{NOTIFICATION_STYLES}" }
        if float_styles_ready() {
            style { id: "floatAnimation", "{FLOAT_KEYFRAMES}" }
        }
        ThemeToggle { config }
        NotificationStack { notifications, transition_ms: config.notification_exit_ms }
        FloatingLayer { icons: floating_icons, duration_ms: config.float_duration_ms }
    }
}
