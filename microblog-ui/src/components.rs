use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::config::FeedConfig;
use crate::feed::notify::{toast_top, FloatingIcon, Notification};
use crate::feed::theme::{apply_theme_to_document, LocalThemeStorage, ThemeManager};
use crate::interop::play_body_transition;

// ============================================================================
// Theme Toggle
// ============================================================================

#[component]
pub fn ThemeToggle(config: FeedConfig) -> Element {
    let mut manager =
        use_signal(move || ThemeManager::init(LocalThemeStorage::new(config.theme_storage_key)));
    let mut pressed = use_signal(|| false);

    use_hook(move || apply_theme_to_document(manager.peek().current()));

    let on_toggle = move |_| {
        let theme = manager.write().toggle();
        apply_theme_to_document(theme);
        dioxus_logger::tracing::debug!("Theme switched to {}", theme.as_str());

        pressed.set(true);
        spawn(async move {
            TimeoutFuture::new(config.toggle_press_ms).await;
            pressed.set(false);
        });
        spawn(play_body_transition(config.theme_transition_ms));
    };

    let icon = manager.read().current().icon_class();
    let scale = if pressed() { "0.9" } else { "1" };

    rsx! {
        button {
            class: "theme-toggle",
            r#type: "button",
            "aria-label": "Toggle theme",
            title: "Toggle dark/light theme",
            style: "transform: translateY(-50%) scale({scale});",
            onclick: on_toggle,
            i { class: "{icon}" }
        }
    }
}

// ============================================================================
// Toasts
// ============================================================================

#[component]
pub fn NotificationStack(notifications: Signal<Vec<Notification>>, transition_ms: u32) -> Element {
    let toasts: Vec<(String, &'static str, String, String)> = notifications
        .read()
        .iter()
        .enumerate()
        .map(|(index, note)| {
            let style = format!(
                "top: {}px; right: 20px; z-index: 9999; max-width: 300px; animation: {};",
                toast_top(index),
                note.animation(transition_ms)
            );
            (note.id.to_string(), note.class_name(), style, note.message.clone())
        })
        .collect();

    rsx! {
        for (id, class, style, message) in toasts {
            div {
                key: "{id}",
                class: class,
                role: "alert",
                style: style,
                "{message}"
            }
        }
    }
}

// ============================================================================
// Floating Reaction Icons
// ============================================================================

#[component]
pub fn FloatingLayer(icons: Signal<Vec<FloatingIcon>>, duration_ms: u32) -> Element {
    let animation = FloatingIcon::animation(duration_ms);
    let floats: Vec<(String, &'static str, String)> = icons
        .read()
        .iter()
        .map(|icon| {
            let style = format!(
                "position: fixed; left: {}px; top: {}px; color: {}; font-size: 1.5rem; pointer-events: none; z-index: 1000; animation: {};",
                icon.x,
                icon.y,
                icon.feedback.color(),
                animation
            );
            (icon.id.to_string(), icon.feedback.icon_class(), style)
        })
        .collect();

    rsx! {
        for (id, class, style) in floats {
            i { key: "{id}", class: class, style: style }
        }
    }
}
