//! Toasts and floating reaction icons, as plain lists the overlay renders.

use uuid::Uuid;

use crate::feed::reactions::FeedbackKind;
use crate::styles::css_duration;

const TOAST_CLASS: &str = "alert alert-danger position-fixed";

/// Vertical distance between stacked toasts, in pixels.
const TOAST_SPACING_PX: usize = 64;
const TOAST_TOP_PX: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    Entering,
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub phase: NotificationPhase,
}

impl Notification {
    /// Every toast the feed raises reports a failure.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            phase: NotificationPhase::Entering,
        }
    }

    pub fn class_name(&self) -> &'static str {
        TOAST_CLASS
    }

    /// CSS `animation` value for the current phase. Entry and exit both last
    /// `transition_ms`.
    pub fn animation(&self, transition_ms: u32) -> String {
        let duration = css_duration(transition_ms);
        match self.phase {
            NotificationPhase::Entering => format!("slideInRight {duration} ease-out"),
            NotificationPhase::Leaving => format!("slideOutRight {duration} ease-in forwards"),
        }
    }
}

pub fn toast_top(index: usize) -> usize {
    TOAST_TOP_PX + index * TOAST_SPACING_PX
}

/// Append a toast, dropping the oldest ones beyond `max`.
pub fn push_notification(list: &mut Vec<Notification>, notification: Notification, max: usize) {
    list.push(notification);
    if list.len() > max {
        let excess = list.len() - max;
        list.drain(..excess);
    }
}

pub fn mark_leaving(list: &mut [Notification], id: Uuid) {
    if let Some(notification) = list.iter_mut().find(|n| n.id == id) {
        notification.phase = NotificationPhase::Leaving;
    }
}

pub fn remove_notification(list: &mut Vec<Notification>, id: Uuid) {
    list.retain(|n| n.id != id);
}

// ============================================================================
// Floating icons
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct FloatingIcon {
    pub id: Uuid,
    pub feedback: FeedbackKind,
    /// Viewport coordinates of the icon's anchor
    pub x: f64,
    pub y: f64,
}

impl FloatingIcon {
    pub fn new(feedback: FeedbackKind, x: f64, y: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            feedback,
            x,
            y,
        }
    }

    /// CSS `animation` value; the icon is removed after the same duration.
    pub fn animation(duration_ms: u32) -> String {
        format!("floatUp {} ease-out forwards", css_duration(duration_ms))
    }
}

pub fn remove_floating_icon(list: &mut Vec<FloatingIcon>, id: Uuid) {
    list.retain(|icon| icon.id != id);
}
