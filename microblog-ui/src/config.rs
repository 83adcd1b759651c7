//! Client configuration.
//!
//! Everything here has a fixed default; the page does not pass settings in.

/// Local storage key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Largest image accepted for preview (5 MiB).
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Element id the overlay UI is mounted into.
pub const MOUNT_ROOT_ID: &str = "main";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedConfig {
    pub theme_storage_key: &'static str,
    pub max_image_bytes: u64,
    /// Counter turns to the warning color above this length
    pub char_warning_threshold: usize,
    /// Counter turns to the danger color above this length
    pub char_danger_threshold: usize,
    pub notification_ttl_ms: u32,
    pub notification_exit_ms: u32,
    pub max_notifications: usize,
    pub float_duration_ms: u32,
    pub count_pulse_ms: u32,
    pub theme_transition_ms: u32,
    pub toggle_press_ms: u32,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: THEME_STORAGE_KEY,
            max_image_bytes: MAX_IMAGE_BYTES,
            char_warning_threshold: 100,
            char_danger_threshold: 120,
            notification_ttl_ms: 3000,
            notification_exit_ms: 300,
            max_notifications: 5,
            float_duration_ms: 1000,
            count_pulse_ms: 500,
            theme_transition_ms: 300,
            toggle_press_ms: 150,
        }
    }
}
