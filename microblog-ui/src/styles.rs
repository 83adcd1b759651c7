pub const NOTIFICATION_STYLES: &str = r#"
/* Toasts */
@keyframes slideInRight {
    from {
        transform: translateX(100%);
        opacity: 0;
    }
    to {
        transform: translateX(0);
        opacity: 1;
    }
}

@keyframes slideOutRight {
    from {
        transform: translateX(0);
        opacity: 1;
    }
    to {
        transform: translateX(100%);
        opacity: 0;
    }
}

/* Composer image preview */
.image-upload-container {
    position: relative;
}

.image-preview {
    text-align: center;
    padding: 1rem;
    border: 2px dashed var(--border-color);
    border-radius: 8px;
    background: var(--bg-secondary);
}
"#;

/// Injected the first time a floating reaction icon is shown.
pub const FLOAT_KEYFRAMES: &str = r#"
@keyframes floatUp {
    0% {
        transform: translateY(0) scale(1);
        opacity: 1;
    }
    100% {
        transform: translateY(-50px) scale(1.5);
        opacity: 0;
    }
}
"#;

/// `ms` as a CSS time in seconds, e.g. `300` -> `"0.3s"`.
pub fn css_duration(ms: u32) -> String {
    format!("{}s", f64::from(ms) / 1000.0)
}

/// Transition applied to `<body>` while the theme switches.
pub fn body_transition(duration_ms: u32) -> String {
    format!("all {} ease", css_duration(duration_ms))
}
