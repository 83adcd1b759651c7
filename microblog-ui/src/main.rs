use dioxus::launch;
use dioxus::prelude::*;
use dioxus_logger::tracing::{error, Level};

use microblog_ui::{ensure_mount_root, Feed, FeedConfig, MOUNT_ROOT_ID};

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());
    dioxus_logger::init(Level::INFO).ok();

    // Server-rendered pages don't carry a mount point for the overlay.
    if let Err(e) = ensure_mount_root(MOUNT_ROOT_ID) {
        error!("Cannot mount feed overlay: {}", e);
        return;
    }

    launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        Feed { config: FeedConfig::default() }
    }
}
