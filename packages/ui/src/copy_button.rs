//! Copy-to-clipboard button with a transient "copied" affordance.

use std::time::Duration;

use dioxus::prelude::*;

use crate::interop::clipboard_write_js;

/// How long the "copied" state lasts before the button reverts.
const COPIED_WINDOW: Duration = Duration::from_secs(2);

async fn copied_window() {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(COPIED_WINDOW).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(COPIED_WINDOW).await;
}

/// Writes `text` to the system clipboard when clicked. On success the label
/// and background swap to a "copied" affordance for two seconds, then revert.
/// A failed write changes nothing user-visible.
#[component]
pub fn CopyButton(text: ReadOnlySignal<String>) -> Element {
    let mut copied = use_signal(|| false);

    let copy = move |_| async move {
        let value = text();
        if value.is_empty() {
            return;
        }
        let mut write = document::eval(&clipboard_write_js(&value));
        match write.recv::<bool>().await {
            Ok(true) => {
                copied.set(true);
                copied_window().await;
                copied.set(false);
            }
            Ok(false) | Err(_) => {
                tracing::debug!("clipboard write failed");
            }
        }
    };

    rsx! {
        button {
            class: if copied() { "copy-btn copied" } else { "copy-btn" },
            onclick: copy,
            if copied() { "✓ Copied!" } else { "📋 Copy" }
        }
    }
}
