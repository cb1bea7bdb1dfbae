//! Reveal-on-scroll: wrapped content starts hidden and offset (the `reveal`
//! base style in the shared stylesheet) and slides in the first time it
//! enters the viewport. One-shot per element; scrolling away does not hide
//! it again.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;

use crate::interop::observe_reveal_js;

/// Counter for unique reveal element ids.
static REVEAL_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Wraps children in a container revealed on first viewport entry. Extra
/// classes (`card`, `about-card`, `timeline-item`, …) pass through to the
/// container element.
#[component]
pub fn Reveal(#[props(default)] class: String, children: Element) -> Element {
    let element_id = use_signal(|| {
        let n = REVEAL_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("reveal-{n}")
    });

    use_effect(move || {
        let id = element_id.peek().clone();
        document::eval(&observe_reveal_js(&id));
    });

    rsx! {
        div {
            id: "{element_id}",
            class: if class.is_empty() { "reveal".to_string() } else { format!("reveal {class}") },
            {children}
        }
    }
}
