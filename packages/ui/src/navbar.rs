//! Site navigation bar: hamburger toggle, exact-path active-link
//! highlighting, and the scroll-position background switch.

use dioxus::prelude::*;

use crate::interop::SCROLL_BRIDGE_JS;

/// Background once the page is scrolled past [`SCROLL_THRESHOLD`].
const SCROLLED_BACKGROUND: &str = "rgba(26, 26, 46, 0.98)";
/// Background at the top of the page.
const TOP_BACKGROUND: &str = "rgba(26, 26, 46, 0.9)";
/// Scroll offset in pixels at which the navbar darkens.
const SCROLL_THRESHOLD: f64 = 50.0;

/// Pick the navbar background for a given `window.scrollY`.
fn navbar_background(scroll_y: f64) -> &'static str {
    if scroll_y > SCROLL_THRESHOLD {
        SCROLLED_BACKGROUND
    } else {
        TOP_BACKGROUND
    }
}

/// Current location path on the web. Empty during server rendering; the
/// client fills in the active link on hydration.
fn current_path() -> String {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        if let Ok(path) = window.location().pathname() {
            return path;
        }
    }
    String::new()
}

/// One navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

#[component]
pub fn Navbar(brand: String, links: Vec<NavLink>) -> Element {
    let mut menu_open = use_signal(|| false);
    let mut scroll_y = use_signal(|| 0.0f64);

    // Scroll bridge: the JS side reports scrollY on every scroll event.
    use_effect(move || {
        spawn(async move {
            let mut bridge = document::eval(SCROLL_BRIDGE_JS);
            while let Ok(y) = bridge.recv::<f64>().await {
                scroll_y.set(y);
            }
        });
    });

    let path = current_path();

    rsx! {
        document::Link { rel: "stylesheet", href: crate::COMPONENTS_CSS }
        nav {
            class: "navbar",
            style: "background: {navbar_background(scroll_y())};",
            a { class: "nav-brand", href: "/", "{brand}" }
            ul {
                class: if menu_open() { "nav-links active" } else { "nav-links" },
                for link in &links {
                    li {
                        a {
                            href: link.href,
                            class: if path == link.href { "active" },
                            "{link.label}"
                        }
                    }
                }
            }
            button {
                class: "hamburger",
                aria_label: "Toggle navigation",
                onclick: move |_| {
                    let open = menu_open();
                    menu_open.set(!open);
                },
                "☰"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_switches_at_the_fifty_pixel_threshold() {
        assert_eq!(navbar_background(0.0), TOP_BACKGROUND);
        assert_eq!(navbar_background(50.0), TOP_BACKGROUND);
        assert_eq!(navbar_background(51.0), SCROLLED_BACKGROUND);
    }
}
