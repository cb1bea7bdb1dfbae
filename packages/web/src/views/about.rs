//! About page: skill cards and a short timeline.

use dioxus::prelude::*;
use ui::Reveal;

#[component]
pub fn About() -> Element {
    rsx! {
        section { class: "section",
            h1 { class: "page-title", "About me" }
            p { class: "page-subtitle",
                "Backend-leaning developer with a soft spot for small, useful tools."
            }
            div { class: "card-grid",
                Reveal { class: "about-card",
                    h3 { "Languages" }
                    p { "Rust, Python, TypeScript." }
                }
                Reveal { class: "about-card",
                    h3 { "Backend" }
                    p { "HTTP services, queues, and the occasional database." }
                }
                Reveal { class: "about-card",
                    h3 { "Frontend" }
                    p { "Small, fast pages without a build-tool zoo." }
                }
            }
        }

        section { class: "section",
            h2 { class: "section-title", "Timeline" }
            div { class: "timeline",
                Reveal { class: "timeline-item",
                    h3 { "2025 — This site" }
                    p { "Rebuilt the portfolio as a fullstack Rust app and moved the tools into it." }
                }
                Reveal { class: "timeline-item",
                    h3 { "2023 — First tools" }
                    p { "Wrote the password and QR generators as desktop scripts for friends." }
                }
                Reveal { class: "timeline-item",
                    h3 { "2021 — Hello, world" }
                    p { "Started programming; never quite stopped." }
                }
            }
        }
    }
}
