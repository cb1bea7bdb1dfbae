//! Landing page: hero plus a reveal-animated feature grid.

use dioxus::prelude::*;
use ui::Reveal;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "hero",
            h1 { "Hi, I build things for the web." }
            p { class: "hero-subtitle",
                "Developer portfolio, plus a couple of small tools you can use right now."
            }
            div { class: "hero-actions",
                a { class: "btn btn-primary", href: "/tools", "Try the tools" }
                a { class: "btn btn-outline", href: "/projects", "See projects" }
            }
        }

        section { class: "section",
            h2 { class: "section-title", "What's here" }
            div { class: "card-grid",
                Reveal { class: "card",
                    h3 { "🔐 Password Generator" }
                    p { "Random passwords with configurable character classes, generated server-side." }
                }
                Reveal { class: "card",
                    h3 { "📱 QR Codes" }
                    p { "Turn any text or URL into a downloadable QR code." }
                }
                Reveal { class: "card",
                    h3 { "📝 Projects" }
                    p { "A selection of things I've built, from command-line tools to this site." }
                }
            }
        }
    }
}
