//! Projects page: a reveal-animated project grid.

use dioxus::prelude::*;
use ui::Reveal;

struct Project {
    title: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
}

const PROJECTS: &[Project] = &[
    Project {
        title: "Password Generator",
        description: "Configurable random passwords from the OS CSPRNG, now hosted on this site.",
        tags: &["rust", "security"],
    },
    Project {
        title: "QR Code Generator",
        description: "Text and URLs to downloadable PNG QR codes, straight from the browser.",
        tags: &["rust", "imaging"],
    },
    Project {
        title: "This website",
        description: "A fullstack Dioxus app: server-rendered pages, WASM interactivity, one binary.",
        tags: &["rust", "dioxus", "axum"],
    },
];

#[component]
pub fn Projects() -> Element {
    rsx! {
        section { class: "section",
            h1 { class: "page-title", "Projects" }
            div { class: "card-grid",
                for project in PROJECTS {
                    Reveal { class: "card",
                        h3 { "{project.title}" }
                        p { "{project.description}" }
                        div { class: "tag-row",
                            for tag in project.tags {
                                span { class: "tag", "{tag}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
