//! Tools page: the password and QR generator cards.

use dioxus::prelude::*;
use ui::{PasswordGenerator, QrGenerator, Reveal};

#[component]
pub fn Tools() -> Element {
    rsx! {
        section { class: "section",
            h1 { class: "page-title", "Tools" }
            p { class: "page-subtitle", "Small utilities, generated on the server, free to use." }
            div { class: "tool-grid",
                Reveal { class: "card",
                    PasswordGenerator {}
                }
                Reveal { class: "card",
                    QrGenerator {}
                }
            }
        }
    }
}
