//! QR tool card: encodes text or URLs through the API and renders the image
//! with a download link.

use dioxus::prelude::*;

use crate::{failure_message, ERROR_COLOR};

/// Fail-fast message for an empty input. Shown without touching the network.
const EMPTY_INPUT_MESSAGE: &str = "Enter some text or a URL first!";
/// Filename offered for the downloaded image.
const DOWNLOAD_NAME: &str = "qrcode.png";

/// Outcome of the latest encoding attempt; each run replaces the previous
/// result content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum QrOutput {
    #[default]
    Empty,
    Image(String),
    Rejected(&'static str),
    Failed(String),
}

#[component]
pub fn QrGenerator() -> Element {
    let mut data = use_signal(String::new);
    let mut output = use_signal(QrOutput::default);

    let generate = move |_| async move {
        let input = data();
        if input.is_empty() {
            output.set(QrOutput::Rejected(EMPTY_INPUT_MESSAGE));
            return;
        }
        match api::generate_qr(input).await {
            Ok(qr) => output.set(QrOutput::Image(qr.image)),
            Err(err) => output.set(QrOutput::Failed(failure_message(&err))),
        }
    };

    let result = match output() {
        QrOutput::Empty => rsx! {},
        QrOutput::Image(src) => rsx! {
            img { src: "{src}", alt: "QR code" }
            a {
                class: "btn btn-primary",
                href: "{src}",
                download: DOWNLOAD_NAME,
                "📥 Download"
            }
        },
        QrOutput::Rejected(message) => rsx! {
            p { style: "color: {ERROR_COLOR};", "{message}" }
        },
        QrOutput::Failed(message) => rsx! {
            p { style: "color: {ERROR_COLOR};", "{message}" }
        },
    };

    rsx! {
        div { class: "tool-card",
            h3 { "📱 QR Code Generator" }

            div { class: "tool-field",
                label { r#for: "qr-data", "Text or URL" }
                input {
                    id: "qr-data",
                    r#type: "text",
                    placeholder: "https://example.com",
                    value: "{data}",
                    oninput: move |evt| data.set(evt.value()),
                }
            }

            button { class: "btn btn-primary", onclick: generate, "Generate" }

            div { id: "qr-result", {result} }
        }
    }
}
