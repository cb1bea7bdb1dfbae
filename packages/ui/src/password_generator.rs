//! Password tool card: collects the generation options, calls the API, and
//! renders the outcome.

use dioxus::prelude::*;

use crate::{failure_message, CopyButton, ERROR_COLOR, SUCCESS_COLOR};

/// Fail-fast message when no character class is selected. Shown without
/// touching the network.
const NO_OPTIONS_MESSAGE: &str = "Select at least one option!";

/// True when every character class is deselected; the generate handler then
/// rejects locally instead of calling the server.
fn no_classes_selected(uppercase: bool, lowercase: bool, numbers: bool, symbols: bool) -> bool {
    !(uppercase || lowercase || numbers || symbols)
}

/// Outcome of the latest generation attempt. Overlapping clicks race for
/// this slot; the last response to resolve wins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum PasswordOutput {
    #[default]
    Empty,
    Password(String),
    Rejected(&'static str),
    Failed(String),
}

#[component]
pub fn PasswordGenerator() -> Element {
    let mut length = use_signal(|| 16u32);
    let uppercase = use_signal(|| true);
    let lowercase = use_signal(|| true);
    let numbers = use_signal(|| true);
    let symbols = use_signal(|| true);
    let mut output = use_signal(PasswordOutput::default);

    let password_text = use_memo(move || match output() {
        PasswordOutput::Password(password) => password,
        _ => String::new(),
    });

    let generate = move |_| async move {
        if no_classes_selected(uppercase(), lowercase(), numbers(), symbols()) {
            output.set(PasswordOutput::Rejected(NO_OPTIONS_MESSAGE));
            return;
        }
        match api::generate_password(length(), uppercase(), lowercase(), numbers(), symbols())
            .await
        {
            Ok(generated) => output.set(PasswordOutput::Password(generated.password)),
            Err(err) => output.set(PasswordOutput::Failed(failure_message(&err))),
        }
    };

    let result = match output() {
        PasswordOutput::Empty => rsx! {},
        PasswordOutput::Password(password) => rsx! {
            span { style: "color: {SUCCESS_COLOR};", "{password}" }
        },
        PasswordOutput::Rejected(message) => rsx! {
            span { style: "color: {ERROR_COLOR};", "{message}" }
        },
        PasswordOutput::Failed(message) => rsx! {
            span { style: "color: {ERROR_COLOR};", "{message}" }
        },
    };

    rsx! {
        div { class: "tool-card",
            h3 { "🔐 Password Generator" }

            div { class: "tool-field",
                label { r#for: "password-length",
                    "Length: "
                    span { id: "length-value", "{length}" }
                }
                input {
                    id: "password-length",
                    r#type: "range",
                    min: "4",
                    max: "64",
                    value: "{length}",
                    oninput: move |evt| {
                        if let Ok(value) = evt.value().parse() {
                            length.set(value);
                        }
                    },
                }
            }

            div { class: "tool-options",
                CheckOption { id: "uppercase", label: "Uppercase (A-Z)", checked: uppercase }
                CheckOption { id: "lowercase", label: "Lowercase (a-z)", checked: lowercase }
                CheckOption { id: "numbers", label: "Numbers (0-9)", checked: numbers }
                CheckOption { id: "symbols", label: "Symbols (!@#$…)", checked: symbols }
            }

            button { class: "btn btn-primary", onclick: generate, "Generate" }

            div { id: "password-result", {result} }

            if !password_text().is_empty() {
                CopyButton { text: password_text }
            }
        }
    }
}

#[component]
fn CheckOption(id: &'static str, label: &'static str, mut checked: Signal<bool>) -> Element {
    rsx! {
        label { class: "tool-option", r#for: id,
            input {
                id: id,
                r#type: "checkbox",
                checked: checked(),
                onchange: move |evt| checked.set(evt.checked()),
            }
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_all_false_combination_is_rejected() {
        assert!(no_classes_selected(false, false, false, false));

        for bits in 1u8..16 {
            assert!(!no_classes_selected(
                bits & 1 != 0,
                bits & 2 != 0,
                bits & 4 != 0,
                bits & 8 != 0,
            ));
        }
    }
}
