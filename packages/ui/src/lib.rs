//! This crate contains all shared UI for the workspace: the site navigation,
//! the reveal-on-scroll animation wrapper, and the two hosted tool cards.

use dioxus::prelude::*;

use api::ServerFnError;

mod interop;

mod navbar;
pub use navbar::{NavLink, Navbar};

mod reveal;
pub use reveal::Reveal;

mod copy_button;
pub use copy_button::CopyButton;

mod password_generator;
pub use password_generator::PasswordGenerator;

mod qr_generator;
pub use qr_generator::QrGenerator;

/// Stylesheet shared by every component in this crate.
pub const COMPONENTS_CSS: Asset = asset!("/src/components.css");

/// Warning/error text color, for validation messages and failures.
pub(crate) const ERROR_COLOR: &str = "#f5576c";
/// Success text color.
pub(crate) const SUCCESS_COLOR: &str = "#43e97b";

/// Message shown when a call fails in transport or decoding. The original
/// cause is logged, never rendered.
pub(crate) const GENERIC_FAILURE: &str = "Something went wrong. Please try again!";

/// Map a failed server call onto user-facing text: server-reported errors
/// verbatim, anything transport-shaped collapsed to [`GENERIC_FAILURE`].
pub(crate) fn failure_message(err: &ServerFnError) -> String {
    match err {
        ServerFnError::ServerError { message, .. } => message.clone(),
        other => {
            tracing::warn!("tool call failed: {other}");
            GENERIC_FAILURE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_render_verbatim() {
        let err = ServerFnError::ServerError {
            message: "too short".to_string(),
            code: 500,
            details: None,
        };
        assert_eq!(failure_message(&err), "too short");
    }

    #[test]
    fn transport_errors_collapse_to_the_generic_message() {
        let err = ServerFnError::Request(dioxus::fullstack::RequestError::Request(
            "connection refused".to_string(),
        ));
        assert_eq!(failure_message(&err), GENERIC_FAILURE);
    }
}
