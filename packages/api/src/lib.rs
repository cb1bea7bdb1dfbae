//! # API crate — shared fullstack server functions for the site tools
//!
//! Defines the Dioxus server functions the web frontend calls, along with the
//! server-only modules backing them.
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`models`] | — | Client-safe response types for the tool endpoints |
//! | [`password`] | `server` | Character-set assembly and random password generation |
//! | [`qr`] | `server` | QR encoding to a base64 PNG data URI |
//! | [`settings`] | `server` | Runtime limits from `site.toml` and the environment |
//!
//! Every public `async fn` in this file is a Dioxus server function annotated
//! with `#[post(...)]` and compiled twice: once with the real logic (behind
//! `#[cfg(feature = "server")]`) and once as a thin client stub that simply
//! forwards the call over HTTP.

use dioxus::prelude::*;

pub mod models;
#[cfg(feature = "server")]
pub mod password;
#[cfg(feature = "server")]
pub mod qr;
#[cfg(feature = "server")]
pub mod settings;

pub use models::{GeneratedPassword, QrImage};

/// The error type every server function here returns; re-exported so client
/// crates can match on it without pulling fullstack features themselves.
pub use dioxus::prelude::ServerFnError;

/// Generate a random password from the selected character classes.
#[cfg(feature = "server")]
#[post("/api/generate-password")]
pub async fn generate_password(
    length: u32,
    uppercase: bool,
    lowercase: bool,
    numbers: bool,
    symbols: bool,
) -> Result<GeneratedPassword, ServerFnError> {
    let limits = &settings::settings().password;
    let rules = password::PasswordRules {
        length,
        uppercase,
        lowercase,
        numbers,
        symbols,
    };

    let password =
        password::generate(&rules, limits).map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::debug!(length, "password generated");
    Ok(GeneratedPassword { password })
}

#[cfg(not(feature = "server"))]
#[post("/api/generate-password")]
pub async fn generate_password(
    length: u32,
    uppercase: bool,
    lowercase: bool,
    numbers: bool,
    symbols: bool,
) -> Result<GeneratedPassword, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Encode arbitrary text into a QR code, returned as a PNG data URI.
#[cfg(feature = "server")]
#[post("/api/generate-qr")]
pub async fn generate_qr(data: String) -> Result<QrImage, ServerFnError> {
    let capacity = settings::settings().qr.capacity;

    let image =
        qr::encode_data_uri(&data, capacity).map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::debug!(bytes = data.len(), "qr code generated");
    Ok(QrImage { image })
}

#[cfg(not(feature = "server"))]
#[post("/api/generate-qr")]
pub async fn generate_qr(data: String) -> Result<QrImage, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
