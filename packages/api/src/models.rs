//! Client-safe response types for the tool endpoints.
//!
//! Both types cross the server/client boundary via Dioxus server functions,
//! so the success wire shape is exactly `{"password": …}` / `{"image": …}`.

use serde::{Deserialize, Serialize};

/// A freshly generated password.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratedPassword {
    pub password: String,
}

/// An encoded QR code as a `data:image/png;base64,…` URI, usable directly as
/// an `<img>` source or a download href.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QrImage {
    pub image: String,
}
