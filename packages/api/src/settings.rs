//! # Runtime settings — `site.toml` + environment
//!
//! Limits for the hosted tools, resolved once per process: built-in
//! defaults, then an optional `site.toml` next to the binary, then
//! environment variables (`PASSWORD_MAX=64`, `QR_CAPACITY=1024`, …).

use std::sync::OnceLock;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

/// Accepted password length range.
#[derive(Debug, Deserialize)]
pub struct PasswordLimits {
    pub min: u32,
    pub max: u32,
}

impl Default for PasswordLimits {
    fn default() -> Self {
        Self { min: 1, max: 128 }
    }
}

/// QR input limits.
#[derive(Debug, Deserialize)]
pub struct QrLimits {
    /// Maximum input size in bytes.
    pub capacity: usize,
}

impl Default for QrLimits {
    fn default() -> Self {
        Self { capacity: 2048 }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub password: PasswordLimits,
    #[serde(default)]
    pub qr: QrLimits,
}

impl Settings {
    pub(crate) fn new() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("password.min", 1i64)?
            .set_default("password.max", 128i64)?
            .set_default("qr.capacity", 2048i64)?
            .add_source(
                File::with_name("site.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::default().separator("_"))
            .build()?;

        config.try_deserialize()
    }
}

/// Process-wide settings, loaded on first use.
pub fn settings() -> &'static Settings {
    static SETTINGS: OnceLock<Settings> = OnceLock::new();
    SETTINGS.get_or_init(|| match Settings::new() {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!("invalid settings, falling back to defaults: {err}");
            Settings::default()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_file_or_env() {
        let settings = Settings::default();
        assert_eq!(settings.password.min, 1);
        assert_eq!(settings.password.max, 128);
        assert_eq!(settings.qr.capacity, 2048);
    }

    #[test]
    fn environment_overrides_defaults() {
        std::env::set_var("PASSWORD_MAX", "64");
        let settings = Settings::new().unwrap_or_default();
        assert_eq!(settings.password.max, 64);
        assert_eq!(settings.password.min, 1);
    }
}
