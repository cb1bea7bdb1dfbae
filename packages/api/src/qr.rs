//! # QR encoding — text to a base64 PNG data URI
//!
//! Encodes at error-correction level L with 10-pixel modules, black on
//! white. The rendered PNG is base64-encoded into a `data:` URI so the
//! client can use the same string as an `<img>` source and a download href.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::{DynamicImage, ImageFormat, Luma};
use qrcode::{EcLevel, QrCode};
use thiserror::Error;

/// Rendered pixel width of one QR module.
const MODULE_PIXELS: u32 = 10;

/// Reasons an encoding request is rejected.
#[derive(Debug, Error)]
pub enum QrError {
    #[error("Enter some text or a URL first")]
    EmptyData,
    #[error("Input is too long for a QR code (limit {0} bytes)")]
    TooLong(usize),
    #[error("QR encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),
    #[error("PNG encoding failed: {0}")]
    Png(#[from] image::ImageError),
}

/// Encode `data` into a QR code and return it as a PNG data URI.
pub fn encode_data_uri(data: &str, capacity: usize) -> Result<String, QrError> {
    if data.is_empty() {
        return Err(QrError::EmptyData);
    }
    if data.len() > capacity {
        return Err(QrError::TooLong(capacity));
    }

    let code = QrCode::with_error_correction_level(data, EcLevel::L)?;
    let modules = code
        .render::<Luma<u8>>()
        .module_dimensions(MODULE_PIXELS, MODULE_PIXELS)
        .build();

    let mut png = Vec::new();
    DynamicImage::ImageLuma8(modules).write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

    Ok(format!("data:image/png;base64,{}", STANDARD.encode(&png)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIX: &str = "data:image/png;base64,";

    #[test]
    fn renders_a_png_data_uri() {
        let uri = encode_data_uri("https://example.com", 2048).unwrap();
        assert!(uri.starts_with(PREFIX));

        let bytes = STANDARD.decode(&uri[PREFIX.len()..]).unwrap();
        assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
    }

    #[test]
    fn modules_are_scaled_to_ten_pixels() {
        let uri = encode_data_uri("hello", 2048).unwrap();
        let bytes = STANDARD.decode(&uri[PREFIX.len()..]).unwrap();
        let image = image::load_from_memory(&bytes).unwrap();

        // Version 1 is 21 modules per side; the quiet zone only adds to that.
        assert!(image.width() >= 21 * MODULE_PIXELS);
        assert_eq!(image.width() % MODULE_PIXELS, 0);
        assert_eq!(image.width(), image.height());
    }

    #[test]
    fn empty_data_is_rejected() {
        assert!(matches!(encode_data_uri("", 2048), Err(QrError::EmptyData)));
    }

    #[test]
    fn over_capacity_data_is_rejected() {
        assert!(matches!(
            encode_data_uri("far too long for this limit", 8),
            Err(QrError::TooLong(8))
        ));
    }
}
