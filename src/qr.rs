//! QR code rendering for out-of-band passkey transfer.

use std::io::Cursor;

use data_encoding::BASE64;
use image::{DynamicImage, ImageFormat, Luma};
use qrcode::{EcLevel, QrCode};
use thiserror::Error;

/// Pixel size of one QR module.
const MODULE_PIXELS: u32 = 10;

#[derive(Error, Debug)]
pub enum QrRenderError {
    #[error("invalid QR content: {0}")]
    Encode(String),
    #[error("encode image failed: {0}")]
    Image(#[from] image::ImageError),
}

/// Renders `content` as a black-on-white QR code and returns the PNG bytes.
pub fn render_qr_png(content: &str) -> Result<Vec<u8>, QrRenderError> {
    let code = QrCode::with_error_correction_level(content.as_bytes(), EcLevel::M)
        .map_err(|e| QrRenderError::Encode(e.to_string()))?;
    let image = code
        .render::<Luma<u8>>()
        .module_dimensions(MODULE_PIXELS, MODULE_PIXELS)
        .quiet_zone(true)
        .build();

    let mut buffer = Vec::new();
    DynamicImage::ImageLuma8(image).write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;
    Ok(buffer)
}

/// Same as [`render_qr_png`], base64 encoded for embedding in JSON.
pub fn render_qr_png_base64(content: &str) -> Result<String, QrRenderError> {
    Ok(BASE64.encode(&render_qr_png(content)?))
}
