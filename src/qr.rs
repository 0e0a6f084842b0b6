use image::{DynamicImage, Luma};
use qrcode::{EcLevel, QrCode};

use crate::error::AssetError;
use crate::output::RasterImage;

/// Pixels per QR module
const MODULE_PX: u32 = 4;

/// Encodes `url` as a black-on-white QR code with a quiet zone, at medium
/// error correction so a printed copy still scans.
pub fn generate(url: &str, name: &str) -> Result<RasterImage, AssetError> {
    let code = QrCode::with_error_correction_level(url.as_bytes(), EcLevel::M)
        .map_err(|e| AssetError::Qr(e.to_string()))?;

    let gray = code
        .render::<Luma<u8>>()
        .quiet_zone(true)
        .module_dimensions(MODULE_PX, MODULE_PX)
        .build();

    Ok(RasterImage {
        name: name.to_string(),
        pixels: DynamicImage::ImageLuma8(gray).to_rgba8(),
    })
}
