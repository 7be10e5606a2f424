//! QR code rendering and saving

use crate::error::{Error, Result};
use crate::validate::is_valid_url;
use image::{DynamicImage, Luma};
use qrcode::{EcLevel, QrCode};
use std::path::Path;
use tracing::{error, info};

/// Pixel width and height of a single QR module in the rendered image.
const MODULE_PIXELS: u32 = 10;

/// Render `url` into a QR code image using the fixed visual configuration:
/// medium error correction, 10x10 px modules, standard quiet zone.
pub fn render(url: &str) -> Result<DynamicImage> {
    let code = QrCode::with_error_correction_level(url, EcLevel::M)
        .map_err(|e| Error::QrEncode(format!("Failed to create QR code: {e}")))?;

    let image = code
        .render::<Luma<u8>>()
        .module_dimensions(MODULE_PIXELS, MODULE_PIXELS)
        .build();

    Ok(DynamicImage::ImageLuma8(image))
}

/// Generate a QR code for `url` and write it to `output_path`, overwriting
/// any existing file. The parent directory is expected to exist already.
///
/// Invalid URLs are skipped without touching the filesystem, leaving only the
/// validator's warning behind. Rendering and write failures are logged and
/// swallowed; the outcome is observable through the filesystem and the log
/// stream, not a return value.
pub fn generate_qr_code(url: &str, output_path: &Path) {
    if !is_valid_url(url) {
        return;
    }

    match render_to_file(url, output_path) {
        Ok(()) => info!("QR code successfully saved to {}", output_path.display()),
        Err(e) => error!("An error occurred while generating or saving the QR code: {e}"),
    }
}

fn render_to_file(url: &str, output_path: &Path) -> Result<()> {
    let image = render(url)?;
    image.save(output_path)?;
    Ok(())
}
