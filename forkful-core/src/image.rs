//! Image validation before upload.
//!
//! Recipe photos are accepted as JPEG or PNG only; everything else is
//! rejected before encoding.

use std::io::Cursor;

use image::{ImageFormat, ImageReader};

/// Allowed image formats for recipe photos.
pub const ALLOWED_FORMATS: &[ImageFormat] = &[ImageFormat::Jpeg, ImageFormat::Png];

/// Maximum file size for images (10MB).
pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

/// Validate image data: check the format is allowed and detect the
/// content type. Returns the content type on success (e.g., "image/png").
pub fn validate_image(data: &[u8]) -> Result<String, String> {
    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| format!("Failed to read image: {}", e))?;

    let format = reader
        .format()
        .ok_or_else(|| "Could not detect image format".to_string())?;

    if !ALLOWED_FORMATS.contains(&format) {
        return Err(format!(
            "Unsupported image format: {:?}. Allowed: JPEG, PNG",
            format
        ));
    }

    Ok(format.to_mime_type().to_string())
}
