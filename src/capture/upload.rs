//! Decoding of operator-chosen image files.

use tracing::info;

use super::CapturedImage;
use crate::error::BoothError;

/// Decode an uploaded file into the same raster representation used for live
/// capture. Accepts anything the `image` crate can decode; malformed input
/// fails with [`BoothError::InvalidImage`].
pub fn decode_upload(bytes: &[u8]) -> Result<CapturedImage, BoothError> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| BoothError::InvalidImage(e.to_string()))?;
    info!("Decoded uploaded image: {}x{}", img.width(), img.height());

    CapturedImage::from_image(&img).map_err(BoothError::InvalidImage)
}
