//! Image acquisition: live camera capture and file upload.
//!
//! Both paths normalize to [`CapturedImage`], a PNG-encoded still frame, so
//! the rest of the workflow never cares where a photo came from.

pub mod camera;
pub mod countdown;
pub mod upload;

use std::io::Cursor;

use image::{DynamicImage, ImageFormat};

pub use camera::{LiveStream, MediaSource};
pub use countdown::CountdownTimer;
pub use upload::decode_upload;

/// A single still frame, PNG-encoded at its native resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl CapturedImage {
    /// Encode a decoded raster into the uniform PNG representation.
    pub fn from_image(img: &DynamicImage) -> Result<Self, String> {
        let mut buffer = Cursor::new(Vec::new());
        img.write_to(&mut buffer, ImageFormat::Png)
            .map_err(|e| format!("Failed to encode frame as PNG: {}", e))?;
        Ok(Self {
            png: buffer.into_inner(),
            width: img.width(),
            height: img.height(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.png.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_image_preserves_dimensions() {
        let img = DynamicImage::new_rgb8(320, 240);
        let captured = CapturedImage::from_image(&img).unwrap();
        assert_eq!(captured.width, 320);
        assert_eq!(captured.height, 240);
        assert!(!captured.is_empty());
    }

    #[test]
    fn from_image_emits_png_bytes() {
        let img = DynamicImage::new_rgb8(10, 10);
        let captured = CapturedImage::from_image(&img).unwrap();
        // PNG signature
        assert_eq!(&captured.png[..4], &[0x89, b'P', b'N', b'G']);
    }
}
