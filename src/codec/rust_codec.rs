//! Production codec on the pure-Rust `image` crate.
//!
//! Decoders for JPEG, PNG, TIFF, and WebP are compiled in; everything is
//! statically linked into the binary. Resampling is Lanczos3, the same
//! filter for halving levels and nothing else — tiles are crops, never
//! resampled.

use super::backend::{CodecError, TileCodec};
use crate::config::Quality;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::path::Path;

/// Codec backed by the `image` crate.
pub struct RustCodec;

impl RustCodec {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustCodec {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode and save as JPEG. JPEG has no alpha channel, so the image is
/// flattened to RGB first (decoded PNGs may carry alpha).
fn save_jpeg(img: &DynamicImage, path: &Path, quality: Quality) -> Result<(), CodecError> {
    let file = std::fs::File::create(path).map_err(CodecError::Io)?;
    let writer = std::io::BufWriter::new(file);
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(writer, quality.value());
    img.to_rgb8()
        .write_with_encoder(encoder)
        .map_err(|e| CodecError::Encode(format!("JPEG encode failed: {e}")))
}

fn save_png(img: &DynamicImage, path: &Path) -> Result<(), CodecError> {
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|e| CodecError::Encode(format!("PNG encode failed: {e}")))
}

impl TileCodec for RustCodec {
    type Image = DynamicImage;

    fn open(&self, path: &Path) -> Result<DynamicImage, CodecError> {
        ImageReader::open(path)
            .map_err(CodecError::Io)?
            .decode()
            .map_err(|e| CodecError::Decode(format!("{}: {e}", path.display())))
    }

    fn dimensions(&self, image: &DynamicImage) -> (u32, u32) {
        (image.width(), image.height())
    }

    fn resize(&self, image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
        image.resize_exact(width, height, FilterType::Lanczos3)
    }

    fn crop(&self, image: &DynamicImage, x: u32, y: u32, width: u32, height: u32) -> DynamicImage {
        // Clamp the box to the valid pixels; trailing tiles request a box
        // that hangs past the image edge.
        let x = x.min(image.width());
        let y = y.min(image.height());
        let width = width.min(image.width() - x);
        let height = height.min(image.height() - y);
        image.crop_imm(x, y, width, height)
    }

    fn blank(&self, reference: &DynamicImage, width: u32, height: u32) -> DynamicImage {
        DynamicImage::new(width, height, reference.color())
    }

    fn paste(&self, canvas: &mut DynamicImage, region: &DynamicImage, x: u32, y: u32) {
        image::imageops::replace(canvas, region, i64::from(x), i64::from(y));
    }

    fn save(&self, image: &DynamicImage, path: &Path, quality: Quality) -> Result<(), CodecError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "jpg" | "jpeg" => save_jpeg(image, path, quality),
            "png" => save_png(image, path),
            other => Err(CodecError::Encode(format!(
                "unsupported output format: {other}"
            ))),
        }
    }
}
