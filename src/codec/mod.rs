//! Image codec — all pixel work behind one trait.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** (JPEG, PNG, TIFF, WebP) | `image::ImageReader` |
//! | **Resize** | `image::DynamicImage::resize_exact` (Lanczos3) |
//! | **Crop** | `image::DynamicImage::crop_imm`, clamped to bounds |
//! | **Paste** | `image::imageops::replace` |
//! | **Encode** | JPEG (`JpegEncoder`, quality) or PNG (`img.save`) |
//!
//! The module is split into:
//! - **Backend**: the [`TileCodec`] trait and [`CodecError`]
//! - **RustCodec**: production implementation on the `image` crate

pub mod backend;
pub mod rust_codec;

pub use backend::{CodecError, TileCodec};
pub use rust_codec::RustCodec;
