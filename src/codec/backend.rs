//! The codec trait every backend must satisfy.
//!
//! [`TileCodec`] is the full collaborator contract between the pyramid
//! logic and the pixel layer: open, dimensions, resize, crop, blank,
//! paste, save. Planning and extraction are generic over it, so the test
//! suite can exercise grid walks and halving schedules against a recording
//! mock without decoding or encoding anything.

use crate::config::Quality;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("encode failed: {0}")]
    Encode(String),
}

/// Pixel operations needed to build a tile pyramid.
///
/// `resize`, `crop`, and `blank` are out-of-place: they return a new image
/// and never touch the input. `crop` clamps the requested box to the
/// image's actual bounds, so a box hanging past the trailing edge yields
/// only the valid pixels (the extractor pads the rest).
pub trait TileCodec: Sync {
    /// Decoded pixel data. Owned by exactly one pyramid level at a time.
    type Image: Send + Sync;

    /// Decode an image file.
    fn open(&self, path: &Path) -> Result<Self::Image, CodecError>;

    /// Width and height in pixels.
    fn dimensions(&self, image: &Self::Image) -> (u32, u32);

    /// Resample to exactly `width × height`, returning a new image.
    fn resize(&self, image: &Self::Image, width: u32, height: u32) -> Self::Image;

    /// Copy out the region at `(x, y)` of at most `width × height` pixels,
    /// clamped to the image bounds.
    fn crop(&self, image: &Self::Image, x: u32, y: u32, width: u32, height: u32) -> Self::Image;

    /// A blank (black) canvas of `width × height` in the same pixel format
    /// as `reference`.
    fn blank(&self, reference: &Self::Image, width: u32, height: u32) -> Self::Image;

    /// Paste `region` into `canvas` with its top-left corner at `(x, y)`.
    fn paste(&self, canvas: &mut Self::Image, region: &Self::Image, x: u32, y: u32);

    /// Encode and write to `path`, inferring the format from the extension.
    fn save(&self, image: &Self::Image, path: &Path, quality: Quality) -> Result<(), CodecError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Dimensions-only stand-in for decoded pixel data.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MockImage {
        pub width: u32,
        pub height: u32,
    }

    /// Mock codec that records operations without touching pixels.
    /// Uses Mutex (not RefCell) so it is Sync and works with rayon's par_iter.
    #[derive(Default)]
    pub struct MockCodec {
        pub open_results: Mutex<Vec<MockImage>>,
        pub operations: Mutex<Vec<RecordedOp>>,
        /// Saves whose path contains this substring fail with an encode error.
        pub fail_save_containing: Mutex<Option<String>>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum RecordedOp {
        Open(String),
        Resize { width: u32, height: u32 },
        Crop { x: u32, y: u32, width: u32, height: u32 },
        Blank { width: u32, height: u32 },
        Paste { x: u32, y: u32 },
        Save(String),
    }

    impl MockCodec {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_image(width: u32, height: u32) -> Self {
            Self {
                open_results: Mutex::new(vec![MockImage { width, height }]),
                ..Self::default()
            }
        }

        pub fn fail_saves_containing(self, needle: &str) -> Self {
            *self.fail_save_containing.lock().unwrap() = Some(needle.to_string());
            self
        }

        pub fn get_operations(&self) -> Vec<RecordedOp> {
            self.operations.lock().unwrap().clone()
        }

        fn record(&self, op: RecordedOp) {
            self.operations.lock().unwrap().push(op);
        }
    }

    impl TileCodec for MockCodec {
        type Image = MockImage;

        fn open(&self, path: &Path) -> Result<MockImage, CodecError> {
            self.record(RecordedOp::Open(path.to_string_lossy().to_string()));
            self.open_results
                .lock()
                .unwrap()
                .pop()
                .ok_or_else(|| CodecError::Decode("no mock image".to_string()))
        }

        fn dimensions(&self, image: &MockImage) -> (u32, u32) {
            (image.width, image.height)
        }

        fn resize(&self, _image: &MockImage, width: u32, height: u32) -> MockImage {
            self.record(RecordedOp::Resize { width, height });
            MockImage { width, height }
        }

        fn crop(&self, image: &MockImage, x: u32, y: u32, width: u32, height: u32) -> MockImage {
            self.record(RecordedOp::Crop { x, y, width, height });
            MockImage {
                width: width.min(image.width.saturating_sub(x)),
                height: height.min(image.height.saturating_sub(y)),
            }
        }

        fn blank(&self, _reference: &MockImage, width: u32, height: u32) -> MockImage {
            self.record(RecordedOp::Blank { width, height });
            MockImage { width, height }
        }

        fn paste(&self, _canvas: &mut MockImage, _region: &MockImage, x: u32, y: u32) {
            self.record(RecordedOp::Paste { x, y });
        }

        fn save(&self, _image: &MockImage, path: &Path, _quality: Quality) -> Result<(), CodecError> {
            let path = path.to_string_lossy().to_string();
            self.record(RecordedOp::Save(path.clone()));
            if let Some(needle) = self.fail_save_containing.lock().unwrap().as_deref()
                && path.contains(needle)
            {
                return Err(CodecError::Encode(format!("mock save failure: {path}")));
            }
            Ok(())
        }
    }

    #[test]
    fn mock_records_open() {
        let codec = MockCodec::with_image(800, 600);
        let img = codec.open(Path::new("/test/image.jpg")).unwrap();
        assert_eq!((img.width, img.height), (800, 600));

        let ops = codec.get_operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(&ops[0], RecordedOp::Open(p) if p == "/test/image.jpg"));
    }

    #[test]
    fn mock_open_without_image_is_decode_error() {
        let codec = MockCodec::new();
        let result = codec.open(Path::new("/missing.jpg"));
        assert!(matches!(result, Err(CodecError::Decode(_))));
    }

    #[test]
    fn mock_crop_clamps_to_bounds() {
        let codec = MockCodec::with_image(300, 300);
        let img = codec.open(Path::new("/t.jpg")).unwrap();

        let region = codec.crop(&img, 256, 256, 256, 256);
        assert_eq!((region.width, region.height), (44, 44));

        let past_edge = codec.crop(&img, 512, 0, 256, 256);
        assert_eq!(past_edge.width, 0);
    }

    #[test]
    fn mock_save_fails_on_matching_path() {
        let codec = MockCodec::with_image(10, 10).fail_saves_containing("/3/");
        let img = codec.open(Path::new("/t.jpg")).unwrap();

        assert!(codec.save(&img, Path::new("/out/2/0_0.jpg"), Quality::default()).is_ok());
        let result = codec.save(&img, Path::new("/out/3/0_0.jpg"), Quality::default());
        assert!(matches!(result, Err(CodecError::Encode(_))));
    }
}
