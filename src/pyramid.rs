//! Sequential level planning — iterative halving into owned descriptors.
//!
//! Planning is the only sequential part of the pipeline: level *n+1*'s
//! image is resized from level *n*'s, so the halving chain cannot
//! parallelize. The payoff is that every emitted [`PyramidLevel`] owns a
//! fully-resized image and can be extracted independently afterwards.

use crate::codec::TileCodec;
use crate::config::TilerConfig;
use crate::grid::{tile_count, total_levels};
use std::path::{Path, PathBuf};

/// One resolution level of the pyramid, ready for tile extraction.
///
/// Created once by [`plan`], immutable thereafter, consumed exactly once
/// by [`crate::extract::extract_level`]. The image is this level's own
/// copy — levels share no pixel state.
#[derive(Debug)]
pub struct PyramidLevel<I> {
    /// Level index: 0 is full resolution, increasing with decreasing size.
    pub level: u32,
    /// This level's image, at its final resolution.
    pub image: I,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Tile grid columns.
    pub tiles_across: u32,
    /// Tile grid rows.
    pub tiles_down: u32,
    /// Directory under which this level's subtree is written.
    pub output_root: PathBuf,
}

/// Plan the full pyramid for a source image.
///
/// Emits one descriptor per level until `total_levels` is reached, or
/// stops early the instant a halved axis would collapse to zero (no
/// zero-sized descriptor is ever emitted, and no resize is attempted).
/// Deterministic: the schedule depends only on the source dimensions and
/// the config.
pub fn plan<C: TileCodec>(
    codec: &C,
    source: C::Image,
    output_root: &Path,
    config: &TilerConfig,
) -> Vec<PyramidLevel<C::Image>> {
    let (source_width, source_height) = codec.dimensions(&source);
    let total = total_levels(source_width, source_height);

    let mut levels = Vec::with_capacity(total as usize);
    let mut current = source;
    let (mut width, mut height) = (source_width, source_height);

    for level in 0..total {
        let tiles_across = tile_count(width, config.tile_width, config.edge_threshold);
        let tiles_down = tile_count(height, config.tile_height, config.edge_threshold);

        let (next_width, next_height) = (width.div_ceil(2), height.div_ceil(2));
        let next = if level + 1 < total && next_width > 0 && next_height > 0 {
            Some(codec.resize(&current, next_width, next_height))
        } else {
            None
        };

        levels.push(PyramidLevel {
            level,
            image: current,
            width,
            height,
            tiles_across,
            tiles_down,
            output_root: output_root.to_path_buf(),
        });

        match next {
            Some(image) => {
                current = image;
                (width, height) = (next_width, next_height);
            }
            None => break,
        }
    }

    levels
}
