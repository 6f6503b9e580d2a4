//! Tiling configuration threaded through the planner and extractor.
//!
//! One [`TilerConfig`] value describes a whole pyramid run: tile
//! dimensions, the edge-tile threshold, output format, and encoding
//! quality. The value is built once (in `main`, from CLI flags) and passed
//! by reference everywhere — no globals, no per-level overrides.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output encoding for tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileFormat {
    Jpeg,
    Png,
}

impl TileFormat {
    /// File extension used in tile paths (`<x>_<y>.<ext>`).
    pub fn extension(self) -> &'static str {
        match self {
            TileFormat::Jpeg => "jpg",
            TileFormat::Png => "png",
        }
    }
}

impl std::fmt::Display for TileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TileFormat::Jpeg => "jpeg",
            TileFormat::Png => "png",
        })
    }
}

/// Quality setting for lossy tile encoding (1-100). Ignored for PNG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u8);

impl Quality {
    pub fn new(value: u8) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(75)
    }
}

/// Settings for one pyramid run.
///
/// Tile size is fixed for the whole pyramid; the threshold decides whether
/// a trailing remainder on an axis earns its own padded tile (see
/// [`crate::grid::tile_count`]).
#[derive(Debug, Clone, Copy)]
pub struct TilerConfig {
    /// Tile width in pixels.
    pub tile_width: u32,
    /// Tile height in pixels.
    pub tile_height: u32,
    /// Minimum trailing remainder (in pixels) that earns an extra tile.
    pub edge_threshold: u32,
    /// Encoding for tile files.
    pub format: TileFormat,
    /// Lossy encoding quality.
    pub quality: Quality,
}

impl Default for TilerConfig {
    fn default() -> Self {
        Self {
            tile_width: 256,
            tile_height: 256,
            edge_threshold: 20,
            format: TileFormat::Jpeg,
            quality: Quality::default(),
        }
    }
}

/// Number of rayon worker threads to use.
///
/// Caps at the number of available CPU cores — the user can constrain
/// down, not up.
pub fn effective_threads(requested: Option<usize>) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    requested.map(|n| n.clamp(1, cores)).unwrap_or(cores)
}
