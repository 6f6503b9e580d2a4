//! # Zoomtile
//!
//! Cut a single raster image into a multi-resolution tile pyramid for
//! deep-zoom viewers. Level 0 is the full-resolution image; every
//! subsequent level halves both dimensions (rounded up), and each level is
//! sliced into fixed-size tiles written as individual files:
//!
//! ```text
//! output/photo/
//! ├── pyramid.json           # pyramid descriptor for viewers
//! ├── 0/                     # full resolution
//! │   ├── 0_0.jpg
//! │   ├── 256_0.jpg
//! │   └── ...
//! ├── 1/                     # half resolution
//! │   └── ...
//! └── 11/                    # 1×1 pixel apex
//!     └── 0_0.jpg
//! ```
//!
//! # Architecture: Plan, Then Fan Out
//!
//! The pipeline has a strictly sequential planning phase followed by an
//! embarrassingly parallel extraction phase:
//!
//! ```text
//! 1. Plan      source image  →  Vec<PyramidLevel>   (iterative halving)
//! 2. Extract   one level     →  <level>/<x>_<y>.jpg (one rayon task each)
//! ```
//!
//! Planning cannot parallelize — each level's image is resized from the
//! previous one — but once planned, every [`pyramid::PyramidLevel`] owns
//! its own image copy and writes to a disjoint directory, so extraction
//! needs no locking. The orchestrator joins all level tasks and reports
//! failures in aggregate; a run either produces a complete pyramid plus
//! its manifest, or a typed error naming the levels that failed.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`grid`] | Pure grid math: tile counts per axis, total level count |
//! | [`pyramid`] | Sequential level planning — iterative halving into owned level descriptors |
//! | [`extract`] | Row-major tile walk for one level: crop, pad, encode |
//! | [`tiler`] | Orchestrator: decode → plan → parallel extract → manifest |
//! | [`codec`] | [`codec::TileCodec`] trait + the `image`-crate implementation |
//! | [`config`] | [`config::TilerConfig`] value threaded through planner and extractor |
//!
//! # Design Decisions
//!
//! ## Edge-Tile Threshold
//!
//! An axis whose trailing remainder is smaller than the threshold (default
//! 20 px) does not get an extra tile — a sliver that thin is not worth a
//! padded file. Larger remainders get a final tile padded with blank
//! pixels to full tile size, so every emitted file has identical
//! dimensions and viewers never special-case the image edge.
//!
//! ## Codec Behind a Trait
//!
//! All pixel work (decode, resize, crop, paste, encode) sits behind
//! [`codec::TileCodec`]. The production implementation is the pure-Rust
//! `image` crate; tests swap in a recording mock so planning and
//! extraction logic is exercised without encoding a single pixel.
//!
//! ## Explicit Configuration
//!
//! Tile size, threshold, format, and quality travel in a
//! [`config::TilerConfig`] value passed to the planner and extractor.
//! There is no process-wide mutable state; two pyramids with different
//! settings can be built from the same process.

pub mod codec;
pub mod config;
pub mod extract;
pub mod grid;
pub mod pyramid;
pub mod tiler;
