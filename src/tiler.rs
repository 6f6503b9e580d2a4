//! Pipeline orchestration: decode → plan → parallel extract → manifest.
//!
//! Level extraction fans out across the rayon pool, one task per level.
//! Every task is joined before this module returns: a run either yields a
//! complete pyramid plus its `pyramid.json` descriptor, or a
//! [`TileError::Levels`] naming each level that failed. Nothing is
//! fire-and-forget and nothing is silently dropped.

use crate::codec::{CodecError, TileCodec};
use crate::config::{TileFormat, TilerConfig};
use crate::extract::{self, LevelReport};
use crate::pyramid::{self, PyramidLevel};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One level task that did not complete.
#[derive(Error, Debug)]
#[error("level {level}: {source}")]
pub struct LevelFailure {
    pub level: u32,
    #[source]
    pub source: CodecError,
}

#[derive(Error, Debug)]
pub enum TileError {
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: CodecError,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{} level task(s) failed: {}", .0.len(), format_failures(.0))]
    Levels(Vec<LevelFailure>),
}

fn format_failures(failures: &[LevelFailure]) -> String {
    failures
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Pyramid descriptor written to `<output_root>/pyramid.json`.
///
/// Everything a deep-zoom viewer needs to address tiles: the fixed tile
/// size, the encoding, and each level's dimensions and grid.
#[derive(Debug, Serialize, Deserialize)]
pub struct PyramidManifest {
    pub tile_width: u32,
    pub tile_height: u32,
    pub format: TileFormat,
    pub source_width: u32,
    pub source_height: u32,
    pub levels: Vec<LevelEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LevelEntry {
    pub level: u32,
    pub width: u32,
    pub height: u32,
    pub tiles_across: u32,
    pub tiles_down: u32,
    pub tiles_written: u32,
}

impl PyramidManifest {
    fn new<I>(
        source_dims: (u32, u32),
        levels: &[PyramidLevel<I>],
        reports: &[LevelReport],
        config: &TilerConfig,
    ) -> Self {
        let levels = levels
            .iter()
            .zip(reports)
            .map(|(level, report)| LevelEntry {
                level: level.level,
                width: level.width,
                height: level.height,
                tiles_across: level.tiles_across,
                tiles_down: level.tiles_down,
                tiles_written: report.tiles_written,
            })
            .collect();
        Self {
            tile_width: config.tile_width,
            tile_height: config.tile_height,
            format: config.format,
            source_width: source_dims.0,
            source_height: source_dims.1,
            levels,
        }
    }

    /// Total tiles across all levels.
    pub fn total_tiles(&self) -> u32 {
        self.levels.iter().map(|l| l.tiles_written).sum()
    }
}

/// Build the full pyramid for one input image.
///
/// 1. Decode the input — failure aborts before any level work.
/// 2. Plan all levels sequentially (each level's image is resized from
///    the previous one).
/// 3. Extract every level concurrently on the rayon pool and join.
/// 4. On full success, write `pyramid.json` and return the manifest;
///    otherwise surface the failed levels in aggregate.
pub fn tile_pyramid<C: TileCodec>(
    codec: &C,
    input: &Path,
    output_root: &Path,
    config: &TilerConfig,
) -> Result<PyramidManifest, TileError> {
    let source = codec.open(input).map_err(|source| TileError::Decode {
        path: input.to_path_buf(),
        source,
    })?;
    let source_dims = codec.dimensions(&source);

    let levels = pyramid::plan(codec, source, output_root, config);
    std::fs::create_dir_all(output_root)?;

    let results: Vec<Result<LevelReport, LevelFailure>> = levels
        .par_iter()
        .map(|level| {
            extract::extract_level(codec, level, config).map_err(|source| LevelFailure {
                level: level.level,
                source,
            })
        })
        .collect();

    let mut reports = Vec::with_capacity(levels.len());
    let mut failures = Vec::new();
    for result in results {
        match result {
            Ok(report) => reports.push(report),
            Err(failure) => failures.push(failure),
        }
    }
    if !failures.is_empty() {
        return Err(TileError::Levels(failures));
    }

    let manifest = PyramidManifest::new(source_dims, &levels, &reports, config);
    let json = serde_json::to_string_pretty(&manifest)?;
    std::fs::write(output_root.join("pyramid.json"), json)?;

    Ok(manifest)
}
