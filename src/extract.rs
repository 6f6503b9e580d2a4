//! Tile extraction for one pyramid level.
//!
//! Walks the level's grid in row-major order. Every tile is cropped from
//! the level's image, pasted at the origin of a blank tile-size canvas
//! (so trailing tiles are padded to full size), and written to
//! `<output_root>/<level>/<x>_<y>.<ext>`. Row-major order is a
//! convenience, not a contract — the only observable result is each tile
//! landing at its coordinate-derived path.

use crate::codec::{CodecError, TileCodec};
use crate::config::TilerConfig;
use crate::pyramid::PyramidLevel;

/// What one level task produced.
#[derive(Debug, Clone)]
pub struct LevelReport {
    pub level: u32,
    pub tiles_written: u32,
}

/// Extract every tile of one level.
///
/// Creates the level directory, then crops/pads/encodes each tile.
/// Directory-creation and encode failures are fatal to this level and
/// propagate to the caller; no tile is retried.
pub fn extract_level<C: TileCodec>(
    codec: &C,
    level: &PyramidLevel<C::Image>,
    config: &TilerConfig,
) -> Result<LevelReport, CodecError> {
    let level_dir = level.output_root.join(level.level.to_string());
    std::fs::create_dir_all(&level_dir)?;

    let mut tiles_written = 0;
    for row in 0..level.tiles_down {
        for col in 0..level.tiles_across {
            let begin_x = col * config.tile_width;
            let begin_y = row * config.tile_height;

            // The box may hang past the image edge; the codec clamps it
            // to the valid pixels.
            let region = codec.crop(
                &level.image,
                begin_x,
                begin_y,
                config.tile_width,
                config.tile_height,
            );

            let mut canvas = codec.blank(&level.image, config.tile_width, config.tile_height);
            codec.paste(&mut canvas, &region, 0, 0);

            let filename = format!("{}_{}.{}", begin_x, begin_y, config.format.extension());
            codec.save(&canvas, &level_dir.join(filename), config.quality)?;
            tiles_written += 1;
        }
    }

    Ok(LevelReport {
        level: level.level,
        tiles_written,
    })
}
