use clap::Parser;
use std::path::{Path, PathBuf};
use zoomtile::codec::RustCodec;
use zoomtile::config::{self, Quality, TileFormat, TilerConfig};
use zoomtile::tiler;

#[derive(Parser)]
#[command(name = "zoomtile")]
#[command(about = "Cut a raster image into a deep-zoom tile pyramid")]
#[command(long_about = "\
Cut a raster image into a deep-zoom tile pyramid

Level 0 is the full-resolution image; every following level halves both
dimensions (rounded up) down to a 1×1 apex. Each level is sliced into
fixed-size tiles named by their pixel origin:

  output/photo/
  ├── pyramid.json        # descriptor for deep-zoom viewers
  ├── 0/                  # full resolution
  │   ├── 0_0.jpg
  │   ├── 256_0.jpg
  │   └── ...
  └── 11/                 # 1×1 apex
      └── 0_0.jpg

Trailing tiles are padded with blank pixels to full tile size, unless the
leftover sliver is thinner than --threshold pixels, in which case it is
discarded. Levels are extracted in parallel, one worker task per level.")]
#[command(version)]
struct Cli {
    /// Image file to tile (JPEG, PNG, TIFF, or WebP)
    input: PathBuf,

    /// Directory under which pyramids are written; each input gets a
    /// subdirectory named after its file stem
    #[arg(long, default_value = "output")]
    output: PathBuf,

    /// Tile width in pixels
    #[arg(long, default_value_t = 256)]
    tile_width: u32,

    /// Tile height in pixels
    #[arg(long, default_value_t = 256)]
    tile_height: u32,

    /// Minimum trailing remainder (in pixels) that earns an extra edge tile
    #[arg(long, default_value_t = 20)]
    threshold: u32,

    /// Tile encoding
    #[arg(long, value_enum, default_value_t = TileFormat::Jpeg)]
    format: TileFormat,

    /// JPEG quality (1-100); ignored for PNG
    #[arg(long, default_value_t = 75)]
    quality: u8,

    /// Cap on worker threads (defaults to all cores)
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    init_thread_pool(cli.threads);

    let config = TilerConfig {
        tile_width: cli.tile_width,
        tile_height: cli.tile_height,
        edge_threshold: cli.threshold,
        format: cli.format,
        quality: Quality::new(cli.quality),
    };
    let output_root = output_root_for(&cli.input, &cli.output);

    println!("==> Tiling {}", cli.input.display());
    let codec = RustCodec::new();
    let manifest = tiler::tile_pyramid(&codec, &cli.input, &output_root, &config)?;

    for level in &manifest.levels {
        println!(
            "    level {:>2}: {}×{} px, {}×{} tiles",
            level.level, level.width, level.height, level.tiles_across, level.tiles_down
        );
    }
    println!(
        "==> Wrote {} tiles across {} levels → {}",
        manifest.total_tiles(),
        manifest.levels.len(),
        output_root.display()
    );

    Ok(())
}

/// Initialize the rayon thread pool.
///
/// Caps at the number of available CPU cores — user can constrain down, not up.
fn init_thread_pool(threads: Option<usize>) {
    rayon::ThreadPoolBuilder::new()
        .num_threads(config::effective_threads(threads))
        .build_global()
        .ok();
}

/// Pyramid directory for an input file: `<output>/<input file stem>`.
fn output_root_for(input: &Path, output: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "pyramid".to_string());
    output.join(stem)
}
