//! Pure grid math for pyramid planning.
//!
//! All functions here are pure and testable without any I/O or images.

/// Number of tiles needed along one axis.
///
/// The trailing remainder only earns its own (padded) tile when it is at
/// least `threshold` pixels; thinner slivers are discarded. An image
/// smaller than one tile still yields exactly one tile.
///
/// # Examples
/// ```
/// # use zoomtile::grid::tile_count;
/// // 1 px leftover is below the threshold — discard it
/// assert_eq!(tile_count(257, 256, 20), 1);
///
/// // 44 px leftover is worth a padded tile
/// assert_eq!(tile_count(300, 256, 20), 2);
/// ```
pub fn tile_count(measurement: u32, tile_size: u32, threshold: u32) -> u32 {
    let remainder = measurement % tile_size;
    let count = if remainder < threshold {
        measurement / tile_size
    } else {
        measurement.div_ceil(tile_size)
    };
    count.max(1)
}

/// Total number of pyramid levels for a source image.
///
/// `floor(1 + log2(max(width, height)))`, computed once from the level-0
/// dimensions. A degenerate zero-sized input has no levels.
pub fn total_levels(width: u32, height: u32) -> u32 {
    let longest = width.max(height);
    if longest == 0 {
        return 0;
    }
    1 + longest.ilog2()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remainder_below_threshold_is_discarded() {
        assert_eq!(tile_count(257, 256, 20), 1);
        assert_eq!(tile_count(275, 256, 20), 1); // remainder 19, just under
    }

    #[test]
    fn exact_multiple_needs_no_extra_tile() {
        assert_eq!(tile_count(256, 256, 20), 1);
        assert_eq!(tile_count(512, 256, 20), 2);
    }

    #[test]
    fn remainder_at_threshold_earns_a_tile() {
        assert_eq!(tile_count(276, 256, 20), 2); // remainder 20, not < 20
        assert_eq!(tile_count(300, 256, 20), 2);
    }

    #[test]
    fn image_smaller_than_one_tile_still_yields_one() {
        assert_eq!(tile_count(10, 256, 20), 1); // remainder 10 < 20, floor 0 → clamp
        assert_eq!(tile_count(128, 256, 20), 1); // remainder 128 ≥ 20, ceil 1
        assert_eq!(tile_count(0, 256, 20), 1);
    }

    #[test]
    fn tile_count_is_always_at_least_one() {
        for measurement in [0, 1, 19, 20, 255, 256, 257, 1000, 100_000] {
            for threshold in [0, 1, 20, 255] {
                assert!(tile_count(measurement, 256, threshold) >= 1);
            }
        }
    }

    #[test]
    fn non_square_tile_sizes() {
        assert_eq!(tile_count(1024, 512, 20), 2);
        assert_eq!(tile_count(1030, 512, 20), 2); // remainder 6 discarded
        assert_eq!(tile_count(1100, 512, 20), 3); // remainder 76 kept
    }

    #[test]
    fn total_levels_powers_of_two() {
        assert_eq!(total_levels(256, 256), 9);
        assert_eq!(total_levels(1024, 1024), 11);
        assert_eq!(total_levels(1, 1), 1);
    }

    #[test]
    fn total_levels_uses_longest_edge() {
        assert_eq!(total_levels(1025, 766), 11);
        assert_eq!(total_levels(766, 1025), 11);
        assert_eq!(total_levels(2048, 1), 12);
    }

    #[test]
    fn total_levels_degenerate_input() {
        assert_eq!(total_levels(0, 0), 0);
    }
}
