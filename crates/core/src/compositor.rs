// Copyright (C) 2024 The Autotile Expander developers
//
// This file is part of Autotile Expander.
//
// Autotile Expander is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Autotile Expander is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Autotile Expander.  If not, see <http://www.gnu.org/licenses/>.

use glam::UVec2;
use image::{imageops, GenericImageView, RgbaImage};
use rayon::prelude::*;

use crate::{
    subtile_origin, Quadrant, Result, TileDimensions, AUTOTILE_ID_AMOUNT, CASES,
    EXPANDED_COLUMNS,
};

/// Expands a 3x4 tile autotile sheet into the 8x6 tile blob tileset.
///
/// Fails if `source` is not exactly 3x4 tiles of `dimensions`; `source` is never modified.
pub fn expand(source: &RgbaImage, dimensions: TileDimensions) -> Result<RgbaImage> {
    dimensions.check_source(source.width(), source.height())?;
    Ok(composite(source, dimensions))
}

/// Where tile `id` sits in the expanded tileset.
pub fn tile_origin(id: u32, dimensions: TileDimensions) -> UVec2 {
    // Reset x every 8 tiles, increase y every 8 tiles
    UVec2::new(id % EXPANDED_COLUMNS, id / EXPANDED_COLUMNS) * dimensions.size()
}

/// Builds one full tile out of the four subtiles `case` refers to.
pub fn compose_tile(source: &RgbaImage, dimensions: TileDimensions, case: &[u32; 4]) -> RgbaImage {
    let subtile_size = dimensions.subtile_size();
    let mut tile = RgbaImage::new(dimensions.width(), dimensions.height());

    for quadrant in Quadrant::ALL {
        let from = subtile_origin(quadrant.subtile(case), subtile_size);
        let to = quadrant.offset(subtile_size);

        let subtile = source.view(from.x, from.y, subtile_size.x, subtile_size.y);
        imageops::replace(&mut tile, &*subtile, i64::from(to.x), i64::from(to.y));
    }

    tile
}

/// `source` must already have been checked against `dimensions`.
pub(crate) fn composite(source: &RgbaImage, dimensions: TileDimensions) -> RgbaImage {
    // every tile is composed on its own, the collect waits for all of them
    let tiles: Vec<RgbaImage> = CASES
        .par_iter()
        .map(|case| compose_tile(source, dimensions, case))
        .collect();

    let size = dimensions.expanded_size();
    let mut expanded = RgbaImage::new(size.x, size.y);
    for (id, tile) in (0..AUTOTILE_ID_AMOUNT).zip(&tiles) {
        let origin = tile_origin(id, dimensions);
        imageops::replace(&mut expanded, tile, i64::from(origin.x), i64::from(origin.y));
    }

    tracing::debug!(
        "Composited {} tiles of {}x{} into a {}x{} tileset",
        tiles.len(),
        dimensions.width(),
        dimensions.height(),
        size.x,
        size.y
    );

    expanded
}

#[cfg(test)]
mod tests {
    use super::*;
    use autotile_result::Error;
    use image::Rgba;

    /// Every pixel encodes its own position so any misplaced copy shows up.
    fn coordinate_sheet(dimensions: TileDimensions) -> RgbaImage {
        let size = dimensions.sheet_size();
        RgbaImage::from_fn(size.x, size.y, |x, y| {
            Rgba([x as u8, y as u8, (x ^ y) as u8, 255 - (x + y) as u8])
        })
    }

    fn assert_block_eq(
        expanded: &RgbaImage,
        to: UVec2,
        source: &RgbaImage,
        from: UVec2,
        size: UVec2,
    ) {
        for (x, y) in itertools::iproduct!(0..size.x, 0..size.y) {
            assert_eq!(
                expanded.get_pixel(to.x + x, to.y + y),
                source.get_pixel(from.x + x, from.y + y),
                "pixel ({x}, {y}) of block at {to} should come from {from}"
            );
        }
    }

    #[test]
    fn expanded_size_is_eight_by_six_tiles() {
        for (width, height) in [(2, 2), (32, 32), (16, 24), (48, 10)] {
            let dimensions = TileDimensions::new(width, height).unwrap();
            let expanded = expand(&coordinate_sheet(dimensions), dimensions).unwrap();

            assert_eq!(expanded.dimensions(), (width * 8, height * 6));
        }
    }

    #[test]
    fn every_quadrant_is_an_exact_copy() {
        for (width, height) in [(32, 32), (6, 4)] {
            let dimensions = TileDimensions::new(width, height).unwrap();
            let subtile_size = dimensions.subtile_size();
            let source = coordinate_sheet(dimensions);
            let expanded = expand(&source, dimensions).unwrap();

            for (id, case) in (0..AUTOTILE_ID_AMOUNT).zip(CASES.iter()) {
                let origin = tile_origin(id, dimensions);
                for quadrant in Quadrant::ALL {
                    assert_block_eq(
                        &expanded,
                        origin + quadrant.offset(subtile_size),
                        &source,
                        subtile_origin(quadrant.subtile(case), subtile_size),
                        subtile_size,
                    );
                }
            }
        }
    }

    #[test]
    fn first_tile_of_32px_sheet() {
        let dimensions = TileDimensions::new(32, 32).unwrap();
        let source = coordinate_sheet(dimensions);
        let expanded = expand(&source, dimensions).unwrap();
        let size = UVec2::splat(16);

        assert_block_eq(&expanded, UVec2::new(0, 0), &source, UVec2::new(32, 64), size);
        assert_block_eq(&expanded, UVec2::new(16, 0), &source, UVec2::new(48, 64), size);
        assert_block_eq(&expanded, UVec2::new(0, 16), &source, UVec2::new(32, 80), size);
        assert_block_eq(&expanded, UVec2::new(16, 16), &source, UVec2::new(48, 80), size);
    }

    #[test]
    fn compose_tile_builds_a_single_tile() {
        let dimensions = TileDimensions::new(4, 4).unwrap();
        let source = coordinate_sheet(dimensions);

        let tile = compose_tile(&source, dimensions, &[0, 47, 6, 41]);

        assert_eq!(tile.dimensions(), (4, 4));
        let size = UVec2::splat(2);
        assert_block_eq(&tile, UVec2::new(0, 0), &source, UVec2::new(0, 0), size);
        assert_block_eq(&tile, UVec2::new(2, 0), &source, UVec2::new(10, 14), size);
        assert_block_eq(&tile, UVec2::new(0, 2), &source, UVec2::new(0, 2), size);
        assert_block_eq(&tile, UVec2::new(2, 2), &source, UVec2::new(10, 12), size);
    }

    #[test]
    fn alpha_is_copied_untouched() {
        let dimensions = TileDimensions::new(2, 2).unwrap();
        let size = dimensions.sheet_size();
        let source = RgbaImage::from_fn(size.x, size.y, |x, y| {
            Rgba([10, 20, 30, (x + y * size.x) as u8])
        });
        let expanded = expand(&source, dimensions).unwrap();

        // tile 0, top left quadrant comes from subtile 26 at (2, 4)
        assert_eq!(expanded.get_pixel(0, 0), &Rgba([10, 20, 30, 26]));
        // tile 1, top left quadrant comes from subtile 4 at (4, 0)
        assert_eq!(expanded.get_pixel(2, 0), &Rgba([10, 20, 30, 4]));
    }

    #[test]
    fn expansion_is_deterministic() {
        let dimensions = TileDimensions::new(16, 16).unwrap();
        let source = coordinate_sheet(dimensions);

        let first = expand(&source, dimensions).unwrap();
        let second = expand(&source, dimensions).unwrap();

        assert_eq!(first.as_raw(), second.as_raw());
    }

    #[test]
    fn duplicate_cases_produce_identical_tiles() {
        let dimensions = TileDimensions::new(8, 8).unwrap();
        let expanded = expand(&coordinate_sheet(dimensions), dimensions).unwrap();

        let tile = |id| {
            let origin = tile_origin(id, dimensions);
            expanded.view(origin.x, origin.y, 8, 8).to_image()
        };
        assert_eq!(tile(46), tile(47));
        assert_ne!(tile(45), tile(46));
    }

    #[test]
    fn wrong_source_size_is_rejected() {
        let dimensions = TileDimensions::new(32, 32).unwrap();
        let source = RgbaImage::new(95, 128);

        assert!(matches!(
            expand(&source, dimensions),
            Err(Error::SourceSizeMismatch { .. })
        ));
    }

    #[test]
    fn tile_origins_wrap_every_eight_tiles() {
        let dimensions = TileDimensions::new(32, 16).unwrap();

        assert_eq!(tile_origin(0, dimensions), UVec2::new(0, 0));
        assert_eq!(tile_origin(7, dimensions), UVec2::new(224, 0));
        assert_eq!(tile_origin(8, dimensions), UVec2::new(0, 16));
        assert_eq!(tile_origin(47, dimensions), UVec2::new(224, 80));
    }
}
