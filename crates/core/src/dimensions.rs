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

use autotile_result::{Error, Result, Size};
use glam::UVec2;

use crate::{EXPANDED_COLUMNS, EXPANDED_ROWS, MIN_TILE_SIZE, SHEET_COLUMNS, SHEET_ROWS};

/// The size of one full tile, in pixels.
///
/// Both components are even and at least [`MIN_TILE_SIZE`]; the only way to get one is
/// through [`TileDimensions::new`], which checks that.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TileDimensions {
    width: u32,
    height: u32,
}

impl TileDimensions {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        // the expanded canvas is the largest image derived from a tile, it has to fit in u32
        let usable = |n: u32, tiles: u32| {
            n >= MIN_TILE_SIZE && n % 2 == 0 && n.checked_mul(tiles).is_some()
        };
        if !usable(width, EXPANDED_COLUMNS) || !usable(height, EXPANDED_ROWS) {
            return Err(Error::InvalidTileSize { width, height });
        }

        Ok(Self { width, height })
    }

    pub fn width(self) -> u32 {
        self.width
    }

    pub fn height(self) -> u32 {
        self.height
    }

    pub fn size(self) -> UVec2 {
        UVec2::new(self.width, self.height)
    }

    /// Size of one quarter of a tile.
    pub fn subtile_size(self) -> UVec2 {
        self.size() / 2
    }

    /// Size a source autotile sheet must have.
    pub fn sheet_size(self) -> UVec2 {
        self.size() * UVec2::new(SHEET_COLUMNS, SHEET_ROWS)
    }

    /// Size of the expanded 8x6 tileset.
    pub fn expanded_size(self) -> UVec2 {
        self.size() * UVec2::new(EXPANDED_COLUMNS, EXPANDED_ROWS)
    }

    /// Checks that a source image of `width`x`height` is exactly 3x4 of these tiles.
    /// No scaling or cropping is ever attempted.
    pub fn check_source(self, width: u32, height: u32) -> Result<()> {
        let expected = self.sheet_size();
        if expected != UVec2::new(width, height) {
            return Err(Error::SourceSizeMismatch {
                expected: Size::new(expected.x, expected.y),
                actual: Size::new(width, height),
                tile: Size::new(self.width, self.height),
            });
        }

        Ok(())
    }
}

impl Default for TileDimensions {
    fn default() -> Self {
        Self {
            width: 32,
            height: 32,
        }
    }
}
