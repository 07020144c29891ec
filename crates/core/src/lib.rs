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

//! The pixel-exact core of Autotile Expander.
//!
//! An RPG Maker XP ground autotile is a sheet of 3x4 tiles. Every tile splits
//! into 2x2 subtiles, giving a 6x8 grid of subtiles. The 48 tiles of the
//! expanded tileset are each assembled from four of those subtiles, as listed
//! in [`cases::CASES`].

pub mod cases;
pub mod color;
pub mod compositor;
pub mod dimensions;
pub mod locator;
pub mod sheet;

pub use cases::{Quadrant, CASES};
pub use color::TransparentColor;
pub use compositor::expand;
pub use dimensions::TileDimensions;
pub use locator::subtile_origin;
pub use sheet::{ExpandedSheet, SourceSheet};

pub use autotile_result::{Error, Result};

pub const MIN_TILE_SIZE: u32 = 2; // Tiles must split into 2x2 subtiles with integer sizes

pub const SHEET_COLUMNS: u32 = 3; // Autotile sheets are 3 tiles across
pub const SHEET_ROWS: u32 = 4; // and 4 tiles down

pub const SUBTILE_COLUMNS: u32 = SHEET_COLUMNS * 2; // 6 subtiles across
pub const SUBTILE_ROWS: u32 = SHEET_ROWS * 2; // 8 subtiles down
pub const SUBTILE_AMOUNT: u32 = SUBTILE_COLUMNS * SUBTILE_ROWS; // subtile indices are 0..48

pub const AUTOTILE_ID_AMOUNT: u32 = 48; // there are 48 tile ids per autotile
pub const EXPANDED_COLUMNS: u32 = 8; // expanded tilesets are 8 tiles across
pub const EXPANDED_ROWS: u32 = AUTOTILE_ID_AMOUNT / EXPANDED_COLUMNS; // split up the 48 tiles across each row
