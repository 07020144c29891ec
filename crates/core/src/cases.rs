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

use crate::AUTOTILE_ID_AMOUNT;

/// Hardcoded list of subtiles for each of the 48 tiles of an expanded autotile,
/// in `[top left, top right, bottom left, bottom right]` order.
/// There seems to be very little pattern in autotile IDs so this is sadly
/// the best we can do.
///
/// The last two entries are identical. Maps refer to tiles by their position
/// in the expanded tileset, so the duplicate stays.
pub const CASES: [[u32; 4]; AUTOTILE_ID_AMOUNT as usize] = [
    [26, 27, 32, 33],
    [4, 27, 32, 33],
    [26, 5, 32, 33],
    [4, 5, 32, 33],
    [26, 27, 32, 11],
    [4, 27, 32, 11],
    [26, 5, 32, 11],
    [4, 5, 32, 11],
    [26, 27, 10, 33],
    [4, 27, 10, 33],
    [26, 5, 10, 33],
    [4, 5, 10, 33],
    [26, 27, 10, 11],
    [4, 27, 10, 11],
    [26, 5, 10, 11],
    [4, 5, 10, 11],
    [24, 25, 30, 31],
    [24, 5, 30, 31],
    [24, 25, 30, 11],
    [24, 5, 30, 11],
    [14, 15, 20, 21],
    [14, 15, 20, 11],
    [14, 15, 10, 21],
    [14, 15, 10, 11],
    [28, 29, 34, 35],
    [28, 29, 10, 35],
    [4, 29, 34, 35],
    [4, 29, 10, 35],
    [26, 27, 44, 45],
    [4, 39, 44, 45],
    [38, 5, 44, 45],
    [4, 5, 44, 45],
    [24, 29, 30, 35],
    [14, 15, 44, 45],
    [12, 13, 18, 19],
    [12, 13, 18, 11],
    [16, 17, 22, 23],
    [16, 17, 10, 23],
    [40, 41, 46, 47],
    [4, 41, 46, 47],
    [36, 37, 42, 43],
    [36, 5, 42, 43],
    [12, 17, 18, 23],
    [12, 13, 42, 43],
    [36, 41, 42, 47],
    [16, 17, 46, 47],
    [12, 17, 42, 47],
    [12, 17, 42, 47],
];

/// One corner of a tile. The discriminant is the position inside a [`CASES`] entry.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[derive(strum::Display)]
pub enum Quadrant {
    #[strum(to_string = "top left")]
    TopLeft = 0,
    #[strum(to_string = "top right")]
    TopRight = 1,
    #[strum(to_string = "bottom left")]
    BottomLeft = 2,
    #[strum(to_string = "bottom right")]
    BottomRight = 3,
}

impl Quadrant {
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Offset of this quadrant from the origin of its tile.
    pub fn offset(self, subtile_size: UVec2) -> UVec2 {
        let index = self as u32;
        UVec2::new(index % 2, index / 2) * subtile_size
    }

    /// The subtile this quadrant takes from `case`.
    pub fn subtile(self, case: &[u32; 4]) -> u32 {
        case[self as usize]
    }
}
