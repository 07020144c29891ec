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

use crate::{SUBTILE_AMOUNT, SUBTILE_COLUMNS};

/// Pixel origin of subtile `index` within a source sheet whose subtiles are `subtile_size`.
///
/// Subtiles are numbered row-major across the 6x8 grid. Indices outside `0..48`
/// never come out of [`crate::CASES`], so they are treated as a bug.
pub fn subtile_origin(index: u32, subtile_size: UVec2) -> UVec2 {
    debug_assert!(
        index < SUBTILE_AMOUNT,
        "subtile index {index} is outside the 6x8 grid"
    );

    UVec2::new(index % SUBTILE_COLUMNS, index / SUBTILE_COLUMNS) * subtile_size
}
