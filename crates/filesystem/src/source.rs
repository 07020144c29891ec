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

use autotile_core::{SourceSheet, TileDimensions};
use autotile_result::{Error, Result, SourceError};
use camino::Utf8Path;

/// Loads an autotile sheet from `path`.
///
/// The size is checked from the image header before any pixels are decoded,
/// so a wrong file fails fast even if it is huge.
pub fn load_source(path: &Utf8Path, dimensions: TileDimensions) -> Result<SourceSheet> {
    if !path.is_file() {
        return Err(Error::source_unreadable(path, SourceError::NotExist));
    }

    let (width, height) =
        image::image_dimensions(path).map_err(|e| Error::source_unreadable(path, e))?;
    dimensions.check_source(width, height)?;

    let image = image::open(path)
        .map_err(|e| Error::source_unreadable(path, e))?
        .into_rgba8();
    tracing::debug!("Loaded {width}x{height} autotile sheet {path}");

    SourceSheet::new(image, dimensions)
}
