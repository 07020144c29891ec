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

use image::RgbaImage;

use crate::{compositor, Result, TileDimensions, AUTOTILE_ID_AMOUNT};

/// A decoded autotile sheet that is known to match its tile size.
#[derive(Debug, Clone)]
pub struct SourceSheet {
    image: RgbaImage,
    dimensions: TileDimensions,
}

impl SourceSheet {
    pub fn new(image: RgbaImage, dimensions: TileDimensions) -> Result<Self> {
        dimensions.check_source(image.width(), image.height())?;
        Ok(Self { image, dimensions })
    }

    pub fn dimensions(&self) -> TileDimensions {
        self.dimensions
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn expand(&self) -> ExpandedSheet {
        ExpandedSheet {
            image: compositor::composite(&self.image, self.dimensions),
            dimensions: self.dimensions,
        }
    }
}

/// The 8x6 tile result of [`SourceSheet::expand`].
#[derive(Debug, Clone)]
pub struct ExpandedSheet {
    image: RgbaImage,
    dimensions: TileDimensions,
}

impl ExpandedSheet {
    pub fn dimensions(&self) -> TileDimensions {
        self.dimensions
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn tile_count(&self) -> u32 {
        AUTOTILE_ID_AMOUNT
    }
}
