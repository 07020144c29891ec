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

//! Describes an expanded autotile as a Tiled tileset.

pub mod tsj;
pub mod tsx;

use std::io::Write;

use autotile_core::{ExpandedSheet, TransparentColor, EXPANDED_COLUMNS};
use autotile_result::Result;
use camino::{Utf8Path, Utf8PathBuf};

/// Tiled format version written into tileset files.
pub const TILED_FORMAT_VERSION: &str = "1.10";
/// Oldest Tiled release able to read what we write.
pub const TILED_VERSION: &str = "1.10.2";

/// Everything a tileset file records about an expanded autotile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilesetDescriptor {
    pub name: String,
    pub tile_width: u32,
    pub tile_height: u32,
    pub tile_count: u32,
    pub columns: u32,
    /// Path of the expanded image, as written to disk.
    pub image: Utf8PathBuf,
    pub image_width: u32,
    pub image_height: u32,
    pub transparent_color: Option<TransparentColor>,
}

impl TilesetDescriptor {
    pub fn new(
        name: impl Into<String>,
        expanded: &ExpandedSheet,
        image: impl Into<Utf8PathBuf>,
        transparent_color: Option<TransparentColor>,
    ) -> Self {
        let dimensions = expanded.dimensions();
        Self {
            name: name.into(),
            tile_width: dimensions.width(),
            tile_height: dimensions.height(),
            tile_count: expanded.tile_count(),
            columns: EXPANDED_COLUMNS,
            image: image.into(),
            image_width: expanded.image().width(),
            image_height: expanded.image().height(),
            transparent_color,
        }
    }

    /// The image path as a tileset stored in `dir` refers to it.
    pub fn image_source(&self, dir: &Utf8Path) -> Utf8PathBuf {
        autotile_filesystem::relative_path(&self.image, dir)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[derive(strum::EnumIter, strum::Display)]
pub enum TilesetFormat {
    #[strum(to_string = "Tiled Tileset (TSX)")]
    Tsx,
    #[strum(to_string = "JSON Tileset (TSJ)")]
    Tsj,
}

impl TilesetFormat {
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Tsx => &["tsx", "xml"],
            Self::Tsj => &["tsj", "json"],
        }
    }

    /// The format a file name asks for, if it asks for a known one.
    pub fn for_file(path: &Utf8Path) -> Option<Self> {
        use strum::IntoEnumIterator;

        let extension = path.extension()?.to_ascii_lowercase();
        Self::iter().find(|format| format.extensions().contains(&extension.as_str()))
    }

    /// Renders `descriptor` for a tileset file stored in `dir`.
    pub fn render(
        self,
        descriptor: &TilesetDescriptor,
        dir: &Utf8Path,
    ) -> serde_json::Result<String> {
        match self {
            Self::Tsx => Ok(tsx::render(descriptor, dir)),
            Self::Tsj => tsj::render(descriptor, dir),
        }
    }
}

/// Writes `descriptor` to `path`, picking the format from its extension.
/// Unknown extensions get TSX.
pub fn write(descriptor: &TilesetDescriptor, path: &Utf8Path, overwrite: bool) -> Result<TilesetFormat> {
    let format = TilesetFormat::for_file(path).unwrap_or_else(|| {
        tracing::warn!(
            "Could not find valid Tileset format for {}, saving in TSX format.",
            path.file_name().unwrap_or(path.as_str())
        );
        TilesetFormat::Tsx
    });

    let dir = path.parent().unwrap_or(Utf8Path::new(""));
    let text = format
        .render(descriptor, dir)
        .map_err(|e| autotile_result::Error::write_failed(path, e))?;
    autotile_filesystem::write_atomic(path, overwrite, |writer| {
        writer.write_all(text.as_bytes())?;
        Ok(())
    })?;
    tracing::info!("Wrote {format} {path}");

    Ok(format)
}
