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

pub mod project;
pub use project::Preferences;

use autotile_core::{TileDimensions, TransparentColor};
use autotile_result::Result;
use camino::{Utf8Path, Utf8PathBuf};

pub const DEFAULT_TILE_SIZE: u32 = 32;

/// Everything a single expansion needs, resolved once up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandConfig {
    pub source: Utf8PathBuf,
    /// Name of the generated tileset.
    pub name: String,
    pub tile_width: u32,
    pub tile_height: u32,
    pub transparent_color: Option<TransparentColor>,
    /// Where the expanded image is written.
    pub output: Utf8PathBuf,
    /// Where the tileset file is written, if one should be written at all.
    pub tileset: Option<Utf8PathBuf>,
    /// Replace existing files instead of refusing to run.
    pub overwrite: bool,
}

/// Values given explicitly by the user. Anything left as `None` falls back to
/// the saved preferences, then to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub name: Option<String>,
    pub tile_width: Option<u32>,
    pub tile_height: Option<u32>,
    pub transparent_color: Option<TransparentColor>,
    pub no_transparent_color: bool,
    pub output: Option<Utf8PathBuf>,
    pub tileset: Option<Utf8PathBuf>,
    pub no_tileset: bool,
    pub overwrite: bool,
}

impl ExpandConfig {
    pub fn resolve(source: Utf8PathBuf, overrides: Overrides, preferences: &Preferences) -> Self {
        let stored = |n: u32| (n > 0).then_some(n);
        let tile_width = overrides
            .tile_width
            .or(stored(preferences.tile_width))
            .unwrap_or(DEFAULT_TILE_SIZE);
        let tile_height = overrides
            .tile_height
            .or(stored(preferences.tile_height))
            .unwrap_or(DEFAULT_TILE_SIZE);

        let transparent_color = if overrides.no_transparent_color {
            None
        } else {
            overrides.transparent_color.or_else(|| {
                preferences
                    .use_transparent_color
                    .then_some(preferences.transparent_color)
                    .flatten()
            })
        };

        let name = overrides
            .name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| source_stem(&source).to_string());
        let output = overrides
            .output
            .unwrap_or_else(|| default_output_path(&source));
        let tileset = if overrides.no_tileset {
            None
        } else {
            Some(
                overrides
                    .tileset
                    .unwrap_or_else(|| default_tileset_path(&source)),
            )
        };

        Self {
            source,
            name,
            tile_width,
            tile_height,
            transparent_color,
            output,
            tileset,
            overwrite: overrides.overwrite,
        }
    }

    pub fn tile_dimensions(&self) -> Result<TileDimensions> {
        TileDimensions::new(self.tile_width, self.tile_height)
    }
}

fn source_stem(source: &Utf8Path) -> &str {
    source.file_stem().unwrap_or("autotile")
}

fn source_dir(source: &Utf8Path) -> &Utf8Path {
    source.parent().unwrap_or(Utf8Path::new(""))
}

/// `<dir>/<stem>_expanded.png` next to the source.
pub fn default_output_path(source: &Utf8Path) -> Utf8PathBuf {
    source_dir(source).join(format!("{}_expanded.png", source_stem(source)))
}

/// `<dir>/<stem>.tsx` next to the source.
pub fn default_tileset_path(source: &Utf8Path) -> Utf8PathBuf {
    source_dir(source).join(format!("{}.tsx", source_stem(source)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_preferences() {
        let config = ExpandConfig::resolve(
            "Graphics/Autotiles/Grass.png".into(),
            Overrides::default(),
            &Preferences::default(),
        );

        assert_eq!(config.name, "Grass");
        assert_eq!((config.tile_width, config.tile_height), (32, 32));
        assert_eq!(config.transparent_color, None);
        assert_eq!(config.output, "Graphics/Autotiles/Grass_expanded.png");
        assert_eq!(
            config.tileset.as_deref(),
            Some(Utf8Path::new("Graphics/Autotiles/Grass.tsx"))
        );
        assert!(!config.overwrite);
    }

    #[test]
    fn bare_file_names_stay_relative() {
        let source = Utf8Path::new("water.png");

        assert_eq!(default_output_path(source), "water_expanded.png");
        assert_eq!(default_tileset_path(source), "water.tsx");
    }

    #[test]
    fn preferences_fill_in_missing_values() {
        let preferences = Preferences {
            tile_width: 16,
            tile_height: 0,
            use_transparent_color: true,
            transparent_color: Some(TransparentColor::new(255, 0, 255)),
        };
        let config = ExpandConfig::resolve(
            "grass.png".into(),
            Overrides {
                tile_height: Some(24),
                ..Default::default()
            },
            &preferences,
        );

        assert_eq!((config.tile_width, config.tile_height), (16, 24));
        assert_eq!(
            config.transparent_color,
            Some(TransparentColor::new(255, 0, 255))
        );
    }

    #[test]
    fn explicit_values_win_over_preferences() {
        let preferences = Preferences {
            tile_width: 16,
            tile_height: 16,
            use_transparent_color: true,
            transparent_color: Some(TransparentColor::new(255, 0, 255)),
        };

        let config = ExpandConfig::resolve(
            "grass.png".into(),
            Overrides {
                name: Some("Meadow".to_string()),
                tile_width: Some(48),
                no_transparent_color: true,
                no_tileset: true,
                output: Some("out/meadow.png".into()),
                overwrite: true,
                ..Default::default()
            },
            &preferences,
        );

        assert_eq!(config.name, "Meadow");
        assert_eq!((config.tile_width, config.tile_height), (48, 16));
        assert_eq!(config.transparent_color, None);
        assert_eq!(config.output, "out/meadow.png");
        assert_eq!(config.tileset, None);
        assert!(config.overwrite);
    }

    #[test]
    fn unused_stored_color_is_ignored() {
        let preferences = Preferences {
            use_transparent_color: false,
            transparent_color: Some(TransparentColor::new(0, 0, 0)),
            ..Default::default()
        };
        let config =
            ExpandConfig::resolve("grass.png".into(), Overrides::default(), &preferences);

        assert_eq!(config.transparent_color, None);
    }

    #[test]
    fn empty_name_falls_back_to_file_stem() {
        let config = ExpandConfig::resolve(
            "dirt.png".into(),
            Overrides {
                name: Some(String::new()),
                ..Default::default()
            },
            &Preferences::default(),
        );

        assert_eq!(config.name, "dirt");
    }

    #[test]
    fn odd_tile_size_is_caught_on_validation() {
        let config = ExpandConfig::resolve(
            "dirt.png".into(),
            Overrides {
                tile_width: Some(31),
                ..Default::default()
            },
            &Preferences::default(),
        );

        assert!(config.tile_dimensions().is_err());
    }
}
