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

use autotile_config::{ExpandConfig, Preferences};
use autotile_result::Result;
use autotile_tileset::{TilesetDescriptor, TilesetFormat};
use camino::Utf8PathBuf;

use crate::cli::Args;

/// Files written by one expansion.
#[derive(Debug)]
pub struct Outcome {
    pub image: Utf8PathBuf,
    pub tileset: Option<(Utf8PathBuf, TilesetFormat)>,
}

/// Resolves `args` against the project's preferences and expands the source.
pub fn run(args: Args) -> Result<Outcome> {
    let preferences = args
        .project
        .as_deref()
        .map(Preferences::load_or_default)
        .unwrap_or_default();
    let config = ExpandConfig::resolve(args.source.clone(), args.overrides(), &preferences);
    tracing::debug!("Resolved {config:?}");

    if let Some(project) = args.project.as_deref() {
        let mut preferences = preferences;
        preferences.remember(&config);
        if let Err(e) = preferences.save(project) {
            tracing::warn!("Could not save preferences: {e}");
        }
    }

    expand(&config)
}

pub fn expand(config: &ExpandConfig) -> Result<Outcome> {
    let dimensions = config.tile_dimensions()?;
    let sheet = autotile_filesystem::load_source(&config.source, dimensions)?;

    // Refuse before doing any work if something would be clobbered.
    autotile_filesystem::ensure_writable(&config.output, config.overwrite)?;
    if let Some(tileset) = &config.tileset {
        autotile_filesystem::ensure_writable(tileset, config.overwrite)?;
    }

    let expanded = sheet.expand();
    autotile_filesystem::save_png(&config.output, expanded.image(), config.overwrite)?;

    let tileset = match &config.tileset {
        Some(path) => {
            let descriptor = TilesetDescriptor::new(
                config.name.clone(),
                &expanded,
                config.output.clone(),
                config.transparent_color,
            );
            let format = autotile_tileset::write(&descriptor, path, config.overwrite)?;
            Some((path.clone(), format))
        }
        None => None,
    };

    Ok(Outcome {
        image: config.output.clone(),
        tileset,
    })
}
