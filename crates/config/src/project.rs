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

use std::io::Write;

use autotile_core::TransparentColor;
use autotile_result::{Error, PreferencesError, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::ExpandConfig;

/// Where preferences live, relative to the project directory.
pub const PREFERENCES_PATH: &str = ".autotile/preferences.ron";

/// Choices remembered between runs within one project.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Preferences {
    /// 0 means "not set".
    pub tile_width: u32,
    /// 0 means "not set".
    pub tile_height: u32,
    pub use_transparent_color: bool,
    pub transparent_color: Option<TransparentColor>,
}

impl Preferences {
    pub fn path(project: &Utf8Path) -> Utf8PathBuf {
        project.join(PREFERENCES_PATH)
    }

    /// Loads the preferences of `project`. A project without a preferences file has the defaults.
    pub fn load(project: &Utf8Path) -> Result<Self> {
        let path = Self::path(project);
        let wrap = |source: PreferencesError| Error::Preferences {
            path: path.clone(),
            source,
        };

        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(wrap(e.into())),
        };
        ron::from_str(&text).map_err(|e| wrap(e.into()))
    }

    /// Like [`Preferences::load`], but a broken file only gets a warning.
    pub fn load_or_default(project: &Utf8Path) -> Self {
        Self::load(project).unwrap_or_else(|e| {
            tracing::warn!("Ignoring saved preferences: {e}");
            Self::default()
        })
    }

    pub fn save(&self, project: &Utf8Path) -> Result<()> {
        let path = Self::path(project);
        let text = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::new())
            .map_err(|e| Error::write_failed(&path, e))?;

        autotile_filesystem::write_atomic(&path, true, |writer| {
            writer.write_all(text.as_bytes())?;
            Ok(())
        })?;
        tracing::debug!("Saved preferences to {path}");

        Ok(())
    }

    /// Remembers the values `config` ended up using.
    pub fn remember(&mut self, config: &ExpandConfig) {
        self.tile_width = config.tile_width;
        self.tile_height = config.tile_height;
        self.use_transparent_color = config.transparent_color.is_some();
        if let Some(color) = config.transparent_color {
            self.transparent_color = Some(color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Overrides;

    fn project_dir() -> (tempfile::TempDir, Utf8PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        (dir, path)
    }

    #[test]
    fn missing_file_gives_defaults() {
        let (_dir, project) = project_dir();

        assert_eq!(Preferences::load(&project).unwrap(), Preferences::default());
    }

    #[test]
    fn save_then_load() {
        let (_dir, project) = project_dir();
        let preferences = Preferences {
            tile_width: 16,
            tile_height: 24,
            use_transparent_color: true,
            transparent_color: Some(TransparentColor::new(0, 128, 255)),
        };

        preferences.save(&project).unwrap();

        assert!(project.join(".autotile").is_dir());
        assert_eq!(Preferences::load(&project).unwrap(), preferences);
        let text = std::fs::read_to_string(Preferences::path(&project)).unwrap();
        assert!(text.contains("\"#0080ff\""), "{text}");
    }

    #[test]
    fn partial_files_use_defaults_for_the_rest() {
        let (_dir, project) = project_dir();
        std::fs::create_dir_all(project.join(".autotile")).unwrap();
        std::fs::write(Preferences::path(&project), "(tile_width: 48)").unwrap();

        let preferences = Preferences::load(&project).unwrap();
        assert_eq!(preferences.tile_width, 48);
        assert_eq!(preferences.tile_height, 0);
        assert!(!preferences.use_transparent_color);
    }

    #[test]
    fn corrupt_file_is_reported_and_can_be_ignored() {
        let (_dir, project) = project_dir();
        std::fs::create_dir_all(project.join(".autotile")).unwrap();
        std::fs::write(Preferences::path(&project), "(tile_width: \"wide\")").unwrap();

        assert!(matches!(
            Preferences::load(&project),
            Err(Error::Preferences {
                source: PreferencesError::Ron(_),
                ..
            })
        ));
        assert_eq!(Preferences::load_or_default(&project), Preferences::default());
    }

    #[test]
    fn remember_keeps_the_last_color() {
        let mut preferences = Preferences {
            transparent_color: Some(TransparentColor::new(1, 2, 3)),
            use_transparent_color: true,
            ..Default::default()
        };
        let config = ExpandConfig::resolve(
            "grass.png".into(),
            Overrides {
                tile_width: Some(16),
                tile_height: Some(16),
                no_transparent_color: true,
                ..Default::default()
            },
            &preferences,
        );

        preferences.remember(&config);

        assert_eq!((preferences.tile_width, preferences.tile_height), (16, 16));
        assert!(!preferences.use_transparent_color);
        assert_eq!(
            preferences.transparent_color,
            Some(TransparentColor::new(1, 2, 3))
        );
    }
}
