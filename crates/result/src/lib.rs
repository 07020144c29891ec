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

use std::io;

use camino::Utf8PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "Tile size {width}x{height} is not usable: RMXP autotiles need even tile dimensions of at least 2px (each tile is split into 2x2 subtiles)"
    )]
    InvalidTileSize { width: u32, height: u32 },
    #[error(
        "This does not look like an RPG Maker XP autotile.\n\
         Expected size: {expected} (3x4 tiles of {tile})\n\
         Got: {actual}"
    )]
    SourceSizeMismatch {
        expected: Size,
        actual: Size,
        tile: Size,
    },
    #[error("Could not read source image {path}: {source}")]
    SourceUnreadable {
        path: Utf8PathBuf,
        #[source]
        source: SourceError,
    },
    #[error("Failed to write {path}: {source}")]
    OutputWriteFailed {
        path: Utf8PathBuf,
        #[source]
        source: WriteError,
    },
    #[error("File {path} already exists (pass --force to overwrite it)")]
    OutputExists { path: Utf8PathBuf },
    #[error("Invalid color {0:?}: expected a hex color like #ff00ff")]
    InvalidColor(String),
    #[error("Preferences file {path} is unusable: {source}")]
    Preferences {
        path: Utf8PathBuf,
        #[source]
        source: PreferencesError,
    },
    #[error("Failed to install color-eyre hooks")]
    ColorEyreInstall(#[from] color_eyre::eyre::InstallError),
}

/// Why a source image could not be read.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("File does not exist")]
    NotExist,
    #[error("Image loader error: {0}")]
    Image(#[from] image::ImageError),
}

/// Why writing an output file failed.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("I/O Error: {0}")]
    Io(#[from] io::Error),
    #[error("Image encoder error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Temporary file error: {0}")]
    TempFilePersist(#[from] tempfile::PersistError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("RON error: {0}")]
    Ron(#[from] ron::Error),
}

#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("I/O Error: {0}")]
    Io(#[from] io::Error),
    #[error("RON error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

pub type Result<T> = core::result::Result<T, Error>;

/// A pixel size, displayed as `WxH`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl Error {
    /// Wraps any write failure with the path that was being written.
    pub fn write_failed(path: impl Into<Utf8PathBuf>, source: impl Into<WriteError>) -> Self {
        Self::OutputWriteFailed {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn source_unreadable(path: impl Into<Utf8PathBuf>, source: impl Into<SourceError>) -> Self {
        Self::SourceUnreadable {
            path: path.into(),
            source: source.into(),
        }
    }
}
