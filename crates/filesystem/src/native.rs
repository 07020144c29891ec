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

use std::{
    fs::File,
    io::{BufWriter, ErrorKind, Write},
};

use autotile_result::{Error, Result, WriteError};
use camino::Utf8Path;
use image::{ImageFormat, RgbaImage};

/// Fails with [`Error::OutputExists`] if `path` exists and may not be replaced.
pub fn ensure_writable(path: &Utf8Path, overwrite: bool) -> Result<()> {
    if !overwrite && path.exists() {
        return Err(Error::OutputExists {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Writes `path` through a temporary file in the same directory, so `path` is
/// either fully written or left untouched.
pub fn write_atomic(
    path: &Utf8Path,
    overwrite: bool,
    write: impl FnOnce(&mut BufWriter<&mut File>) -> std::result::Result<(), WriteError>,
) -> Result<()> {
    ensure_writable(path, overwrite)?;

    let dir = match path.parent() {
        Some(dir) if !dir.as_str().is_empty() => dir,
        _ => Utf8Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(|e| Error::write_failed(path, e))?;

    let mut file = tempfile::NamedTempFile::new_in(dir).map_err(|e| Error::write_failed(path, e))?;
    {
        let mut writer = BufWriter::new(file.as_file_mut());
        write(&mut writer).map_err(|e| Error::write_failed(path, e))?;
        writer.flush().map_err(|e| Error::write_failed(path, e))?;
    }

    // temporary files are only readable by their owner
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(|e| Error::write_failed(path, e))?;
    }

    let persisted = if overwrite {
        file.persist(path)
    } else {
        file.persist_noclobber(path)
    };
    match persisted {
        Ok(_) => Ok(()),
        Err(e) if !overwrite && e.error.kind() == ErrorKind::AlreadyExists => {
            Err(Error::OutputExists {
                path: path.to_path_buf(),
            })
        }
        Err(e) => Err(Error::write_failed(path, e)),
    }
}

/// Saves `image` as a PNG, whatever the extension of `path` is.
pub fn save_png(path: &Utf8Path, image: &RgbaImage, overwrite: bool) -> Result<()> {
    write_atomic(path, overwrite, |writer| {
        image.write_to(writer, ImageFormat::Png)?;
        Ok(())
    })?;
    tracing::info!("Wrote {}x{} image {path}", image.width(), image.height());

    Ok(())
}
