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

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use itertools::Itertools;

/// `path` as seen from the directory `base`, with `/` separators.
///
/// This is purely lexical. If the two paths share no root (one is absolute and
/// the other is not, or they are on different drives) `path` is returned unchanged.
pub fn relative_path(path: &Utf8Path, base: &Utf8Path) -> Utf8PathBuf {
    fn normal(p: &Utf8Path) -> Vec<Utf8Component<'_>> {
        p.components()
            .filter(|c| !matches!(c, Utf8Component::CurDir))
            .collect_vec()
    }

    let path_components = normal(path);
    let base_components = normal(base);

    let rooted = |components: &[Utf8Component<'_>]| {
        components
            .first()
            .is_some_and(|c| matches!(c, Utf8Component::Prefix(_) | Utf8Component::RootDir))
    };
    if rooted(&path_components) != rooted(&base_components)
        || (rooted(&path_components) && path_components.first() != base_components.first())
    {
        return path.to_path_buf();
    }

    let common = path_components
        .iter()
        .zip(&base_components)
        .take_while(|(a, b)| a == b)
        .count();

    // can't climb out of a ".." we don't know the name of
    if base_components[common..]
        .iter()
        .any(|c| matches!(c, Utf8Component::ParentDir))
    {
        return path.to_path_buf();
    }

    let relative = std::iter::repeat("..")
        .take(base_components.len() - common)
        .chain(path_components[common..].iter().map(|c| c.as_str()))
        .join("/");

    if relative.is_empty() {
        Utf8PathBuf::from(".")
    } else {
        Utf8PathBuf::from(relative)
    }
}
