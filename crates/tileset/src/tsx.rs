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

use camino::Utf8Path;

use crate::{TilesetDescriptor, TILED_FORMAT_VERSION, TILED_VERSION};

/// Renders a `.tsx` tileset.
pub fn render(descriptor: &TilesetDescriptor, dir: &Utf8Path) -> String {
    let trans = descriptor
        .transparent_color
        .map(|color| format!(" trans=\"{}\"", color.to_hex()))
        .unwrap_or_default();

    [
        r#"<?xml version="1.0" encoding="UTF-8"?>"#.to_string(),
        format!(
            r#"<tileset version="{}" tiledversion="{}" name="{}" tilewidth="{}" tileheight="{}" tilecount="{}" columns="{}">"#,
            TILED_FORMAT_VERSION,
            TILED_VERSION,
            escape(&descriptor.name),
            descriptor.tile_width,
            descriptor.tile_height,
            descriptor.tile_count,
            descriptor.columns,
        ),
        format!(
            r#" <image source="{}"{trans} width="{}" height="{}"/>"#,
            escape(descriptor.image_source(dir).as_str()),
            descriptor.image_width,
            descriptor.image_height,
        ),
        "</tileset>\n".to_string(),
    ]
    .join("\n")
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}
