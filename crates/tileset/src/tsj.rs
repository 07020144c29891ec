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
use serde::Serialize;

use crate::{TilesetDescriptor, TILED_FORMAT_VERSION, TILED_VERSION};

/// Tiled's JSON tileset layout. Field names are Tiled's.
#[derive(Serialize, Debug)]
struct Tileset<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    version: &'static str,
    tiledversion: &'static str,
    name: &'a str,
    tilewidth: u32,
    tileheight: u32,
    tilecount: u32,
    columns: u32,
    margin: u32,
    spacing: u32,
    image: String,
    imagewidth: u32,
    imageheight: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    transparentcolor: Option<String>,
}

/// Renders a `.tsj` tileset.
pub fn render(descriptor: &TilesetDescriptor, dir: &Utf8Path) -> serde_json::Result<String> {
    let tileset = Tileset {
        kind: "tileset",
        version: TILED_FORMAT_VERSION,
        tiledversion: TILED_VERSION,
        name: &descriptor.name,
        tilewidth: descriptor.tile_width,
        tileheight: descriptor.tile_height,
        tilecount: descriptor.tile_count,
        columns: descriptor.columns,
        margin: 0,
        spacing: 0,
        image: descriptor.image_source(dir).into_string(),
        imagewidth: descriptor.image_width,
        imageheight: descriptor.image_height,
        transparentcolor: descriptor.transparent_color.map(|color| color.to_string()),
    };

    let mut json = serde_json::to_string_pretty(&tileset)?;
    json.push('\n');
    Ok(json)
}
