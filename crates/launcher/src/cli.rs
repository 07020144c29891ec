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

use autotile_config::Overrides;
use autotile_core::TransparentColor;
use camino::Utf8PathBuf;
use clap::{ArgAction, Parser};
use tracing_subscriber::filter::LevelFilter;

/// Expand an RPG Maker XP ground autotile (3x4 tiles) into a 48-tile tileset for Tiled.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// The autotile sheet to expand.
    pub source: Utf8PathBuf,

    /// Name of the tileset [default: file name of SOURCE]
    #[arg(long)]
    pub name: Option<String>,

    /// Tile width in pixels, must be even [default: 32]
    #[arg(long, value_name = "PX")]
    pub tile_width: Option<u32>,

    /// Tile height in pixels, must be even [default: 32]
    #[arg(long, value_name = "PX")]
    pub tile_height: Option<u32>,

    /// Color the tileset treats as transparent, e.g. #ff00ff
    #[arg(long, value_name = "HEX", value_parser = parse_color)]
    pub transparent_color: Option<TransparentColor>,

    /// Don't use a transparent color, even if the project remembers one
    #[arg(long, conflicts_with = "transparent_color")]
    pub no_transparent_color: bool,

    /// Where to write the expanded PNG [default: SOURCE_expanded.png]
    #[arg(long, short, value_name = "PNG")]
    pub output: Option<Utf8PathBuf>,

    /// Where to write the tileset; .tsj/.json gives JSON, anything else TSX [default: SOURCE.tsx]
    #[arg(long, short, value_name = "FILE")]
    pub tileset: Option<Utf8PathBuf>,

    /// Only write the expanded image
    #[arg(long, conflicts_with = "tileset")]
    pub no_tileset: bool,

    /// Overwrite existing files
    #[arg(long, short)]
    pub force: bool,

    /// Project directory to remember tile size and transparent color in
    #[arg(long, value_name = "DIR")]
    pub project: Option<Utf8PathBuf>,

    /// Log more (repeat for even more)
    #[arg(long, short, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(long, short)]
    pub quiet: bool,
}

fn parse_color(s: &str) -> Result<TransparentColor, String> {
    s.parse().map_err(|e: autotile_result::Error| e.to_string())
}

impl Args {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            name: self.name.clone(),
            tile_width: self.tile_width,
            tile_height: self.tile_height,
            transparent_color: self.transparent_color,
            no_transparent_color: self.no_transparent_color,
            output: self.output.clone(),
            tileset: self.tileset.clone(),
            no_tileset: self.no_tileset,
            overwrite: self.force,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        match (self.quiet, self.verbose) {
            (true, _) => LevelFilter::WARN,
            (false, 0) => LevelFilter::INFO,
            (false, 1) => LevelFilter::DEBUG,
            (false, _) => LevelFilter::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8Path;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn minimal_invocation() {
        let args = Args::try_parse_from(["autotile-expander", "Grass.png"]).unwrap();

        assert_eq!(args.source, "Grass.png");
        assert_eq!(args.overrides(), Overrides::default());
        assert_eq!(args.log_level(), LevelFilter::INFO);
    }

    #[test]
    fn every_option() {
        let args = Args::try_parse_from([
            "autotile-expander",
            "Grass.png",
            "--name",
            "Meadow",
            "--tile-width",
            "16",
            "--tile-height",
            "24",
            "--transparent-color",
            "#ff00ff",
            "-o",
            "out/meadow.png",
            "-t",
            "out/meadow.tsj",
            "--force",
            "--project",
            "game",
            "-vv",
        ])
        .unwrap();
        let overrides = args.overrides();

        assert_eq!(overrides.name.as_deref(), Some("Meadow"));
        assert_eq!((overrides.tile_width, overrides.tile_height), (Some(16), Some(24)));
        assert_eq!(
            overrides.transparent_color,
            Some(TransparentColor::new(255, 0, 255))
        );
        assert_eq!(overrides.output.as_deref(), Some(Utf8Path::new("out/meadow.png")));
        assert_eq!(overrides.tileset.as_deref(), Some(Utf8Path::new("out/meadow.tsj")));
        assert!(overrides.overwrite);
        assert_eq!(args.project.as_deref(), Some(Utf8Path::new("game")));
        assert_eq!(args.log_level(), LevelFilter::TRACE);
    }

    #[test]
    fn bad_color_is_a_usage_error() {
        let error = Args::try_parse_from([
            "autotile-expander",
            "Grass.png",
            "--transparent-color",
            "pink",
        ])
        .unwrap_err();

        assert_eq!(error.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn contradicting_flags_are_rejected() {
        assert!(Args::try_parse_from([
            "autotile-expander",
            "Grass.png",
            "--no-tileset",
            "--tileset",
            "a.tsx",
        ])
        .is_err());
        assert!(Args::try_parse_from(["autotile-expander", "Grass.png", "-q", "-v"]).is_err());
    }

    #[test]
    fn quiet_wins() {
        let args = Args::try_parse_from(["autotile-expander", "Grass.png", "-q"]).unwrap();

        assert_eq!(args.log_level(), LevelFilter::WARN);
    }
}
