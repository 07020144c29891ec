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

use color_eyre::eyre::WrapErr;

use crate::{app, cli};
use autotile_result::Result;

mod log;

const FILTERS: &[&str] = &[
    "_",
    "core::",
    "alloc::",
    "rayon::",
    "rayon_core::",
    "std::rt::",
    "std::sys_",
    "E as eyre::",
    "T as core::",
    "std::panic::",
    "std::panicking::",
    "std::thread::local::",
];

fn setup_hooks() -> Result<()> {
    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default()
        .panic_section(format!(
            "Autotile Expander version: {}",
            env!("CARGO_PKG_VERSION")
        ))
        .display_env_section(false)
        .add_frame_filter(Box::new(|frames| {
            frames.retain(|frame| {
                !FILTERS.iter().any(|f| {
                    frame.name.as_ref().is_some_and(|name| {
                        name.starts_with(|c: char| c.is_ascii_uppercase())
                            || name.strip_prefix('<').unwrap_or(name).starts_with(f)
                    })
                })
            })
        }))
        .into_hooks();
    eyre_hook.install()?;
    panic_hook.install();

    Ok(())
}

pub fn run(args: cli::Args) -> color_eyre::Result<()> {
    /* Set up hooks for formatting errors and panics */
    setup_hooks()?;

    /* Log to stderr, RUST_LOG overrides the level picked on the command line */
    log::initialize_log(args.log_level());

    let source = args.source.clone();
    let outcome = app::run(args).wrap_err_with(|| format!("Could not expand autotile {source}"))?;

    match &outcome.tileset {
        Some((path, format)) => tracing::info!(
            "Expanded {source} into {} and {format} {path}",
            outcome.image
        ),
        None => tracing::info!("Expanded {source} into {}", outcome.image),
    }

    Ok(())
}
