//! Main Program for Gridshuffle
//! Run with `--help` for more instruction

// Copyright (C) 2023 Dheatly23
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::path::PathBuf;

use anyhow::{Context, Error};
use clap::{value_parser, ArgGroup, Parser};
use gridshuffle::{resolve_files, resolve_folder, EdgePolicy, Pipeline, Settings};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Reshuffle blocks in images")]
#[command(group(ArgGroup::new("input").required(true).args(["files", "folder"])))]
struct Args {
    /// Files (paths) to shuffle
    #[arg(short = 'f', long, num_args = 1..)]
    files: Vec<PathBuf>,

    /// Folder (path) to shuffle
    #[arg(long, visible_alias = "fd")]
    folder: Option<PathBuf>,

    /// Horizontally join 2 images (must be the same height)
    #[arg(short = 'j', long)]
    join: bool,

    /// Number of horizontal blocks
    #[arg(long, visible_alias = "hor", default_value_t = 4, value_parser = value_parser!(u32).range(1..=5))]
    horizontal: u32,

    /// Number of vertical blocks
    #[arg(short = 'v', long, default_value_t = 4, value_parser = value_parser!(u32).range(1..=5))]
    vertical: u32,

    /// Block height
    #[arg(long, visible_alias = "he", default_value_t = 280, value_parser = value_parser!(u32).range(100..=400))]
    height: u32,

    /// Block width
    #[arg(short = 'w', long, default_value_t = 200, value_parser = value_parser!(u32).range(100..=400))]
    width: u32,

    /// Number of pixels from the bottom to keep in place
    #[arg(short = 'b', long, default_value_t = 17, value_parser = value_parser!(u32).range(0..=50))]
    bottom: u32,

    /// Save location path
    #[arg(long, visible_alias = "sl", default_value = "res")]
    save_location: PathBuf,

    /// Clip blocks reaching past the image edge instead of failing
    #[arg(long)]
    legacy_truncate: bool,
}

fn main() -> Result<(), Error> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::builder()
        .block_height(args.height as _)
        .block_width(args.width as _)
        .horizontal(args.horizontal as _)
        .vertical(args.vertical as _)
        .bottom(args.bottom as _)
        .edge_policy(if args.legacy_truncate {
            EdgePolicy::Truncate
        } else {
            EdgePolicy::Strict
        })
        .build()?;
    debug!(?settings);

    let set = match &args.folder {
        Some(dir) => resolve_folder(dir),
        None => resolve_files(&args.files),
    }
    .context("Cannot resolve input images")?;
    if !set.skipped.is_empty() {
        debug!(skipped = ?set.skipped, "non-image entries ignored");
    }

    let pipeline = Pipeline::new(settings, args.join);
    let images = pipeline.process(&set.files)?;
    let written = pipeline
        .save(&images, &args.save_location)
        .with_context(|| format!("Cannot save to {}", args.save_location.display()))?;

    info!(count = written.len(), "done");
    Ok(())
}
