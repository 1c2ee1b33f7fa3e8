// Copyright (C) 2023 Dheatly23
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Lesser General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Lesser General Public License for more details.
//
// You should have received a copy of the GNU Lesser General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Decode, reshuffle, optionally join, then save.

use std::fs;
use std::path::{Path, PathBuf};

use ndarray::prelude::*;
use tracing::{info, warn};

use crate::codec;
use crate::error::{Error, Result};
use crate::join::join;
use crate::settings::Settings;
use crate::shuffle::reshuffle;

/// Prefix of every written file name.
pub const OUTPUT_PREFIX: &str = "reshuffled_";

/// An in-memory image paired with the name it is saved under.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedImage {
    pub name: String,
    pub image: Array3<u8>,
}

impl NamedImage {
    pub fn file_name(&self) -> String {
        format!("{OUTPUT_PREFIX}{}", self.name)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Name of a joined pair: stem of the first file, then the full second name.
pub fn joined_name(first: &Path, second: &Path) -> String {
    format!("{}_{}", file_stem(first), file_name(second))
}

#[derive(Debug, Clone)]
pub struct Pipeline {
    settings: Settings,
    join: bool,
}

impl Pipeline {
    pub fn new(settings: Settings, join: bool) -> Self {
        Self { settings, join }
    }

    fn reshuffle_named(&self, path: &Path, im: ArrayView3<'_, u8>) -> Result<NamedImage> {
        let image = reshuffle(im, &self.settings)?;
        info!(path = %path.display(), shape = ?image.dim(), "reshuffled");
        Ok(NamedImage {
            name: file_name(path),
            image,
        })
    }

    /// Join a reshuffled pair if requested, otherwise pass through.
    fn finish(&self, paths: &[&Path], out: Vec<NamedImage>) -> Result<Vec<NamedImage>> {
        if self.join {
            if let ([p1, p2], [a, b]) = (paths, &out[..]) {
                let name = joined_name(p1, p2);
                let image = join(a.image.view(), b.image.view())?;
                info!(%name, shape = ?image.dim(), "joined");
                return Ok(vec![NamedImage { name, image }]);
            }
            warn!(count = out.len(), "join needs exactly 2 images, saving separately");
        }

        Ok(out)
    }

    /// Reshuffle already decoded images.
    ///
    /// When joining is enabled and there are exactly two images, the result
    /// is a single joined image. Otherwise every image keeps its own name.
    pub fn process_images(&self, images: Vec<(PathBuf, Array3<u8>)>) -> Result<Vec<NamedImage>> {
        let mut out = Vec::with_capacity(images.len());
        for (path, im) in &images {
            out.push(self.reshuffle_named(path, im.view())?);
        }

        let paths: Vec<&Path> = images.iter().map(|(p, _)| p.as_path()).collect();
        self.finish(&paths, out)
    }

    /// Decode and reshuffle each file in turn, then join if requested.
    ///
    /// Only one decoded original is held at a time.
    pub fn process(&self, files: &[PathBuf]) -> Result<Vec<NamedImage>> {
        let mut out = Vec::with_capacity(files.len());
        for path in files {
            let im = codec::decode(path)?;
            out.push(self.reshuffle_named(path, im.view())?);
        }

        let paths: Vec<&Path> = files.iter().map(PathBuf::as_path).collect();
        self.finish(&paths, out)
    }

    /// Write every image as `reshuffled_<name>` under `dir`, creating it if needed.
    pub fn save(&self, images: &[NamedImage], dir: &Path) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(dir).map_err(|source| Error::Io {
            path: dir.to_owned(),
            source,
        })?;

        let mut written = Vec::with_capacity(images.len());
        for im in images {
            let path = dir.join(im.file_name());
            codec::encode(&path, im.image.view())?;
            info!(path = %path.display(), "saved");
            written.push(path);
        }
        Ok(written)
    }
}
