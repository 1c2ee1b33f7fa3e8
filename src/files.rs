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

//! Turns a file list or a folder into the set of images to process.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// Extensions accepted as images. Matching is case-sensitive.
pub const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Resolved input files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSet {
    /// Existing files with an allowed extension, in resolution order.
    pub files: Vec<PathBuf>,
    /// Entries rejected for not being a file or not having an image extension.
    pub skipped: Vec<PathBuf>,
}

pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map_or(false, |e| IMAGE_EXTENSIONS.contains(&e))
}

/// Keep the paths that are existing image files, preserving order.
///
/// Fails with [`Error::NoImages`] if none qualify.
pub fn resolve_files<I, P>(paths: I) -> Result<FileSet>
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    let mut set = FileSet::default();
    for p in paths {
        let p = p.into();
        if p.is_file() && is_image_path(&p) {
            set.files.push(p);
        } else {
            debug!(path = %p.display(), "skipped");
            set.skipped.push(p);
        }
    }

    if set.files.is_empty() {
        return Err(Error::NoImages);
    }
    Ok(set)
}

/// Resolve every entry of `dir`, sorted by path.
pub fn resolve_folder(dir: &Path) -> Result<FileSet> {
    if !dir.is_dir() {
        return Err(Error::MissingDirectory(dir.to_owned()));
    }

    let io_err = |source| Error::Io {
        path: dir.to_owned(),
        source,
    };
    let mut entries = fs::read_dir(dir)
        .map_err(io_err)?
        .map(|e| e.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(io_err)?;
    entries.sort();

    resolve_files(entries)
}
