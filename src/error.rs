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

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the reshuffle library.
#[derive(Debug, Error)]
pub enum Error {
    /// A settings field is outside its allowed range.
    #[error("invalid settings: {0}")]
    InvalidSettings(&'static str),

    /// Bottom margin is taller than the image.
    #[error("bottom margin of {bottom} rows exceeds image height {height}")]
    BottomMarginTooLarge { bottom: usize, height: usize },

    /// Block grid extends past the image (strict edge policy only).
    #[error(
        "block grid needs {needed_height}x{needed_width} pixels (height x width) \
         but image is {height}x{width}"
    )]
    GridOutOfBounds {
        needed_height: usize,
        needed_width: usize,
        height: usize,
        width: usize,
    },

    /// Images to be joined have different heights.
    #[error("cannot join images of height {left} and {right}")]
    DimensionMismatch { left: usize, right: usize },

    /// Images to be joined have different channel counts.
    #[error("cannot join images with {left} and {right} channels")]
    ChannelMismatch { left: usize, right: usize },

    /// Array channel count has no 8-bit colour type.
    #[error("cannot encode image with {0} channels")]
    UnsupportedChannels(usize),

    #[error("not a directory or directory doesn't exist: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("no images found (allowed extensions: png, jpg, jpeg)")]
    NoImages,

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("image codec error on {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
