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

//! Conversion between image files and `(height, width, channels)` arrays.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::io::Reader as ImageReader;
use image::{save_buffer, ColorType, DynamicImage};
use ndarray::prelude::*;

use crate::error::{Error, Result};

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> Error + '_ {
    move |source| Error::Io {
        path: path.to_owned(),
        source,
    }
}

fn image_err(path: &Path) -> impl FnOnce(image::ImageError) -> Error + '_ {
    move |source| Error::Image {
        path: path.to_owned(),
        source,
    }
}

/// Convert a decoded image to an 8-bit array.
///
/// Wider sample types are narrowed; grey, grey+alpha, RGB and RGBA map to
/// 1, 2, 3 and 4 channels.
pub fn to_array(im: DynamicImage) -> Array3<u8> {
    let (w, h) = (im.width() as usize, im.height() as usize);
    let color = im.color();

    let (channels, raw) = match (color.has_color(), color.has_alpha()) {
        (false, false) => (1, im.into_luma8().into_raw()),
        (false, true) => (2, im.into_luma_alpha8().into_raw()),
        (true, false) => (3, im.into_rgb8().into_raw()),
        (true, true) => (4, im.into_rgba8().into_raw()),
    };

    Array3::from_shape_vec((h, w, channels), raw).unwrap_or_else(|_| {
        unreachable!("buffer of {w}x{h} image has {channels} bytes per pixel")
    })
}

/// Open and decode an image file.
pub fn decode(path: &Path) -> Result<Array3<u8>> {
    let im = ImageReader::new(BufReader::new(File::open(path).map_err(io_err(path))?))
        .with_guessed_format()
        .map_err(io_err(path))?
        .decode()
        .map_err(image_err(path))?;

    Ok(to_array(im))
}

/// Encode an array to `path`. Format follows the file extension.
pub fn encode(path: &Path, arr: ArrayView3<'_, u8>) -> Result<()> {
    let (h, w, channels) = arr.dim();
    let color = match channels {
        1 => ColorType::L8,
        2 => ColorType::La8,
        3 => ColorType::Rgb8,
        4 => ColorType::Rgba8,
        _ => return Err(Error::UnsupportedChannels(channels)),
    };

    let bytes = arr.as_standard_layout().into_owned().into_raw_vec();

    save_buffer(path, &bytes, w as u32, h as u32, color).map_err(image_err(path))
}
