//! Library to reshuffle the blocks of an image grid.
//!
//! The main entry point is [reshuffle]. It takes an image array shaped
//! `(height, width, channels)` and moves every block of a
//! `horizontal x vertical` grid such that:
//!
//! * Block `(i, j)` at rows `i*bh..`, columns `j*bw..` lands at
//!   rows `j*bh..`, columns `i*bw..`.
//! * The bottom margin rows are kept as-is, unless a block covers them.
//! * Everything else is left blank.
//!
//! With square blocks and grid this is a block transpose and applying it
//! twice gives back the original image.
//!
//! [join] places two processed images side by side, and [Pipeline] ties
//! file resolution, decoding, reshuffling and saving together.

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
//

pub mod codec;
mod error;
pub mod files;
pub mod geometry;
mod join;
pub mod pipeline;
mod settings;
mod shuffle;

pub use crate::error::{Error, Result};
#[doc(inline)]
pub use crate::files::{resolve_files, resolve_folder, FileSet};
#[doc(inline)]
pub use crate::join::join;
#[doc(inline)]
pub use crate::pipeline::{NamedImage, Pipeline};
pub use crate::settings::{EdgePolicy, Settings, SettingsBuilder};
#[doc(inline)]
pub use crate::shuffle::reshuffle;
