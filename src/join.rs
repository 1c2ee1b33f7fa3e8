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

use ndarray::prelude::*;
use ndarray::concatenate;

use crate::error::{Error, Result};

/// Place `right` next to `left`.
///
/// Both arrays must share height and channel count; nothing is padded or
/// cropped. The result has width `left.width + right.width`.
pub fn join<'a, A: Clone>(left: ArrayView3<'a, A>, right: ArrayView3<'a, A>) -> Result<Array3<A>> {
    let (lh, _, lc) = left.dim();
    let (rh, _, rc) = right.dim();
    if lh != rh {
        return Err(Error::DimensionMismatch {
            left: lh,
            right: rh,
        });
    }
    if lc != rc {
        return Err(Error::ChannelMismatch {
            left: lc,
            right: rc,
        });
    }

    concatenate(Axis(1), &[left, right]).map_err(|_| Error::DimensionMismatch {
        left: lh,
        right: rh,
    })
}
