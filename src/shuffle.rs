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

use ndarray::prelude::*;
use ndarray::Slice;
use tracing::debug;

use crate::error::{Error, Result};
use crate::geometry::{block_moves, Region};
use crate::settings::{EdgePolicy, Settings};

fn region<'a, A>(arr: ArrayView3<'a, A>, r: &Region) -> ArrayView3<'a, A> {
    arr.slice_move(s![r.row..r.row + r.height, r.col..r.col + r.width, ..])
}

/// Block reshuffle algorithm.
///
/// Produces a new array of the same shape as `arr`:
/// * Starts out filled with `A::default()`.
/// * The bottom `settings.bottom()` rows are copied from `arr` verbatim.
/// * Every block of the grid is then copied to its mapped position
///   (see [`crate::geometry`]), overwriting margin rows it overlaps.
///
/// Parameters:
/// * `arr` : Input array view, shaped `(height, width, channels)`.
/// * `settings` : Block grid settings.
///
/// Fails if the bottom margin is taller than the image, or, under
/// [`EdgePolicy::Strict`], if the grid does not fit inside the image.
pub fn reshuffle<A>(arr: ArrayView3<'_, A>, settings: &Settings) -> Result<Array3<A>>
where
    A: Clone + Default,
{
    let (height, width, _) = arr.dim();

    let bottom = settings.bottom();
    if bottom > height {
        return Err(Error::BottomMarginTooLarge { bottom, height });
    }

    if settings.edge_policy() == EdgePolicy::Strict {
        let (needed_height, needed_width) = settings.grid_extent();
        if needed_height > height || needed_width > width {
            return Err(Error::GridOutOfBounds {
                needed_height,
                needed_width,
                height,
                width,
            });
        }
    }

    let mut out = Array3::from_elem(arr.raw_dim(), A::default());

    if bottom > 0 {
        let rows = Slice::from(height - bottom..);
        out.slice_axis_mut(Axis(0), rows)
            .assign(&arr.slice_axis(Axis(0), rows));
    }

    for m in block_moves(settings) {
        let Some(c) = m.clipped(height, width) else {
            debug!(?m, "block outside image, skipped");
            continue;
        };
        if c != m {
            debug!(?m, rows = c.src.height, cols = c.src.width, "block truncated");
        }

        let src = region(arr.view(), &c.src);
        let d = &c.dst;
        out.slice_mut(s![d.row..d.row + d.height, d.col..d.col + d.width, ..])
            .assign(&src);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(bh: usize, bw: usize, hc: usize, vc: usize, bp: usize) -> Settings {
        Settings::builder()
            .block_height(bh)
            .block_width(bw)
            .horizontal(hc)
            .vertical(vc)
            .bottom(bp)
            .build()
            .unwrap()
    }

    fn ramp(h: usize, w: usize, c: usize) -> Array3<u8> {
        Array3::from_shape_fn((h, w, c), |(r, col, ch)| (r * 10 + col + ch + 1) as u8)
    }

    #[test]
    fn shape_preserved() {
        let im = ramp(7, 9, 3);
        let out = reshuffle(im.view(), &settings(2, 3, 3, 2, 1)).unwrap();
        assert_eq!(out.shape(), im.shape());
    }

    #[test]
    fn blocks_transposed() {
        // Source block (i, j) holds marker i*10+j.
        let im = Array3::from_shape_fn((4, 4, 1), |(r, c, _)| ((r / 2) * 10 + c / 2) as u8);
        let out = reshuffle(im.view(), &settings(2, 2, 2, 2, 0)).unwrap();

        for ((r, c, _), v) in out.indexed_iter() {
            let (i, j) = (c / 2, r / 2);
            assert_eq!(*v as usize, i * 10 + j, "pixel ({r}, {c})");
        }
    }

    #[test]
    fn non_square_blocks_follow_mapping() {
        // 1x2 blocks, 2x2 grid on a 2x4 image.
        let im = ramp(2, 4, 1);
        let out = reshuffle(im.view(), &settings(1, 2, 2, 2, 0)).unwrap();

        // (i = 1, j = 0): src row 1 cols 0..2 -> dst row 0 cols 2..4
        assert_eq!(out[[0, 2, 0]], im[[1, 0, 0]]);
        assert_eq!(out[[0, 3, 0]], im[[1, 1, 0]]);
        // (i = 0, j = 1): src row 0 cols 2..4 -> dst row 1 cols 0..2
        assert_eq!(out[[1, 0, 0]], im[[0, 2, 0]]);
    }

    #[test]
    fn wide_grid_moves_columns_to_rows() {
        // 1x1 blocks, 3 horizontal by 1 vertical: source (i, 0) lands at (0, i).
        let s = settings(1, 1, 3, 1, 0);
        let im = Array3::from_shape_fn((3, 3, 1), |(r, c, _)| (r * 3 + c + 1) as u8);
        let out = reshuffle(im.view(), &s).unwrap();

        assert_eq!(out.slice(s![0, .., 0]), im.slice(s![.., 0, 0]));
        assert!(out.slice(s![1.., .., ..]).iter().all(|&v| v == 0));
    }

    #[test]
    fn oversized_blocks_rejected_by_settings() {
        for policy in [EdgePolicy::Strict, EdgePolicy::Truncate] {
            let s = Settings::builder()
                .block_height(usize::MAX / 2 + 1)
                .block_width(1)
                .horizontal(3)
                .vertical(1)
                .bottom(0)
                .edge_policy(policy)
                .build();
            assert!(matches!(s, Err(Error::InvalidSettings(_))));
        }
    }

    #[test]
    fn input_untouched() {
        let im = ramp(4, 4, 2);
        let copy = im.clone();
        let _ = reshuffle(im.view(), &settings(2, 2, 2, 2, 1)).unwrap();
        assert_eq!(im, copy);
    }

    #[test]
    fn bottom_margin_copied() {
        let im = ramp(6, 4, 1);
        let out = reshuffle(im.view(), &settings(2, 2, 2, 2, 2)).unwrap();
        assert_eq!(out.slice(s![4.., .., ..]), im.slice(s![4.., .., ..]));
    }

    #[test]
    fn blocks_win_over_margin() {
        let im = ramp(6, 4, 1);
        let out = reshuffle(im.view(), &settings(2, 2, 2, 2, 3)).unwrap();

        // Row 3 is both margin and inside dst block (i = 0, j = 1).
        assert_eq!(out[[3, 0, 0]], im[[1, 2, 0]]);
        assert_ne!(out[[3, 0, 0]], im[[3, 0, 0]]);
        assert_eq!(out.slice(s![4.., .., ..]), im.slice(s![4.., .., ..]));
    }

    #[test]
    fn zero_margin_leaves_outside_blank() {
        let im = ramp(5, 4, 1);
        let out = reshuffle(im.view(), &settings(2, 2, 2, 2, 0)).unwrap();
        assert!(out.slice(s![4.., .., ..]).iter().all(|&v| v == 0));
    }

    #[test]
    fn square_grid_self_inverse() {
        let s = settings(2, 2, 3, 3, 0);
        let im = ramp(6, 6, 3);
        let once = reshuffle(im.view(), &s).unwrap();
        assert_ne!(once, im);
        let twice = reshuffle(once.view(), &s).unwrap();
        assert_eq!(twice, im);
    }

    #[test]
    fn margin_too_tall() {
        let im = ramp(4, 4, 1);
        let err = reshuffle(im.view(), &settings(2, 2, 2, 2, 5)).unwrap_err();
        assert!(matches!(
            err,
            Error::BottomMarginTooLarge {
                bottom: 5,
                height: 4
            }
        ));
    }

    #[test]
    fn strict_rejects_oversized_grid() {
        let im = ramp(3, 3, 1);
        let err = reshuffle(im.view(), &settings(2, 2, 2, 2, 0)).unwrap_err();
        assert!(matches!(
            err,
            Error::GridOutOfBounds {
                needed_height: 4,
                needed_width: 4,
                ..
            }
        ));
    }

    #[test]
    fn truncate_copies_overlap() {
        let s = Settings::builder()
            .block_height(2)
            .block_width(2)
            .horizontal(2)
            .vertical(2)
            .bottom(0)
            .edge_policy(EdgePolicy::Truncate)
            .build()
            .unwrap();
        let im = ramp(3, 3, 1);
        let out = reshuffle(im.view(), &s).unwrap();

        assert_eq!(out.slice(s![..2, ..2, ..]), im.slice(s![..2, ..2, ..]));
        assert_eq!(out[[2, 0, 0]], im[[0, 2, 0]]);
        assert_eq!(out[[0, 2, 0]], im[[2, 0, 0]]);
        assert_eq!(out[[2, 2, 0]], im[[2, 2, 0]]);
        assert_eq!(out[[1, 2, 0]], 0);
        assert_eq!(out[[2, 1, 0]], 0);
    }
}
