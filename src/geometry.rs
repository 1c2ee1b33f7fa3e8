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

//! Block grid coordinate mapping.
//!
//! Grid pair `(i, j)` with `i < horizontal` and `j < vertical` moves the
//! block at rows `i*bh..`, columns `j*bw..` to rows `j*bh..`, columns
//! `i*bw..`. With square blocks this is a transpose of the block grid,
//! otherwise the result is sheared.

use crate::settings::Settings;

/// Rectangle in pixel coordinates, `(row, col)` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub row: usize,
    pub col: usize,
    pub height: usize,
    pub width: usize,
}

impl Region {
    /// Extent `(rows, cols)` left after clipping to an image of the given size.
    pub fn clipped_extent(&self, height: usize, width: usize) -> (usize, usize) {
        let rows = height.saturating_sub(self.row).min(self.height);
        let cols = width.saturating_sub(self.col).min(self.width);
        (rows, cols)
    }
}

/// One block copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockMove {
    pub src: Region,
    pub dst: Region,
}

impl BlockMove {
    /// Shrink both regions to the part that exists on both sides, anchored at
    /// their top-left corners. `None` when nothing overlaps.
    pub fn clipped(&self, height: usize, width: usize) -> Option<BlockMove> {
        let (sr, sc) = self.src.clipped_extent(height, width);
        let (dr, dc) = self.dst.clipped_extent(height, width);
        let rows = sr.min(dr);
        let cols = sc.min(dc);
        if rows == 0 || cols == 0 {
            return None;
        }

        Some(BlockMove {
            src: Region {
                height: rows,
                width: cols,
                ..self.src
            },
            dst: Region {
                height: rows,
                width: cols,
                ..self.dst
            },
        })
    }
}

/// Every block copy of the grid, `i` outer and `j` inner.
pub fn block_moves(settings: &Settings) -> impl Iterator<Item = BlockMove> {
    let bh = settings.block_height();
    let bw = settings.block_width();
    let vc = settings.vertical();

    (0..settings.horizontal()).flat_map(move |i| {
        (0..vc).map(move |j| BlockMove {
            src: Region {
                row: i * bh,
                col: j * bw,
                height: bh,
                width: bw,
            },
            dst: Region {
                row: j * bh,
                col: i * bw,
                height: bh,
                width: bw,
            },
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(bh: usize, bw: usize, hc: usize, vc: usize) -> Settings {
        Settings::builder()
            .block_height(bh)
            .block_width(bw)
            .horizontal(hc)
            .vertical(vc)
            .bottom(0)
            .build()
            .unwrap()
    }

    #[test]
    fn moves_cover_grid() {
        let moves: Vec<_> = block_moves(&settings(2, 3, 2, 3)).collect();
        assert_eq!(moves.len(), 6);

        // (i = 1, j = 2)
        let m = moves[5];
        assert_eq!((m.src.row, m.src.col), (2, 6));
        assert_eq!((m.dst.row, m.dst.col), (4, 3));
        assert_eq!((m.dst.height, m.dst.width), (2, 3));
    }

    #[test]
    fn non_square_blocks_shear() {
        // (i = 1, j = 0) with 1x4 blocks
        let m = block_moves(&settings(1, 4, 2, 1)).nth(1).unwrap();
        assert_eq!((m.src.row, m.src.col), (1, 0));
        assert_eq!((m.dst.row, m.dst.col), (0, 4));
    }

    #[test]
    fn clipping_takes_shorter_range() {
        let m = BlockMove {
            src: Region {
                row: 0,
                col: 4,
                height: 3,
                width: 3,
            },
            dst: Region {
                row: 4,
                col: 0,
                height: 3,
                width: 3,
            },
        };
        // 6x6 image: src keeps 3 rows and 2 cols, dst keeps 2 rows and 3 cols.
        let c = m.clipped(6, 6).unwrap();
        assert_eq!((c.src.height, c.src.width), (2, 2));
        assert_eq!((c.dst.row, c.dst.col), (4, 0));
        assert_eq!(m.clipped(4, 6), None);
    }
}
