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

use crate::error::{Error, Result};

/// How block copies behave when the grid reaches past the image edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgePolicy {
    /// Reject images smaller than the block grid.
    #[default]
    Strict,
    /// Clip every block copy to the overlap of its source and destination
    /// inside the image. Out of range blocks are silently shortened or dropped.
    Truncate,
}

/// Block grid settings.
///
/// Immutable once built. Use [`Settings::builder`] to construct one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    block_height: usize,
    block_width: usize,
    horizontal: usize,
    vertical: usize,
    bottom: usize,
    edge_policy: EdgePolicy,
}

impl Settings {
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::new()
    }

    /// Block height in pixels.
    pub fn block_height(&self) -> usize {
        self.block_height
    }

    /// Block width in pixels.
    pub fn block_width(&self) -> usize {
        self.block_width
    }

    /// Horizontal block count.
    pub fn horizontal(&self) -> usize {
        self.horizontal
    }

    /// Vertical block count.
    pub fn vertical(&self) -> usize {
        self.vertical
    }

    /// Number of bottom rows copied verbatim.
    pub fn bottom(&self) -> usize {
        self.bottom
    }

    pub fn edge_policy(&self) -> EdgePolicy {
        self.edge_policy
    }

    /// Smallest `(height, width)` that holds every source and destination block.
    ///
    /// Source rows run up to `horizontal * block_height` while destination rows
    /// run up to `vertical * block_height`, and the other way around for
    /// columns, so both axes need the larger block count.
    pub fn grid_extent(&self) -> (usize, usize) {
        let n = self.horizontal.max(self.vertical);
        (n * self.block_height, n * self.block_width)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            block_height: 280,
            block_width: 200,
            horizontal: 4,
            vertical: 4,
            bottom: 17,
            edge_policy: EdgePolicy::Strict,
        }
    }
}

/// Builder for [`Settings`].
#[derive(Debug, Clone)]
pub struct SettingsBuilder {
    inner: Settings,
}

impl Default for SettingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsBuilder {
    pub fn new() -> Self {
        Self {
            inner: Settings::default(),
        }
    }

    pub fn block_height(mut self, v: usize) -> Self {
        self.inner.block_height = v;
        self
    }

    pub fn block_width(mut self, v: usize) -> Self {
        self.inner.block_width = v;
        self
    }

    pub fn horizontal(mut self, v: usize) -> Self {
        self.inner.horizontal = v;
        self
    }

    pub fn vertical(mut self, v: usize) -> Self {
        self.inner.vertical = v;
        self
    }

    pub fn bottom(mut self, v: usize) -> Self {
        self.inner.bottom = v;
        self
    }

    pub fn edge_policy(mut self, v: EdgePolicy) -> Self {
        self.inner.edge_policy = v;
        self
    }

    pub fn build(self) -> Result<Settings> {
        let s = self.inner;
        if s.block_height == 0 || s.block_width == 0 {
            return Err(Error::InvalidSettings("block size must be at least 1"));
        }
        if s.horizontal == 0 || s.vertical == 0 {
            return Err(Error::InvalidSettings("block count must be at least 1"));
        }

        let n = s.horizontal.max(s.vertical);
        if n.checked_mul(s.block_height).is_none() || n.checked_mul(s.block_width).is_none() {
            return Err(Error::InvalidSettings("block grid size overflows"));
        }
        Ok(s)
    }
}
