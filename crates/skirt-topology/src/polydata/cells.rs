use serde::{Deserialize, Serialize};
use skirt_core::error::SkirtError;

use super::iter::CellIter;

/// Cell types carried by a [`PolyData`](super::PolyData).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellType {
    Vertex,
    /// Independent vertices sharing one cell.
    PolyVertex,
    Line,
    /// Connected line segments.
    PolyLine,
    Polygon,
    /// Triangles sharing edges, with alternating winding.
    TriangleStrip,
}

impl CellType {
    /// Smallest valid number of point ids.
    pub fn min_points(self) -> usize {
        match self {
            CellType::Vertex | CellType::PolyVertex => 1,
            CellType::Line | CellType::PolyLine => 2,
            CellType::Polygon | CellType::TriangleStrip => 3,
        }
    }
}

/// Variable-length cells stored as a flat connectivity list plus offsets.
///
/// Cell `i` spans `connectivity[offsets[i]..offsets[i + 1]]`. `offsets` is
/// never empty, starts at 0, never decreases and ends at `connectivity.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCellArray")]
pub struct CellArray {
    offsets: Vec<u32>,
    connectivity: Vec<u32>,
}

impl CellArray {
    pub fn new() -> Self {
        Self {
            offsets: vec![0],
            connectivity: Vec::new(),
        }
    }

    pub fn with_capacity(cells: usize, connectivity: usize) -> Self {
        let mut offsets = Vec::with_capacity(cells + 1);
        offsets.push(0);
        Self {
            offsets,
            connectivity: Vec::with_capacity(connectivity),
        }
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total number of point ids over all cells.
    pub fn connectivity_len(&self) -> usize {
        self.connectivity.len()
    }

    /// Append a cell, returning its index.
    pub fn push(&mut self, ids: &[u32]) -> usize {
        self.push_iter(ids.iter().copied())
    }

    /// Append a cell from an iterator of point ids, returning its index.
    pub fn push_iter<I: IntoIterator<Item = u32>>(&mut self, ids: I) -> usize {
        self.connectivity.extend(ids);
        self.offsets.push(self.connectivity.len() as u32);
        self.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&[u32]> {
        let start = *self.offsets.get(index)? as usize;
        let end = *self.offsets.get(index + 1)? as usize;
        Some(&self.connectivity[start..end])
    }

    pub fn iter(&self) -> CellIter<'_> {
        CellIter::new(self)
    }

    /// Append every cell of `other`.
    pub fn extend_from(&mut self, other: &CellArray) {
        for cell in other {
            self.push(cell);
        }
    }
}

/// Unchecked serde form of [`CellArray`].
#[derive(Deserialize)]
struct RawCellArray {
    offsets: Vec<u32>,
    connectivity: Vec<u32>,
}

impl TryFrom<RawCellArray> for CellArray {
    type Error = SkirtError;

    fn try_from(raw: RawCellArray) -> Result<Self, SkirtError> {
        let RawCellArray { offsets, connectivity } = raw;
        if offsets.first() != Some(&0) {
            return Err(SkirtError::Topology("cell offsets must start at 0".into()));
        }
        if offsets.windows(2).any(|w| w[1] < w[0]) {
            return Err(SkirtError::Topology("cell offsets must not decrease".into()));
        }
        let end = offsets.last().copied().unwrap_or_default() as usize;
        if end != connectivity.len() {
            return Err(SkirtError::Topology(format!(
                "cell offsets end at {} but connectivity holds {} ids",
                end,
                connectivity.len()
            )));
        }
        Ok(Self { offsets, connectivity })
    }
}

impl Default for CellArray {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a CellArray {
    type Item = &'a [u32];
    type IntoIter = CellIter<'a>;

    fn into_iter(self) -> CellIter<'a> {
        self.iter()
    }
}
