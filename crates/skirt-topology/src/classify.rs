//! Edge topology of a polygonal dataset: free edges of 2D cells, line
//! segments, and isolated vertices.

use std::collections::HashMap;

use log::{debug, trace};

use crate::polydata::{CellType, PolyData};

/// An edge with the direction it is traversed by its owning cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DirectedEdge {
    pub from: u32,
    pub to: u32,
}

impl DirectedEdge {
    pub fn new(from: u32, to: u32) -> Self {
        Self { from, to }
    }

    pub fn reversed(self) -> Self {
        Self::new(self.to, self.from)
    }

    pub fn key(self) -> EdgeKey {
        EdgeKey::new(self.from, self.to)
    }
}

/// Unordered point pair packed as `(min << 32) | max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey(u64);

impl EdgeKey {
    pub fn new(a: u32, b: u32) -> Self {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        Self((u64::from(lo) << 32) | u64::from(hi))
    }

    /// The two point ids, smaller first.
    pub fn vertices(self) -> (u32, u32) {
        ((self.0 >> 32) as u32, self.0 as u32)
    }
}

/// Usage of one edge by 2D cells, with the first cell that used it.
///
/// `cell_type`, `cell_id` and `local_edge` let callers map a free edge back to
/// the input cell it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRecord {
    pub key: EdgeKey,
    pub count: u32,
    /// Direction in the representative cell.
    pub edge: DirectedEdge,
    pub cell_type: CellType,
    /// Index of the representative cell within its cell array.
    pub cell_id: usize,
    /// Position of the edge within the representative cell's edge list.
    pub local_edge: usize,
}

impl EdgeRecord {
    /// Used by exactly one 2D cell.
    pub fn is_free(&self) -> bool {
        self.count == 1
    }
}

/// Edge use counts over the polygons and triangle strips of a dataset.
///
/// Iteration follows first insertion, so results built from it are
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct EdgeTable {
    index: HashMap<EdgeKey, usize>,
    records: Vec<EdgeRecord>,
}

impl EdgeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(input: &PolyData) -> Self {
        let mut table = Self::new();
        for (cell_id, cell) in input.polys.iter().enumerate() {
            for (local, edge) in polygon_edges(cell).enumerate() {
                table.insert(edge, CellType::Polygon, cell_id, local);
            }
        }
        for (cell_id, cell) in input.strips.iter().enumerate() {
            for (local, edge) in strip_boundary_edges(cell).enumerate() {
                table.insert(edge, CellType::TriangleStrip, cell_id, local);
            }
        }
        table
    }

    /// Count one use of `edge`. The first use becomes the representative.
    pub fn insert(&mut self, edge: DirectedEdge, cell_type: CellType, cell_id: usize, local_edge: usize) {
        let key = edge.key();
        match self.index.get(&key) {
            Some(&slot) => self.records[slot].count += 1,
            None => {
                self.index.insert(key, self.records.len());
                self.records.push(EdgeRecord {
                    key,
                    count: 1,
                    edge,
                    cell_type,
                    cell_id,
                    local_edge,
                });
            }
        }
    }

    pub fn get(&self, a: u32, b: u32) -> Option<&EdgeRecord> {
        self.index.get(&EdgeKey::new(a, b)).map(|&slot| &self.records[slot])
    }

    /// Number of distinct edges.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EdgeRecord> {
        self.records.iter()
    }

    pub fn free_edges(&self) -> impl Iterator<Item = &EdgeRecord> {
        self.records.iter().filter(|r| r.is_free())
    }
}

/// Edges of a polygon in winding order: `(p_i, p_{i+1})`, closing back to `p_0`.
pub fn polygon_edges(pts: &[u32]) -> impl Iterator<Item = DirectedEdge> + '_ {
    let n = pts.len();
    (0..n).map(move |i| DirectedEdge::new(pts[i], pts[(i + 1) % n]))
}

/// Outer edges of a triangle strip, each directed as in its own triangle.
///
/// Triangle `j` is `(p_j, p_{j+1}, p_{j+2})` for even `j` and
/// `(p_{j+1}, p_j, p_{j+2})` for odd `j`. The outer edges are `(p_0, p_1)`,
/// every `(p_j, p_{j+2})`, and `(p_{n-2}, p_{n-1})`; the diagonals between
/// consecutive triangles are interior and not returned.
pub fn strip_boundary_edges(pts: &[u32]) -> impl Iterator<Item = DirectedEdge> + '_ {
    let n = pts.len();
    let triangles = n.saturating_sub(2);
    let first = (triangles > 0).then(|| DirectedEdge::new(pts[0], pts[1]));
    let sides = (0..triangles).map(move |j| {
        if j % 2 == 0 {
            DirectedEdge::new(pts[j + 2], pts[j])
        } else {
            DirectedEdge::new(pts[j], pts[j + 2])
        }
    });
    let last = (triangles > 0).then(|| {
        if (triangles - 1) % 2 == 0 {
            DirectedEdge::new(pts[n - 2], pts[n - 1])
        } else {
            DirectedEdge::new(pts[n - 1], pts[n - 2])
        }
    });
    first.into_iter().chain(sides).chain(last)
}

/// The features of a dataset that generate swept geometry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopologySummary {
    /// Free edges of polygons and strips, in edge table order.
    pub free_edges: Vec<DirectedEdge>,
    /// Every segment of every line and polyline, in cell order.
    pub line_segments: Vec<DirectedEdge>,
    /// Every point listed by a vertex or polyvertex cell.
    pub vertices: Vec<u32>,
}

impl TopologySummary {
    pub fn is_empty(&self) -> bool {
        self.free_edges.is_empty() && self.line_segments.is_empty() && self.vertices.is_empty()
    }
}

/// Classify the edges and vertices of `input`.
///
/// Edges shared by more than one 2D cell are not free and are left out.
pub fn classify(input: &PolyData) -> TopologySummary {
    let table = EdgeTable::build(input);
    for record in table.free_edges() {
        trace!(
            "Free edge {:?} from {:?} {} edge {}",
            record.edge,
            record.cell_type,
            record.cell_id,
            record.local_edge
        );
    }
    let mut summary = TopologySummary {
        free_edges: table.free_edges().map(|r| r.edge).collect(),
        ..TopologySummary::default()
    };

    for (cell_type, cell) in input.cells() {
        match cell_type {
            CellType::Vertex | CellType::PolyVertex => summary.vertices.extend_from_slice(cell),
            CellType::Line | CellType::PolyLine => summary
                .line_segments
                .extend(cell.windows(2).map(|w| DirectedEdge::new(w[0], w[1]))),
            CellType::Polygon | CellType::TriangleStrip => {}
        }
    }

    debug!(
        "Classified {} edge(s): {} free, {} line segment(s), {} vertex point(s)",
        table.len(),
        summary.free_edges.len(),
        summary.line_segments.len(),
        summary.vertices.len()
    );

    summary
}
