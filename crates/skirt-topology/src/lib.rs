//! Polygonal datasets and the edge topology used by sweep filters.

pub mod classify;
pub mod polydata;

pub use classify::{classify, DirectedEdge, EdgeKey, EdgeRecord, EdgeTable, TopologySummary};
pub use polydata::{CellArray, CellIter, CellType, PolyData};
