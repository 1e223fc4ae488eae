mod bounding;
pub mod cells;
mod iter;
pub mod mesh;
mod validate;

pub use cells::{CellArray, CellType};
pub use iter::CellIter;
pub use mesh::PolyData;
