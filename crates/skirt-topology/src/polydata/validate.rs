use skirt_core::error::{Result, SkirtError};
use skirt_core::traits::Validate;

use super::cells::{CellArray, CellType};
use super::mesh::PolyData;

impl Validate for PolyData {
    fn validate(&self) -> Result<()> {
        let n = self.points.len();
        check_array("vertex", &self.verts, CellType::Vertex.min_points(), n)?;
        check_array("line", &self.lines, CellType::Line.min_points(), n)?;
        check_array("polygon", &self.polys, CellType::Polygon.min_points(), n)?;
        check_array("triangle strip", &self.strips, CellType::TriangleStrip.min_points(), n)?;
        Ok(())
    }
}

fn check_array(kind: &str, cells: &CellArray, min_points: usize, point_count: usize) -> Result<()> {
    for (cell_id, cell) in cells.iter().enumerate() {
        if cell.len() < min_points {
            return Err(SkirtError::Topology(format!(
                "{} cell {} has {} point(s), needs at least {}",
                kind,
                cell_id,
                cell.len(),
                min_points
            )));
        }
        if let Some(&id) = cell.iter().find(|&&id| id as usize >= point_count) {
            return Err(SkirtError::NotFound(format!(
                "{} cell {} references point {} (point count {})",
                kind, cell_id, id, point_count
            )));
        }
    }
    Ok(())
}
