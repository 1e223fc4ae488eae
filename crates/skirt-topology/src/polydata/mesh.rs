use skirt_math::Point3;
use serde::{Deserialize, Serialize};

use super::cells::{CellArray, CellType};

/// Polygonal dataset: points plus vertex, line, polygon and strip cells.
///
/// Cell point ids index into `points`. The cell type follows from the array a
/// cell lives in and, for `verts` and `lines`, from its length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolyData {
    pub points: Vec<Point3>,
    pub verts: CellArray,
    pub lines: CellArray,
    pub polys: CellArray,
    pub strips: CellArray,
}

impl PolyData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_points(points: Vec<Point3>) -> Self {
        Self {
            points,
            ..Self::default()
        }
    }

    pub fn add_point(&mut self, position: Point3) -> u32 {
        self.points.push(position);
        (self.points.len() - 1) as u32
    }

    pub fn insert_vertex(&mut self, ids: &[u32]) -> usize {
        self.verts.push(ids)
    }

    pub fn insert_line(&mut self, ids: &[u32]) -> usize {
        self.lines.push(ids)
    }

    pub fn insert_polygon(&mut self, ids: &[u32]) -> usize {
        self.polys.push(ids)
    }

    pub fn insert_strip(&mut self, ids: &[u32]) -> usize {
        self.strips.push(ids)
    }

    pub fn number_of_points(&self) -> usize {
        self.points.len()
    }

    pub fn number_of_cells(&self) -> usize {
        self.verts.len() + self.lines.len() + self.polys.len() + self.strips.len()
    }

    /// True when there is nothing to process: no points or no cells.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() || self.number_of_cells() == 0
    }

    /// All cells with their types, in `verts`, `lines`, `polys`, `strips` order.
    pub fn cells(&self) -> impl Iterator<Item = (CellType, &[u32])> + '_ {
        let verts = self.verts.iter().map(|c| {
            let ty = if c.len() == 1 { CellType::Vertex } else { CellType::PolyVertex };
            (ty, c)
        });
        let lines = self.lines.iter().map(|c| {
            let ty = if c.len() == 2 { CellType::Line } else { CellType::PolyLine };
            (ty, c)
        });
        let polys = self.polys.iter().map(|c| (CellType::Polygon, c));
        let strips = self.strips.iter().map(|c| (CellType::TriangleStrip, c));
        verts.chain(lines).chain(polys).chain(strips)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skirt_math::DVec3;

    #[test]
    fn test_build_and_count() {
        let mut pd = PolyData::new();
        assert!(pd.is_empty());
        let a = pd.add_point(DVec3::new(1.0, 0.0, 0.0));
        let b = pd.add_point(DVec3::new(1.0, 0.0, 1.0));
        assert_eq!((a, b), (0, 1));
        assert!(pd.is_empty(), "points without cells are empty input");

        pd.insert_line(&[a, b]);
        pd.insert_vertex(&[a]);
        assert!(!pd.is_empty());
        assert_eq!(pd.number_of_points(), 2);
        assert_eq!(pd.number_of_cells(), 2);
    }

    #[test]
    fn test_load_rejects_malformed_cell_arrays() {
        let mut pd = PolyData::with_points(vec![DVec3::ZERO, DVec3::X]);
        pd.insert_line(&[0, 1]);
        let mut json = serde_json::to_value(&pd).unwrap();
        let loaded: PolyData = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(loaded, pd);

        json["lines"]["offsets"] = serde_json::json!([0, 5]);
        assert!(serde_json::from_value::<PolyData>(json.clone()).is_err());
        json["lines"]["offsets"] = serde_json::json!([0, 2]);
        json["verts"]["offsets"] = serde_json::json!([]);
        assert!(serde_json::from_value::<PolyData>(json).is_err());
    }

    #[test]
    fn test_cells_are_typed_in_array_order() {
        let mut pd = PolyData::with_points(vec![DVec3::ZERO; 5]);
        pd.insert_strip(&[0, 1, 2, 3]);
        pd.insert_polygon(&[0, 1, 2]);
        pd.insert_line(&[0, 1, 2]);
        pd.insert_line(&[3, 4]);
        pd.insert_vertex(&[0, 1]);
        pd.insert_vertex(&[4]);

        let types: Vec<CellType> = pd.cells().map(|(ty, _)| ty).collect();
        assert_eq!(
            types,
            vec![
                CellType::PolyVertex,
                CellType::Vertex,
                CellType::PolyLine,
                CellType::Line,
                CellType::Polygon,
                CellType::TriangleStrip,
            ]
        );
    }
}
