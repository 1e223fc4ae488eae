//! Caps: copies of the generating cells at the first and last ring.
//!
//! The first-ring copy keeps the input orientation and the last-ring copy is
//! reversed, so the two caps face opposite ways along the sweep.

use skirt_topology::CellArray;

use crate::sweep::SweepSchedule;

/// Copy `cells` to ring 0 as-is, then to the last ring reversed.
///
/// Used for polygons and for lines.
pub fn cap_cells(schedule: &SweepSchedule, cells: &CellArray, n: u32, out: &mut CellArray) {
    let last = schedule.resolution();
    out.extend_from(cells);
    for cell in cells {
        out.push_iter(cell.iter().rev().map(|&id| schedule.point_id(last, id, n)));
    }
}

/// Copy triangle strips to ring 0 as-is, then to the last ring with every
/// triangle's winding flipped.
///
/// Reversing the point order flips a strip only when it has an odd number of
/// points. An even-length strip `p0..p(n-1)` is split instead: `p1..p(n-1)`
/// starts one triangle later, which flips the parity of every remaining
/// triangle, and `(p0, p2, p1)` is the flipped first triangle.
pub fn cap_strips(schedule: &SweepSchedule, strips: &CellArray, n: u32, out: &mut CellArray) {
    let last = schedule.resolution();
    let at_last = |id: &u32| schedule.point_id(last, *id, n);
    out.extend_from(strips);
    for strip in strips {
        if strip.len() % 2 == 1 {
            out.push_iter(strip.iter().rev().map(at_last));
        } else {
            out.push_iter(strip[1..].iter().map(at_last));
            out.push_iter([strip[0], strip[2], strip[1]].iter().map(at_last));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::RotationalExtrusion;

    fn half_turn() -> SweepSchedule {
        SweepSchedule::new(&RotationalExtrusion::new().with_angle(180.0).with_resolution(2))
    }

    #[test]
    fn test_polygon_caps() {
        let mut polys = CellArray::new();
        polys.push(&[0, 1, 2, 3]);
        let mut out = CellArray::new();
        cap_cells(&half_turn(), &polys, 4, &mut out);
        assert_eq!(out.len(), 2);
        assert_eq!(out.get(0), Some(&[0, 1, 2, 3][..]));
        assert_eq!(out.get(1), Some(&[11, 10, 9, 8][..]));
    }

    #[test]
    fn test_odd_strip_is_reversed() {
        let mut strips = CellArray::new();
        strips.push(&[0, 1, 2, 3, 4]);
        let mut out = CellArray::new();
        cap_strips(&half_turn(), &strips, 5, &mut out);
        assert_eq!(out.len(), 2);
        assert_eq!(out.get(1), Some(&[14, 13, 12, 11, 10][..]));
    }

    #[test]
    fn test_even_strip_is_split() {
        let mut strips = CellArray::new();
        strips.push(&[0, 1, 2, 3]);
        let mut out = CellArray::new();
        cap_strips(&half_turn(), &strips, 4, &mut out);
        assert_eq!(out.len(), 3);
        assert_eq!(out.get(0), Some(&[0, 1, 2, 3][..]));
        assert_eq!(out.get(1), Some(&[9, 10, 11][..]));
        assert_eq!(out.get(2), Some(&[8, 10, 9][..]));
    }
}
