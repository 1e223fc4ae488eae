//! Skirt quads between consecutive rings, and vertex polylines.

use skirt_topology::{CellArray, DirectedEdge};

use crate::sweep::SweepSchedule;

/// Emit one quad per sweep step for the edge `a -> b`.
///
/// Quad `k` is `(a_k, a_{k+1}, b_{k+1}, b_k)`. It runs along ring `k` as
/// `b -> a`, against the owning cell, so the skirt joins the cell and its caps
/// with consistent orientation.
pub fn stitch_edge(schedule: &SweepSchedule, edge: DirectedEdge, n: u32, quads: &mut CellArray) {
    let DirectedEdge { from: a, to: b } = edge;
    for k in 0..schedule.resolution() {
        quads.push(&[
            schedule.point_id(k, a, n),
            schedule.point_id(k + 1, a, n),
            schedule.point_id(k + 1, b, n),
            schedule.point_id(k, b, n),
        ]);
    }
}

/// Emit the polyline traced by point `id` through every sweep step.
pub fn vertex_polyline(schedule: &SweepSchedule, id: u32, n: u32, lines: &mut CellArray) {
    lines.push_iter((0..=schedule.resolution()).map(|k| schedule.point_id(k, id, n)));
}
