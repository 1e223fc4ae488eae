//! Output assembly for the rotational extrusion filter.

use log::{debug, trace};
use skirt_core::error::Result;
use skirt_core::traits::Validate;
use skirt_topology::{classify, PolyData};

use crate::cap::{cap_cells, cap_strips};
use crate::params::RotationalExtrusion;
use crate::stitch::{stitch_edge, vertex_polyline};
use crate::sweep::SweepSchedule;

impl RotationalExtrusion {
    /// Sweep `input` around the z-axis.
    ///
    /// The output holds every ring's points (ring-major), then:
    /// - `polys`: free-edge skirt quads, line skirt quads, polygon caps
    /// - `lines`: vertex polylines, line caps
    /// - `strips`: strip caps
    ///
    /// Caps are only emitted when capping is on and the sweep is open. Input
    /// without points or cells gives an empty output. The only errors are cells
    /// that reference missing points and outputs too large for `u32` ids;
    /// nothing is produced in either case.
    pub fn execute(&self, input: &PolyData) -> Result<PolyData> {
        if input.is_empty() {
            debug!("Rotational extrusion: no points or cells, nothing to sweep");
            return Ok(PolyData::new());
        }
        input.validate()?;

        let schedule = SweepSchedule::new(self);
        let topology = classify(input);
        let n = input.number_of_points() as u32;
        let rings = schedule.ring_count()?;

        let mut output = PolyData::with_points(schedule.generate_points(&input.points)?);
        debug!(
            "Rotational extrusion: {} point(s) x {} ring(s), angle {}, translation {}, delta radius {}{}",
            n,
            rings,
            self.angle(),
            self.translation(),
            self.delta_radius(),
            if schedule.is_closed() { " (closed)" } else { "" }
        );

        for &edge in &topology.free_edges {
            stitch_edge(&schedule, edge, n, &mut output.polys);
        }
        trace!("{} free edge skirt quad(s)", output.polys.len());

        for &segment in &topology.line_segments {
            stitch_edge(&schedule, segment, n, &mut output.polys);
        }
        trace!("{} skirt quad(s) after line segments", output.polys.len());

        for &id in &topology.vertices {
            vertex_polyline(&schedule, id, n, &mut output.lines);
        }
        trace!("{} vertex polyline(s)", output.lines.len());

        if self.capping() {
            if schedule.is_closed() {
                debug!("Capping skipped: the sweep closes on itself");
            } else {
                cap_cells(&schedule, &input.polys, n, &mut output.polys);
                cap_cells(&schedule, &input.lines, n, &mut output.lines);
                cap_strips(&schedule, &input.strips, n, &mut output.strips);
                trace!(
                    "Caps: {} polygon(s), {} line(s), {} strip(s) in total",
                    output.polys.len(),
                    output.lines.len(),
                    output.strips.len()
                );
            }
        }

        Ok(output)
    }
}

/// Sweep `input` with `params`. See [`RotationalExtrusion::execute`].
pub fn rotational_extrude(input: &PolyData, params: &RotationalExtrusion) -> Result<PolyData> {
    params.execute(input)
}
