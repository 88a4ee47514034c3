//! Even distribution of nodes around a circle

use std::f64::consts::TAU;

use super::types::Point;

/// Positions for `count` nodes spaced evenly on a circle of `radius`
///
/// Node `i` sits at central angle `2π·i/count + offset`. Index order is kept,
/// so the result can be zipped with labels. A zero count yields no points.
pub fn orbit_positions(count: usize, radius: f64, offset: f64) -> Vec<Point> {
    (0..count)
        .map(|i| {
            let angle = (i as f64 / count as f64) * TAU + offset;
            Point::new(angle.cos() * radius, angle.sin() * radius)
        })
        .collect()
}
