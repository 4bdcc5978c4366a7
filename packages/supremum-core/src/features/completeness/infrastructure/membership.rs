//! Membership tests against interval and point components

use crate::features::materialize::{IntervalExtent, Materialization, Materialized};

/// Interval extents plus point coordinates on each component's bound axis
pub struct MembershipIndex {
    intervals: Vec<IntervalExtent>,
    values: Vec<f64>,
    tolerance: f64,
}

impl MembershipIndex {
    pub fn new(materialization: &Materialization, tolerance: f64) -> Self {
        let mut values = Vec::new();
        for component in &materialization.components {
            if let Materialized::Points { points, axis, .. } = &component.body {
                values.extend(points.iter().map(|p| p.coord(*axis)));
            }
        }

        Self {
            intervals: materialization.intervals().copied().collect(),
            values,
            tolerance,
        }
    }

    /// Whether `value` lies in some interval or matches some point
    pub fn contains(&self, value: f64) -> bool {
        self.intervals.iter().any(|i| i.contains(value, self.tolerance))
            || self.values.iter().any(|v| (v - value).abs() <= self.tolerance)
    }

    /// Finite open endpoints that no component contains
    ///
    /// Such an endpoint is a limit point outside the set, so the set is not
    /// closed.
    pub fn missing_limit_points(&self) -> Vec<f64> {
        let mut missing = Vec::new();
        for extent in &self.intervals {
            let open_ends = [
                (extent.left_open && extent.start.is_finite()).then_some(extent.start),
                (extent.right_open && extent.end.is_finite()).then_some(extent.end),
            ];
            for point in open_ends.into_iter().flatten() {
                if !self.contains(point) {
                    missing.push(point);
                }
            }
        }
        missing
    }
}
