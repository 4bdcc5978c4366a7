//! Union law: sup(A ∪ B) = max(sup A, sup B), inf(A ∪ B) = min(inf A, inf B)
//!
//! Any unbounded component makes the union unbounded on that side. A
//! max/min exists only when some component attains the union's extreme.

use crate::features::bounds::domain::{ComponentBounds, Side, UnionBounds};
use crate::shared::models::ExtendedReal;

#[derive(Clone, Copy)]
enum Extreme {
    Upper,
    Lower,
}

/// Fold per-component bounds; an empty slice is the empty set
pub fn fold_union(components: &[ComponentBounds], attainment_epsilon: f64) -> UnionBounds {
    if components.is_empty() {
        return UnionBounds::empty();
    }

    let (sup, max) = fold_side(components, Extreme::Upper, attainment_epsilon);
    let (inf, min) = fold_side(components, Extreme::Lower, attainment_epsilon);

    UnionBounds {
        is_empty: false,
        bounded_above: sup.is_finite(),
        bounded_below: inf.is_finite(),
        sup: Some(sup),
        inf: Some(inf),
        max,
        min,
    }
}

fn fold_side(components: &[ComponentBounds], extreme: Extreme, epsilon: f64) -> (ExtendedReal, Option<f64>) {
    let side = |c: &ComponentBounds| match extreme {
        Extreme::Upper => c.upper,
        Extreme::Lower => c.lower,
    };

    if components.iter().any(|c| side(c) == Side::Unbounded) {
        let infinite = match extreme {
            Extreme::Upper => ExtendedReal::PosInfinity,
            Extreme::Lower => ExtendedReal::NegInfinity,
        };
        return (infinite, None);
    }

    let values = components.iter().filter_map(|c| side(c).value());
    let best = match extreme {
        Extreme::Upper => values.fold(f64::NEG_INFINITY, f64::max),
        Extreme::Lower => values.fold(f64::INFINITY, f64::min),
    };

    let attained = components.iter().any(|c| match side(c) {
        Side::Bound {
            value,
            attained: true,
        } => (value - best).abs() <= epsilon,
        _ => false,
    });

    (ExtendedReal::Finite(best), attained.then_some(best))
}
