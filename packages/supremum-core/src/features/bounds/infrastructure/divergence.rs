//! Tail divergence detection for custom sequences
//!
//! Finitely many samples can never prove unboundedness; this is a heuristic.
//! A tail is flagged when a tail sample exceeds the magnitude threshold (overflow
//! counts), or when the tail samples keep strictly increasing and the last step is
//! still larger than the increment threshold.

use crate::config::HeuristicConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

pub fn diverges(tail: &[f64], direction: Direction, heuristics: &HeuristicConfig) -> bool {
    let oriented: Vec<f64> = tail
        .iter()
        .filter(|v| !v.is_nan())
        .map(|v| match direction {
            Direction::Up => *v,
            Direction::Down => -*v,
        })
        .collect();

    if oriented.iter().any(|v| *v > heuristics.divergence_magnitude) {
        return true;
    }

    if oriented.len() < 2 {
        return false;
    }

    let increasing = oriented.windows(2).all(|w| w[1] > w[0]);
    let last_step = oriented[oriented.len() - 1] - oriented[oriented.len() - 2];
    increasing && last_step > heuristics.divergence_increment
}
