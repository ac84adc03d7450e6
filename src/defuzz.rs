use std::iter::Sum;

use num::Float;

use crate::curve::FuzzyCurve;
use crate::error::NoRuleFired;

/// Discrete centroid (weighted average) of a sampled membership curve:
/// `sum(degree * sample) / sum(degree)`.
///
/// A curve with zero total mass has no centroid, so this returns `None`
/// rather than dividing 0/0 into a NaN. Degrees are non-negative, so a
/// zero sum means every degree is zero.
pub fn centroid<F: Float + Sum>(samples: &[F], degrees: &[F]) -> Option<F> {
    let mass = degrees.iter().copied().sum::<F>();

    if mass == F::zero() {
        return None;
    }

    let moment = samples
        .iter()
        .zip(degrees.iter())
        .map(|(&x, &d)| x * d)
        .sum::<F>();

    Some(moment / mass)
}

/// Collapse an aggregated output curve to one crisp value, reporting the
/// zero-mass case as [`NoRuleFired`] instead of a spurious number.
pub fn defuzzify(curve: &FuzzyCurve) -> Result<f64, NoRuleFired> {
    centroid(curve.samples(), curve.degrees()).ok_or(NoRuleFired)
}
