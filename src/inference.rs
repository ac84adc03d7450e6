use fixed_map::Map as FixedMap;
use log::trace;

use crate::curve::FuzzyCurve;
use crate::membership::LinguisticVariable;
use crate::rules::Rule;
use crate::terms::Level;

/// Membership degrees of one crisp input across all three levels of a
/// variable.
pub fn fuzzify(var: &LinguisticVariable, x: f64) -> FixedMap<Level, f64> {
    let mut degrees = FixedMap::new();

    for level in Level::ALL {
        degrees.insert(level, var.membership(level, x));
    }

    degrees
}

/// Mamdani min/max evaluation of a rule bank over the output universe.
///
/// Fuzzifies both crisp inputs, fires each rule at the minimum of its two
/// antecedent degrees, clips the consequent power term to that strength
/// (min implication), and folds every clipped curve together with a
/// pointwise maximum. Pure and deterministic; inputs outside every
/// membership support simply yield an all-zero curve.
pub fn evaluate(
    temperature: &LinguisticVariable,
    power: &LinguisticVariable,
    rules: &[Rule],
    current: f64,
    desired: f64,
) -> FuzzyCurve {
    let current_degrees = fuzzify(temperature, current);
    let desired_degrees = fuzzify(temperature, desired);

    let samples = power.universe().samples().to_vec();
    let mut aggregated = vec![0.; samples.len()];

    for rule in rules {
        let strength = f64::min(
            current_degrees.get(rule.current).copied().unwrap_or(0.),
            desired_degrees.get(rule.desired).copied().unwrap_or(0.),
        );

        trace!(
            "rule ({:?}, {:?}) -> {:?} fired at {strength}",
            rule.current,
            rule.desired,
            rule.power
        );

        if strength == 0. {
            continue;
        }

        for (degree, &x) in aggregated.iter_mut().zip(&samples) {
            let clipped = f64::min(strength, power.membership(rule.power, x));
            *degree = f64::max(*degree, clipped);
        }
    }

    FuzzyCurve::new(samples, aggregated)
}
