use log::debug;

use crate::curve::FuzzyCurve;
use crate::defuzz;
use crate::error::{ConfigError, NoRuleFired};
use crate::inference;
use crate::membership::{LinguisticVariable, Triangle};
use crate::rules::{Rule, RULES};
use crate::universe::Universe;

/// Fuzzy kettle controller: maps a (current, desired) temperature pair in
/// degrees Celsius to a heating power percentage.
///
/// All configuration is frozen at construction, every method takes
/// `&self`, and each call allocates only its own transient curve, so a
/// single controller can serve concurrent callers without locking.
pub struct KettleController {
    temperature: LinguisticVariable,
    power: LinguisticVariable,
    rules: &'static [Rule],
}

impl KettleController {
    /// The standard kettle profile: both universes span 0..=100 in unit
    /// steps, with Low/Medium/High triangles at (0, 0, 50), (25, 50, 75)
    /// and (50, 100, 100) for temperatures and power alike.
    pub fn new() -> Self {
        Self::standard().expect("builtin kettle profile is valid")
    }

    fn standard() -> Result<Self, ConfigError> {
        let levels = |name| -> Result<LinguisticVariable, ConfigError> {
            Ok(LinguisticVariable::new(
                name,
                Universe::new(0., 100., 1.)?,
                Triangle::new(0., 0., 50.)?,
                Triangle::new(25., 50., 75.)?,
                Triangle::new(50., 100., 100.)?,
            ))
        };

        Ok(Self::with_variables(levels("temperature")?, levels("power")?))
    }

    /// Build a controller over custom variables. Breakpoint and universe
    /// validation already happened in [`Triangle::new`] and
    /// [`Universe::new`], so this cannot fail. The temperature variable
    /// serves both the current reading and the desired target.
    pub fn with_variables(temperature: LinguisticVariable, power: LinguisticVariable) -> Self {
        Self {
            temperature,
            power,
            rules: &RULES,
        }
    }

    /// Run one inference: fuzzify both inputs, fire the rule bank,
    /// aggregate, defuzzify. Returns [`NoRuleFired`] when the aggregated
    /// curve has no area (inputs outside every membership support, or the
    /// uncovered hotter-than-target case).
    pub fn control(&self, current: f64, desired: f64) -> Result<f64, NoRuleFired> {
        let curve = self.aggregate(current, desired);
        let output = defuzz::defuzzify(&curve)?;

        debug!("current={current} desired={desired} -> power={output:.2}%");

        Ok(output)
    }

    /// The aggregated fuzzy output curve for one input pair, before
    /// defuzzification. Display layers plot this directly; [`control`]
    /// is this plus the centroid.
    ///
    /// [`control`]: Self::control
    pub fn aggregate(&self, current: f64, desired: f64) -> FuzzyCurve {
        inference::evaluate(&self.temperature, &self.power, self.rules, current, desired)
    }

    pub fn temperature(&self) -> &LinguisticVariable {
        &self.temperature
    }

    pub fn power(&self) -> &LinguisticVariable {
        &self.power
    }
}

impl Default for KettleController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terms::Level;

    #[test]
    fn standard_profile_builds() {
        let kettle = KettleController::new();

        assert_eq!(kettle.temperature().universe().len(), 101);
        assert_eq!(kettle.power().universe().len(), 101);
        assert_eq!(kettle.temperature().membership(Level::Low, 0.), 1.);
    }

    #[test]
    fn custom_profile_is_accepted() {
        let var = |name| {
            LinguisticVariable::new(
                name,
                Universe::new(0., 10., 0.5).unwrap(),
                Triangle::new(0., 0., 5.).unwrap(),
                Triangle::new(2.5, 5., 7.5).unwrap(),
                Triangle::new(5., 10., 10.).unwrap(),
            )
        };
        let kettle = KettleController::with_variables(var("temperature"), var("power"));

        let output = kettle.control(5., 2.).unwrap();
        assert!((0. ..=10.).contains(&output));
    }
}
