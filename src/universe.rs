use crate::error::ConfigError;

/// An ordered, evenly spaced set of sample points over a closed interval.
///
/// Both endpoints are included when `max - min` is a whole number of
/// steps, matching how numpy's `arange(min, max + step, step)` behaves in
/// the usual integer-step case.
#[derive(Clone, Debug, PartialEq)]
pub struct Universe {
    min: f64,
    max: f64,
    step: f64,
    samples: Vec<f64>,
}

impl Universe {
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, ConfigError> {
        if !(min < max) || !(step > 0.0) {
            return Err(ConfigError::EmptyUniverse { min, max, step });
        }

        // floor is closest approx to what python does for int() conversion. But at least one edgecase exists
        // where the decimals are really long: int(4.999999999999999999) == 5
        let len = ((max - min) / step).floor() as usize + 1;
        let samples = (0..len).map(|i| min + step * i as f64).collect();

        Ok(Self {
            min,
            max,
            step,
            samples,
        })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }
}
