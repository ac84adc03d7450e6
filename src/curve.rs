/// A membership degree sampled at every point of the output universe.
///
/// Plain data on purpose: a presentation layer consumes the
/// (sample, degree) pairs directly, so the engine never depends on any
/// plotting machinery. Produced fresh per inference call and either
/// defuzzified or handed off.
#[derive(Clone, Debug, PartialEq)]
pub struct FuzzyCurve {
    samples: Vec<f64>,
    degrees: Vec<f64>,
}

impl FuzzyCurve {
    pub(crate) fn new(samples: Vec<f64>, degrees: Vec<f64>) -> Self {
        debug_assert_eq!(samples.len(), degrees.len());

        Self { samples, degrees }
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn degrees(&self) -> &[f64] {
        &self.degrees
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.samples
            .iter()
            .copied()
            .zip(self.degrees.iter().copied())
    }
}
