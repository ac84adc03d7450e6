use fixed_map::Map as FixedMap;

use crate::curve::FuzzyCurve;
use crate::error::ConfigError;
use crate::terms::Level;
use crate::universe::Universe;

/// A triangular membership function with breakpoints `a <= b <= c`.
///
/// Evaluates to zero outside `[a, c]`, rises linearly to exactly one at
/// `b`, and falls linearly back to zero at `c`. When `a == b` (or
/// `b == c`) the corresponding edge degenerates to a step, which is how a
/// shoulder term like Low(0, 0, 50) is written.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    a: f64,
    b: f64,
    c: f64,
}

impl Triangle {
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, ConfigError> {
        if a <= b && b <= c {
            Ok(Self { a, b, c })
        } else {
            Err(ConfigError::UnorderedBreakpoints { a, b, c })
        }
    }

    /// Analytic evaluation at any real input; no grid lookup involved, so
    /// off-grid queries interpolate for free.
    pub fn degree(&self, x: f64) -> f64 {
        if x < self.a || x > self.c {
            0.
        } else if x == self.b {
            1.
        } else if x < self.b {
            (x - self.a) / (self.b - self.a)
        } else {
            (self.c - x) / (self.c - self.b)
        }
    }
}

/// A named variable with one triangular term per [`Level`], all sharing a
/// single universe. Frozen at construction; inference only reads it.
#[derive(Clone, Debug)]
pub struct LinguisticVariable {
    name: &'static str,
    universe: Universe,
    terms: FixedMap<Level, Triangle>,
}

impl LinguisticVariable {
    pub fn new(
        name: &'static str,
        universe: Universe,
        low: Triangle,
        medium: Triangle,
        high: Triangle,
    ) -> Self {
        let mut terms = FixedMap::new();

        terms.insert(Level::Low, low);
        terms.insert(Level::Medium, medium);
        terms.insert(Level::High, high);

        Self {
            name,
            universe,
            terms,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    /// Membership degree of the crisp value `x` in `level`.
    pub fn membership(&self, level: Level, x: f64) -> f64 {
        self.terms
            .get(level)
            .map(|triangle| triangle.degree(x))
            .unwrap_or(0.)
    }

    /// The term's membership sampled across the whole universe. Display
    /// layers plot these curves; inference never needs them.
    pub fn term_curve(&self, level: Level) -> FuzzyCurve {
        let samples = self.universe.samples().to_vec();
        let degrees = samples.iter().map(|&x| self.membership(level, x)).collect();

        FuzzyCurve::new(samples, degrees)
    }
}
