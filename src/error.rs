use std::fmt;

/// Rejected controller configuration. Only raised at construction time;
/// a built controller can never hit one of these during inference.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// Triangle breakpoints must satisfy a <= b <= c.
    UnorderedBreakpoints { a: f64, b: f64, c: f64 },
    /// Universe bounds must be increasing and the step positive.
    EmptyUniverse { min: f64, max: f64, step: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnorderedBreakpoints { a, b, c } => {
                write!(f, "triangle breakpoints not ordered: ({a}, {b}, {c})")
            },
            Self::EmptyUniverse { min, max, step } => {
                write!(f, "universe {min}..={max} with step {step} has no samples")
            },
        }
    }
}

impl std::error::Error for ConfigError {}

/// The aggregated output curve carried no area, so its centroid is
/// undefined. Happens when the inputs sit outside every membership
/// support, or when they land on the one antecedent pair the rule bank
/// has no entry for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoRuleFired;

impl fmt::Display for NoRuleFired {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no rule fired: aggregated output curve has zero area")
    }
}

impl std::error::Error for NoRuleFired {}
