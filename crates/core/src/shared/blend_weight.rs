/// Weight applied to the first image when none (or an invalid one) is supplied.
pub const DEFAULT_ALPHA: f64 = 0.5;

/// Weight α of the first source in a linear blend, always within `[0.0, 1.0]`.
///
/// The second source's weight β is derived as `1 - α` on demand and never
/// stored, so the two always sum to one.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct BlendWeight {
    alpha: f64,
}

impl BlendWeight {
    /// Returns `None` for values outside `[0.0, 1.0]`, including NaN.
    pub fn new(alpha: f64) -> Option<Self> {
        (0.0..=1.0).contains(&alpha).then_some(Self { alpha })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        1.0 - self.alpha
    }

    /// The weight with the roles of the two sources swapped.
    pub fn complement(&self) -> Self {
        Self { alpha: self.beta() }
    }
}

impl Default for BlendWeight {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
        }
    }
}

impl std::fmt::Display for BlendWeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "alpha={} beta={}", self.alpha, self.beta())
    }
}
