use crate::DEFAULT_PRECISION;

/// Implementation using the closed-form vertex of the profit parabola
pub mod closed_form;

/// Implementation using the Clarabel interior point solver
#[cfg(feature = "clarabel")]
pub mod clarabel;

/// Settings shared by the optimizer implementations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Decimals used when rendering the derivation
    pub precision: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}
