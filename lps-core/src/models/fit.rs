/// The raw outcome of regressing quantity on price, q ≈ intercept + slope·p.
///
/// For plausible demand data the slope is negative.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema), schemars(inline))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Regression {
    /// The fitted quantity at a price of zero
    pub intercept: f64,
    /// The fitted change in quantity per unit of price
    pub slope: f64,
    /// The coefficient of determination, in [0, 1], or None when undefined
    pub r2: Option<f64>,
    /// The number of samples the regression was fitted on
    pub samples: usize,
}

/// Errors that can occur when fitting a demand curve
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum FitError {
    /// The samples do not determine a line
    #[error("insufficient data: {0}")]
    InsufficientData(#[from] InsufficientData),
    /// The fitted coefficients overflowed
    #[error("the fitted coefficients are not finite")]
    NonFinite,
}

/// The ways in which a set of samples can fail to determine a regression line
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum InsufficientData {
    /// Fewer than two samples were provided
    #[error("at least 2 (price, quantity) samples are required, got {0}")]
    TooFewSamples(usize),
    /// Every sample has the same price, so the slope is undetermined
    #[error("all {0} samples share the same price")]
    ConstantPrice(usize),
}
