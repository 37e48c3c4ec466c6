use crate::models::Regression;

/// A linear demand curve q(p) = α − β·p.
///
/// For an economically plausible curve, quantity falls as price rises, i.e.
/// β > 0. A model with β ≤ 0 can still be constructed (a regression may well
/// produce one), but consumers are expected to check [`DemandModel::is_downward_sloping`]
/// and surface the anomaly rather than silently trusting the curve.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "DemandModelDto")
)]
pub struct DemandModel {
    alpha: f64,
    beta: f64,
}

impl DemandModel {
    /// Creates a new demand model, requiring finite coefficients
    pub fn new(alpha: f64, beta: f64) -> Result<Self, DemandModelError> {
        if alpha.is_finite() && beta.is_finite() {
            Ok(Self { alpha, beta })
        } else {
            Err(DemandModelError::NonFinite { alpha, beta })
        }
    }

    /// The quantity demanded at a price of zero
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// The drop in quantity per unit increase of price
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Whether demand strictly decreases with price (β > 0)
    pub fn is_downward_sloping(&self) -> bool {
        self.beta > 0.0
    }

    /// The quantity demanded at `price`, floored at zero
    pub fn quantity_at(&self, price: f64) -> f64 {
        (self.alpha - self.beta * price).max(0.0)
    }
}

impl From<&Regression> for DemandModel {
    /// Maps the regression q = intercept + slope·p onto q = α − β·p.
    fn from(value: &Regression) -> Self {
        Self {
            alpha: value.intercept,
            // subtracting from zero avoids reporting a flat fit as β = -0
            beta: 0.0 - value.slope,
        }
    }
}

/// A DTO to ensure that we always validate when we deserialize from an untrusted source
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema), schemars(inline))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct DemandModelDto {
    /// The intercept α
    pub alpha: f64,
    /// The slope β
    pub beta: f64,
}

impl TryFrom<DemandModelDto> for DemandModel {
    type Error = DemandModelError;

    fn try_from(value: DemandModelDto) -> Result<Self, Self::Error> {
        Self::new(value.alpha, value.beta)
    }
}

/// Errors that can occur when constructing a DemandModel
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum DemandModelError {
    /// Error when either coefficient is NaN or infinite
    #[error("invalid demand: alpha and beta must be finite, got alpha={alpha}, beta={beta}")]
    NonFinite {
        /// The offending intercept
        alpha: f64,
        /// The offending slope
        beta: f64,
    },
}
