//! Request and response shapes exchanged with clients.
//!
//! These are thin compositions of the domain models; the only logic here is
//! validation of incoming requests and the mapping of outcomes into the
//! two response shapes.

use crate::models::{
    CostContext, CostContextError, DemandModel, DemandModelError, Derivation,
    OptimizationResult, Regression, Sample, Warning,
};

/// A request to fit a linear demand curve to observed samples
#[derive(Clone, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitRequest {
    /// The observed (price, quantity) samples
    pub data: Vec<Sample>,
}

/// The fitted demand curve, both as regression coefficients and as (α, β)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct FitResponse {
    /// α = intercept
    pub alpha: f64,
    /// β = −slope
    pub beta: f64,
    /// The raw regression intercept
    pub intercept: f64,
    /// The raw regression slope
    pub slope: f64,
    /// The coefficient of determination, or null when undefined
    pub r2: Option<f64>,
    /// True when the fitted demand does not decrease with price (β ≤ 0)
    pub invalid_slope: bool,
    /// The number of samples fitted
    pub samples: usize,
}

impl FitResponse {
    /// Compose the response from a successful regression.
    ///
    /// A non-decreasing fit is still reported, with `invalid_slope` set so the
    /// client can flag it.
    pub fn assemble(regression: &Regression) -> Self {
        let demand = DemandModel::from(regression);
        Self {
            alpha: demand.alpha(),
            beta: demand.beta(),
            intercept: regression.intercept,
            slope: regression.slope,
            r2: regression.r2,
            invalid_slope: !demand.is_downward_sloping(),
            samples: regression.samples,
        }
    }
}

impl From<Regression> for FitResponse {
    fn from(value: Regression) -> Self {
        Self::assemble(&value)
    }
}

/// A request to optimize the price under a linear demand curve
#[derive(Clone, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizeRequest {
    /// Demand at a price of zero
    pub alpha: f64,
    /// Drop in demand per unit increase of price
    pub beta: f64,
    /// Variable cost per unit sold
    #[cfg_attr(feature = "serde", serde(rename = "c", alias = "unitCost"))]
    pub unit_cost: f64,
    /// Fixed cost
    #[cfg_attr(feature = "serde", serde(rename = "F", alias = "fixedCost"))]
    pub fixed_cost: f64,
    /// Lowest admissible price
    #[cfg_attr(feature = "serde", serde(rename = "pMin", alias = "priceMin"))]
    pub price_min: f64,
    /// Highest admissible price
    #[cfg_attr(feature = "serde", serde(rename = "pMax", alias = "priceMax"))]
    pub price_max: f64,
}

impl OptimizeRequest {
    /// Validate the request into the domain models the optimizer consumes
    pub fn validate(&self) -> Result<(DemandModel, CostContext), OptimizeRequestError> {
        let demand = DemandModel::new(self.alpha, self.beta)?;
        let cost = CostContext::new(
            self.unit_cost,
            self.fixed_cost,
            self.price_min,
            self.price_max,
        )?;
        Ok((demand, cost))
    }
}

/// Errors that can occur when validating an optimize request
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum OptimizeRequestError {
    /// The demand coefficients are invalid
    #[error(transparent)]
    Demand(#[from] DemandModelError),
    /// The costs or price interval are invalid
    #[error(transparent)]
    Cost(#[from] CostContextError),
}

/// The optimal price and its derived metrics
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct OptimizeResponse {
    /// The optimal price
    pub p_opt: f64,
    /// Quantity sold at the optimal price
    pub q_opt: f64,
    /// Revenue at the optimal price
    pub revenue: f64,
    /// Profit at the optimal price
    pub profit_opt: f64,
    /// Margin over unit cost, or null when the price is zero
    pub margin: Option<f64>,
    /// Price elasticity of demand, or null when there is no demand
    pub elasticity: Option<f64>,
    /// Whether the price interval determined the answer
    pub used_boundary: bool,
    /// The unconstrained optimum, or null when demand is degenerate
    pub p_star: Option<f64>,
    /// Non-fatal anomalies, e.g. `degenerate_demand`
    pub warnings: Vec<Warning>,
    /// The symbolic derivation
    pub derivation: Derivation,
}

impl From<OptimizationResult> for OptimizeResponse {
    fn from(value: OptimizationResult) -> Self {
        let OptimizationResult {
            p_opt,
            q_opt,
            revenue,
            profit_opt,
            margin,
            elasticity,
            used_boundary,
            p_star,
            warnings,
            derivation,
        } = value;

        Self {
            p_opt,
            q_opt,
            revenue,
            profit_opt,
            margin,
            elasticity,
            used_boundary,
            p_star,
            warnings,
            derivation,
        }
    }
}

/// The body of every failed request
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorResponse {
    /// A human-readable description of the failure
    pub error: String,
}

impl ErrorResponse {
    /// Wrap anything displayable as an error response
    pub fn new(error: impl std::fmt::Display) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}
