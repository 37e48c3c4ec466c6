use crate::models::{CostContext, DemandModel, FitError, OptimizationResult, Regression, Sample};

/// Interface for estimating a linear demand curve from observations.
///
/// Implementations must be pure: the same samples always produce the same
/// regression, and no state is shared between calls.
pub trait Fitter {
    /// Regress quantity on price.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::InsufficientData`] when the samples do not determine
    /// a line (fewer than two samples, or no variation in price).
    fn fit(&self, samples: &[Sample]) -> Result<Regression, FitError>;
}

/// Interface for computing the profit-maximizing price under linear demand.
///
/// The inputs have already been validated on construction, so an optimizer
/// only fails for reasons internal to its numerical method.
pub trait Optimizer {
    /// Error type for solver failures
    type Error: std::error::Error + Send + Sync + 'static;

    /// Maximize (p − c)·q(p) − F over the admissible price interval.
    ///
    /// # Returns
    ///
    /// The chosen price, its derived metrics and a symbolic derivation of the
    /// unconstrained optimum.
    fn optimize(
        &self,
        demand: &DemandModel,
        cost: &CostContext,
    ) -> Result<OptimizationResult, Self::Error>;
}

/// The bundle of implementations an API adapter is built from.
pub trait Application {
    /// The implementation used for fitting demand curves
    type Fitter: Fitter;

    /// The implementation used for optimizing prices
    type Optimizer: Optimizer;

    /// Get the demand fitter
    fn fitter(&self) -> &Self::Fitter;

    /// Get the price optimizer
    fn optimizer(&self) -> &Self::Optimizer;
}
